pub mod action;
pub use action::*;

pub mod odds;
pub use odds::*;

pub mod seat;
pub use seat::*;

pub mod session;
pub use session::*;

pub mod stacks;
pub use stacks::*;

pub mod state;
pub use state::*;
