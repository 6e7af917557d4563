pub mod book;
pub use book::*;

pub mod combo;
pub use combo::*;

pub mod defaults;

pub mod range;
pub use range::*;

pub mod sampler;

pub mod shape;
pub use shape::*;

pub mod token;
pub use token::*;
