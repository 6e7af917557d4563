pub mod answer;
pub use answer::*;

pub mod scenario;
pub use scenario::*;
