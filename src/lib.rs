pub mod cli;
pub mod error;
pub mod math;
pub mod screen;

pub use error::InvalidParameter;
pub use screen::{Resolution, Screen};
