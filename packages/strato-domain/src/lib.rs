pub mod document;
pub mod features;
pub mod frame;
pub mod market;
pub mod outcome;

mod error;

pub use error::{Error, Result};
