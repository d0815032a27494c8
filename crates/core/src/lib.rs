#![forbid(unsafe_code)]

pub mod classifier;
pub mod error;
pub mod model;
pub mod number;

pub use error::Error;
