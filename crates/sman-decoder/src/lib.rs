#![warn(clippy::pedantic)]

pub mod decoder;
pub mod error;

pub use decoder::{TagIter, Tags};
pub use error::DecodeError;
