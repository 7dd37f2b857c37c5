pub mod config;
pub mod core;
pub mod error;
pub mod generator;
mod verify;

pub use crate::core::*;
pub use error::{ModelError, ModelResult};
pub use verify::values_match;
