pub mod api;
pub mod config;
pub mod console;
pub mod error;
pub mod fs;
pub mod replicate;
pub mod stock;

pub use error::{Error, Result};
