pub mod config;
pub mod error;
pub mod filter;
pub mod locale;
pub mod paper;
pub mod statistics;

pub use error::{LoadError, Result};
