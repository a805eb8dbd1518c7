//! Configuration validation
//!
//! Rejects monitoring configurations that would produce meaningless verdicts
//! before any file is read.

mod error;
mod validator;

#[cfg(test)]
mod tests;

pub use error::ValidationError;
pub use validator::validate_config;
