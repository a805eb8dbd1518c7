//! Persistence for registry history and shared file helpers.

mod atomic;
pub mod registry;

pub use atomic::write_atomic;
