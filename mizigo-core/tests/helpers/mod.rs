//! Shared helpers for unit tests.


#[macro_use]
pub mod macros;
