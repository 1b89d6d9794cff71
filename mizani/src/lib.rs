//! This crate exposes a bounded stochastic local search with elitism and some helper
//! functionality which can be used to build decision-support heuristics.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod evolution;
pub mod prelude;
pub mod termination;
pub mod utils;
