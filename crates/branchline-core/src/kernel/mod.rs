//! # Branchline Kernel
//!
//! Crate-wide plumbing shared by every subsystem: the aggregated
//! [`Error`](error::Error) type and application constants.
pub mod constants;
pub mod error;

pub use error::{Error, Result};

#[cfg(test)]
mod tests;
