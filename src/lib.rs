#![cfg_attr(not(test), no_std)]

mod average;
pub use average::*;
mod config;
pub use config::*;
mod error;
pub use error::*;

#[cfg(test)]
pub mod testing;
