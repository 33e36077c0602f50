pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod corpus;
pub mod error;
pub mod output;
pub mod registry;
pub mod report;
pub mod scanner;

pub use error::{BcsError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VALIDATION_FAILED: i32 = 1;
pub const EXIT_SETUP_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
