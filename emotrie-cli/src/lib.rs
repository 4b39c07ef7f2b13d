//! emotrie CLI library
//!
//! This library provides the command-line interface for turning
//! `emoji-test.txt` tables into category patterns.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
