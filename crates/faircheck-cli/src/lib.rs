//! FairCheck CLI library
//!
//! The command-line surface standing in for the submission form: argument
//! parsing, field validation, configuration, and output formatting. The
//! core engine is invoked only after a submission passes validation.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod submission;

pub use cli::{Category, Cli, Command, Service};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use submission::Submission;
