//! Subcommand implementations.

pub mod contrast;
pub mod init;
pub mod list_rules;
pub mod output;
pub mod scan;
