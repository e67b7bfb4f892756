//! Subcommand implementations.

pub mod check;
pub mod init;
pub mod list_types;
pub mod output;
