//! CLI subcommand implementations.

pub mod check;
pub mod init;
pub mod list_blacklist;
pub mod output;
