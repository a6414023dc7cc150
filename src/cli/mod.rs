//! Command Line Interface for sshguard
mod args;
mod cli_main;
mod report;
pub(crate) mod styles;
pub use cli_main::cli;
