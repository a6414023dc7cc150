//! Audits an OpenSSH server configuration file for a required set of security settings.
//!
//! The library side is two steps: [`config::SshdConfig::load`] reads a file, and
//! [`audit::audit`] compares the result against a [`audit::RequiredSettings`] table.
//!
//! ```no_run
//! use sshguard::{audit::{audit, RequiredSettings}, config::SshdConfig};
//!
//! let config = SshdConfig::load("/etc/ssh/sshd_config")?;
//! for finding in audit(&config, &RequiredSettings::hardened()) {
//!     println!(" - {finding}");
//! }
//! # Ok::<(), sshguard::config::LoadError>(())
//! ```

pub mod audit;
mod cli;
pub use cli::cli;
pub mod config;
mod util;
