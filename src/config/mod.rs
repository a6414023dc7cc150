//! # sshd configuration file parsing
//!
//! The input format is the one `sshd_config(5)` uses: one `Keyword value` directive per line,
//! with the keyword and value separated by whitespace.
//!
//! * Lines may end in `\n`, `\r\n` or a bare `\r`.
//! * Blank lines, and lines whose first non-whitespace character is `#`, are ignored.
//! * A keyword with no value is ignored.
//! * If a keyword appears more than once, the _last_ occurrence wins.
//!   **Note** `sshd` itself uses the first occurrence.
//! * Keywords are case-sensitive.
//!
//! `Include` and `Match` are not interpreted; they are recorded like any other directive.
//!
//! ### Example
//!
//! ```text
//! # Hardened defaults
//! PermitRootLogin no
//! PasswordAuthentication no
//! PubkeyAuthentication yes
//! Protocol 2
//! ```

mod errors;
pub use errors::LoadError;

mod files;
pub use files::SshdConfig;

mod lines;
use lines::{parse_line, split_lines, Line};

mod values;
pub use values::Setting;
