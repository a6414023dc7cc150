// sshguard command-line arguments

use std::path::PathBuf;

use clap::Parser;

/// Where sshd keeps its configuration on most systems
pub(crate) const DEFAULT_CONFIG_PATH: &str = "/etc/ssh/sshd_config";

#[derive(Debug, Parser, Clone)]
#[command(
    about = "Audit SSH daemon configuration for security settings.",
    disable_version_flag(true)
)]
#[command(help_template(
    "\
{name}
{about-with-newline}
{usage-heading} {usage}
{before-help}
{all-args}{after-help}
"
))]
#[command(styles=super::styles::CLAP_STYLES)]
pub(crate) struct CliArgs {
    /// Path to the SSH configuration file
    #[arg(
        short,
        long,
        value_name("FILE"),
        default_value(DEFAULT_CONFIG_PATH)
    )]
    pub(crate) file: PathBuf,
}
