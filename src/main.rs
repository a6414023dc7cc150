//! sshguard utility - main entrypoint

fn main() -> anyhow::Result<std::process::ExitCode> {
    sshguard::cli()
}
