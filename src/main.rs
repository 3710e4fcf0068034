use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{CliFlags, Context, prompts};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("SAFEPASS_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    harden();

    let flags = CliFlags::parse();
    let mut ctx = Context::new(flags);

    match ctx.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(kind = e.kind(), "generation failed");
            prompts::error(&format!("I'm sorry: {e}"));
            ExitCode::FAILURE
        }
    }
}

/// Keep generated secrets out of core dumps.
#[cfg(target_os = "linux")]
fn harden() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
fn harden() {}
