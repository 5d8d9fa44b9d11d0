//! uiplan CLI: compile instructions into whitelisted UI plans.

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "uiplan",
    version,
    about = "Deterministic instruction-to-UI-plan compiler: whitelisted trees, edit-mode patching, structural diffs"
)]
struct Cli {
    #[command(subcommand)]
    command: uiplan::cli::Commands,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("UIPLAN_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = uiplan::cli::dispatch(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
