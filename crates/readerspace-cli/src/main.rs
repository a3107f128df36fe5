
use anyhow::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use readerspace_accounting::Library;
use readerspace_cli::cli::{Cli, Command};
use readerspace_db::LedgerFile;
use readerspace_notify::Transport;

/// Log to stderr, RUST_LOG takes precedence over the verbose flag.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::init();
    init_logging(cli.verbose);

    let today = cli.today();
    let transport = Transport::from_config(cli.twilio_config());
    debug!(transport = transport.name(), ledger = %cli.ledger.display(), "starting");

    let store = LedgerFile::open(&cli.ledger);
    let mut library = Library::open(store, transport, cli.monthly_fee)?;

    match cli.command {
        Command::Members(cmd) => cmd.run(&mut library, today).await,
        Command::Payments(cmd) => cmd.run(&mut library, today).await,
    }?;

    Ok(())
}
