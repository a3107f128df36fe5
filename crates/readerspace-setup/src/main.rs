use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use readerspace_db::LedgerFile;

#[derive(Parser, Debug)]
#[clap(name="readerspace-setup")]
struct Cli {
    #[clap(env = "READERSPACE_LEDGER", default_value="library_users.json")]
    pub ledger: PathBuf,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command{
    /// Create an empty ledger
    Init,
}

/// Initialize the ledger file
fn ledger_init(path: &Path) -> Result<()> {
    let file = LedgerFile::open(path);
    if file.init()? {
        info!(path = %path.display(), "ledger created");
        println!("Created empty ledger {}.", path.display());
    } else {
        println!("Ledger {} already exists.", path.display());
    }

    Ok(())
}


fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Init => ledger_init(&cli.ledger)?,
    }
    Ok(())
}
