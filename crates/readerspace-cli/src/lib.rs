use readerspace_accounting::Library;
use readerspace_db::LedgerFile;
use readerspace_notify::Transport;

pub mod cli;
pub mod commands;
pub mod formatting;
pub mod prompts;

/// The library as used by the command line: a ledger
/// file and the configured SMS transport.
pub type App = Library<LedgerFile, Transport>;
