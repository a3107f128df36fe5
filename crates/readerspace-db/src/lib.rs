pub mod ledger_file;
pub use ledger_file::{LedgerFile, TestHandle};
