// Errors
mod errors;
pub use errors::*;

// Operations
mod operations;
pub use operations::*;

// Models
mod members;
pub use members::*;

mod ledger;
pub use ledger::*;
