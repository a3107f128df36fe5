
pub mod datetime;
pub mod dues;
pub mod ledger;
pub mod library;
pub mod messages;

pub use dues::{Dues, DuesReport};
pub use library::{Library, PaymentReceipt, Registration, Reminder};
