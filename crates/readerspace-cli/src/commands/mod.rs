mod members;
pub use members::*;

mod payments;
pub use payments::*;
