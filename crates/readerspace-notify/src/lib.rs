
mod notifier;
pub use notifier::*;

pub mod twilio;
pub use twilio::{TwilioConfig, TwilioNotifier};

mod transport;
pub use transport::Transport;
