use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use readerspace_accounting::datetime;
use readerspace_notify::TwilioConfig;

use crate::commands::{Members, Payments};

#[derive(Parser, Debug)]
#[clap(name = "readerspace", version=env!("CARGO_PKG_VERSION"))]
#[clap(about = "Library membership and fee ledger")]
pub struct Cli {
    /// Ledger file
    #[clap(long, env = "READERSPACE_LEDGER", default_value = "library_users.json")]
    pub ledger: PathBuf,

    /// Monthly membership fee
    #[clap(
        long,
        env = "READERSPACE_MONTHLY_FEE",
        default_value_t = 500,
        value_parser = clap::value_parser!(u64).range(1..),
    )]
    pub monthly_fee: u64,

    /// Use this date instead of today (YYYY-MM-DD)
    #[clap(long, global = true)]
    pub today: Option<NaiveDate>,

    #[clap(long, env = "TWILIO_ACCOUNT_SID", hide_env_values = true)]
    pub twilio_account_sid: Option<String>,
    #[clap(long, env = "TWILIO_AUTH_TOKEN", hide_env_values = true)]
    pub twilio_auth_token: Option<String>,
    /// Number text messages are sent from
    #[clap(long, env = "TWILIO_PHONE_NUMBER")]
    pub twilio_phone_number: Option<String>,

    /// Log debug output
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse arguments, with settings from a .env file
    /// if there is one.
    pub fn init() -> Self {
        let _ = dotenvy::dotenv();
        Self::parse()
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(datetime::today)
    }

    pub fn twilio_config(&self) -> Option<TwilioConfig> {
        TwilioConfig::from_parts(
            self.twilio_account_sid.clone(),
            self.twilio_auth_token.clone(),
            self.twilio_phone_number.clone(),
        )
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Register and look up members
    #[clap(subcommand)]
    Members(Members),

    /// Pending dues and payments
    #[clap(subcommand)]
    Payments(Payments),
}
