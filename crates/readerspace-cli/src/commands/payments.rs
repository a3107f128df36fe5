use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};

use readerspace_accounting::{Dues, DuesReport};

use crate::formatting::PrintFormatted;
use crate::{prompts, App};

#[derive(Subcommand, Debug)]
pub enum Payments {
    /// Show pending payments of all members
    #[clap(name = "pending")]
    Pending(PendingPayments),
    /// Record a payment
    #[clap(name = "record")]
    Record(RecordPayment),
    /// Show the payments of a member
    #[clap(name = "history")]
    History(PaymentHistory),
}

impl Payments {
    pub async fn run(self, app: &mut App, today: NaiveDate) -> Result<()> {
        match self {
            Payments::Pending(cmd) => cmd.run(app, today).await,
            Payments::Record(cmd) => cmd.run(app, today).await,
            Payments::History(cmd) => cmd.run(app),
        }
    }
}

#[derive(Args, Debug)]
pub struct PendingPayments {
    /// Do not send reminders to members with dues
    #[clap(long)]
    pub no_remind: bool,
}

impl PendingPayments {
    pub async fn run(self, app: &App, today: NaiveDate) -> Result<()> {
        let reports: Vec<DuesReport> = app.pending(today);
        reports.print_formatted();

        let due: Vec<&DuesReport> = reports.iter().filter(|r| r.is_due()).collect();
        let total = due
            .iter()
            .fold(0, |total: u64, r| total.saturating_add(r.amount));
        println!();
        println!(
            "{} of {} members have dues, total {}.",
            due.len(),
            reports.len(),
            total
        );

        if self.no_remind || due.is_empty() {
            return Ok(());
        }

        println!();
        for reminder in app.remind(today).await {
            println!(
                "{} ({}): {}",
                reminder.report.name, reminder.report.code, reminder.delivery
            );
        }

        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct RecordPayment {
    #[clap(short, long)]
    pub code: Option<String>,
    /// Number of months paid for
    #[clap(short, long)]
    pub months: Option<u32>,
    /// Do not ask for confirmation
    #[clap(short, long)]
    pub yes: bool,
}

impl RecordPayment {
    pub async fn run(self, app: &mut App, today: NaiveDate) -> Result<()> {
        let code = prompts::member_code(app, self.code)?;
        let member = app.lookup(&code)?;
        println!("{} ({})", member.name, member.code);
        println!("Months due: {}", member.months_due(today));

        let months = prompts::months(self.months)?;
        let amount = app.quote(months)?;
        println!("Payment amount: {}", amount);

        if !prompts::confirm("Record payment?", self.yes)? {
            return Ok(());
        }

        let receipt = app.record_payment(&code, months, today).await?;
        println!(
            "Payment of {} recorded for {}.",
            receipt.amount, receipt.member.name
        );
        println!("{}", receipt.delivery);

        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct PaymentHistory {
    #[clap(short, long)]
    pub code: Option<String>,
}

impl PaymentHistory {
    pub fn run(self, app: &App) -> Result<()> {
        let code = prompts::member_code(app, self.code)?;
        let member = app.lookup(&code)?;

        println!("{} ({})", member.name, member.code);
        member.payments.print_formatted();
        println!("Total paid: {}", member.total_paid());

        Ok(())
    }
}
