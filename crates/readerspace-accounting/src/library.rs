use chrono::NaiveDate;
use tracing::debug;

use readerspace_data::{Ledger, LedgerError, Load, Member, Profile, Save};
use readerspace_notify::{deliver, Delivery, Notifier};

use crate::{ledger, messages, DuesReport};

/// Outcome of a registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub member: Member,
    pub delivery: Delivery,
}

/// Outcome of a recorded payment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub member: Member,
    pub amount: u64,
    pub delivery: Delivery,
}

/// A reminder sent to a member with dues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub report: DuesReport,
    pub delivery: Delivery,
}

/// The library owns the loaded ledger together with the store
/// it is persisted in and the transport for notifications.
pub struct Library<S, N> {
    store: S,
    notifier: N,
    ledger: Ledger,
    monthly_fee: u64,
}

impl<S, N> Library<S, N>
where
    S: Load<Ledger> + Save<Ledger>,
    N: Notifier,
{
    /// Load the ledger from the store.
    pub fn open(
        store: S,
        notifier: N,
        monthly_fee: u64,
    ) -> Result<Self, LedgerError> {
        ledger::check_fee(monthly_fee)?;
        let ledger = ledger::load(&store)?;
        debug!(members = ledger.len(), monthly_fee, "library opened");

        Ok(Self {
            store,
            notifier,
            ledger,
            monthly_fee,
        })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn monthly_fee(&self) -> u64 {
        self.monthly_fee
    }

    pub fn lookup(&self, code: &str) -> Result<&Member, LedgerError> {
        ledger::lookup(&self.ledger, code)
    }

    /// Amount for paying a number of months
    pub fn quote(&self, months: u32) -> Result<u64, LedgerError> {
        ledger::payment_amount(months, self.monthly_fee)
    }

    /// Register a member and send the welcome message.
    pub async fn register(
        &mut self,
        profile: Profile,
        today: NaiveDate,
    ) -> Result<Registration, LedgerError> {
        let member = ledger::register(
            &mut self.ledger,
            &self.store,
            profile,
            self.monthly_fee,
            today,
        )?;

        let message = messages::welcome(&member, self.monthly_fee);
        let delivery = deliver(&self.notifier, &member.contact, &message).await;

        Ok(Registration { member, delivery })
    }

    /// Dues of every member, in code order.
    pub fn pending(&self, today: NaiveDate) -> Vec<DuesReport> {
        self.ledger
            .members()
            .map(|member| DuesReport::for_member(member, self.monthly_fee, today))
            .collect()
    }

    /// Send a reminder to every member with dues.
    pub async fn remind(&self, today: NaiveDate) -> Vec<Reminder> {
        let mut reminders = Vec::new();
        for report in self.pending(today) {
            if !report.is_due() {
                continue;
            }
            let message = messages::reminder(&report);
            let delivery = deliver(&self.notifier, &report.contact, &message).await;
            reminders.push(Reminder { report, delivery });
        }
        reminders
    }

    /// Record a payment and send the receipt. A failed
    /// notification does not undo the payment.
    pub async fn record_payment(
        &mut self,
        code: &str,
        months_paid: u32,
        today: NaiveDate,
    ) -> Result<PaymentReceipt, LedgerError> {
        let record = ledger::record_payment(
            &mut self.ledger,
            &self.store,
            code,
            months_paid,
            self.monthly_fee,
            today,
        )?;

        let message = messages::receipt(&record.member, record.amount);
        let delivery =
            deliver(&self.notifier, &record.member.contact, &message).await;

        Ok(PaymentReceipt {
            member: record.member,
            amount: record.amount,
            delivery,
        })
    }
}
