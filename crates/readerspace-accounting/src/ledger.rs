//! Operations on the member ledger. Every mutation is
//! applied to a copy of the ledger which replaces the
//! current one only after it was saved.

use chrono::NaiveDate;
use tracing::info;

use readerspace_data::{
    Ledger, LedgerError, Load, Member, Payment, Profile, Save, StorageError,
};

/// A recorded payment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRecord {
    pub member: Member,
    pub amount: u64,
}

/// Load the ledger from the store.
pub fn load<S>(store: &S) -> Result<Ledger, StorageError>
where
    S: Load<Ledger>,
{
    store.load()
}

/// The monthly fee must be positive.
pub fn check_fee(fee: u64) -> Result<(), LedgerError> {
    if fee == 0 {
        return Err(LedgerError::InvalidInput(
            "the monthly fee must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Register a new member. The admission is recorded as
/// the first payment of one monthly fee.
pub fn register<S>(
    ledger: &mut Ledger,
    store: &S,
    profile: Profile,
    fee: u64,
    today: NaiveDate,
) -> Result<Member, LedgerError>
where
    S: Save<Ledger>,
{
    check_fee(fee)?;
    let mut next = ledger.clone();
    let code = next.next_code();
    let member = next.insert(Member::admit(code, profile, fee, today)).clone();

    store.save(&next)?;
    *ledger = next;

    info!(code = %member.code, name = %member.name, "member registered");
    Ok(member)
}

/// Find a member by code
pub fn lookup<'a>(
    ledger: &'a Ledger,
    code: &str,
) -> Result<&'a Member, LedgerError> {
    ledger.lookup(code)
}

/// Amount for paying the given number of months.
pub fn payment_amount(months_paid: u32, fee: u64) -> Result<u64, LedgerError> {
    check_fee(fee)?;
    if months_paid < 1 {
        return Err(LedgerError::InvalidInput(
            "at least one month must be paid".to_string(),
        ));
    }
    u64::from(months_paid).checked_mul(fee).ok_or_else(|| {
        LedgerError::InvalidInput(format!(
            "{} months is too many to pay at once",
            months_paid
        ))
    })
}

/// Record a payment for a number of months.
///
/// The last payment date is set to today, no matter how many
/// months are paid or how many were due.
pub fn record_payment<S>(
    ledger: &mut Ledger,
    store: &S,
    code: &str,
    months_paid: u32,
    fee: u64,
    today: NaiveDate,
) -> Result<PaymentRecord, LedgerError>
where
    S: Save<Ledger>,
{
    ledger.lookup(code)?;
    let amount = payment_amount(months_paid, fee)?;

    let mut next = ledger.clone();
    let member = next.lookup_mut(code)?;
    member.add_payment(Payment { date: today, amount });
    let member = member.clone();

    store.save(&next)?;
    *ledger = next;

    info!(code = %member.code, months_paid, amount, "payment recorded");
    Ok(PaymentRecord { member, amount })
}
