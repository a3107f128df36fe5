use chrono::NaiveDate;

use readerspace_data::Member;

use crate::datetime::CountMonths;

/// Dues of a member, derived from the last payment.
pub trait Dues {
    /// Calendar months between the last payment and today.
    /// This is the raw difference and may be zero or negative.
    fn months_due(&self, today: NaiveDate) -> i64;

    fn is_up_to_date(&self, today: NaiveDate) -> bool {
        self.months_due(today) <= 0
    }

    /// Amount owed for the months due, capped at `u64::MAX`.
    fn pending_amount(&self, fee: u64, today: NaiveDate) -> u64 {
        (self.months_due(today).max(0) as u64).saturating_mul(fee)
    }
}

impl Dues for Member {
    fn months_due(&self, today: NaiveDate) -> i64 {
        self.last_payment_date.count_months(&today)
    }
}

/// A line of the pending payments report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuesReport {
    pub code: String,
    pub name: String,
    pub contact: String,
    pub months_due: i64,
    pub amount: u64,
}

impl DuesReport {
    pub fn for_member(member: &Member, fee: u64, today: NaiveDate) -> Self {
        Self {
            code: member.code.clone(),
            name: member.name.clone(),
            contact: member.contact.clone(),
            months_due: member.months_due(today),
            amount: member.pending_amount(fee, today),
        }
    }

    pub fn is_due(&self) -> bool {
        self.months_due > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use readerspace_data::Profile;
    use rstest::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn member_paid_on(last_payment: NaiveDate) -> Member {
        Member::admit(
            "L2025001".to_string(),
            Profile {
                name: "Asha".to_string(),
                contact: "+919800000001".to_string(),
                ..Default::default()
            },
            500,
            last_payment,
        )
    }

    #[rstest]
    #[case(date(2024, 1, 10), date(2024, 1, 10), 0)]
    #[case(date(2024, 1, 10), date(2024, 3, 10), 2)]
    #[case(date(2024, 1, 31), date(2024, 2, 1), 1)]
    #[case(date(2024, 1, 1), date(2024, 1, 31), 0)]
    #[case(date(2023, 11, 20), date(2024, 2, 3), 3)]
    #[case(date(2024, 5, 1), date(2024, 3, 28), -2)]
    fn test_months_due(
        #[case] last_payment: NaiveDate,
        #[case] today: NaiveDate,
        #[case] expected: i64,
    ) {
        let member = member_paid_on(last_payment);
        assert_eq!(member.months_due(today), expected);
        assert_eq!(member.is_up_to_date(today), expected <= 0);
    }

    #[rstest]
    #[case(date(2024, 1, 10), date(2024, 3, 10), 1000)]
    #[case(date(2024, 1, 10), date(2024, 1, 25), 0)]
    #[case(date(2024, 6, 10), date(2024, 3, 10), 0)]
    fn test_pending_amount(
        #[case] last_payment: NaiveDate,
        #[case] today: NaiveDate,
        #[case] expected: u64,
    ) {
        let member = member_paid_on(last_payment);
        assert_eq!(member.pending_amount(500, today), expected);
    }

    #[rstest]
    #[case(u64::MAX / 2, u64::MAX)]
    #[case(u64::MAX / 4, u64::MAX / 4 * 3)]
    fn test_pending_amount_large_fee(#[case] fee: u64, #[case] expected: u64) {
        let member = member_paid_on(date(2024, 1, 10));
        assert_eq!(member.pending_amount(fee, date(2024, 4, 10)), expected);

        let report = DuesReport::for_member(&member, fee, date(2024, 4, 10));
        assert_eq!(report.amount, expected);
    }

    #[test]
    fn test_dues_report() {
        let member = member_paid_on(date(2024, 1, 10));

        let report = DuesReport::for_member(&member, 500, date(2024, 4, 1));
        assert_eq!(report.code, "L2025001");
        assert_eq!(report.months_due, 3);
        assert_eq!(report.amount, 1500);
        assert!(report.is_due());

        let report = DuesReport::for_member(&member, 500, date(2024, 1, 20));
        assert!(!report.is_due());
        assert_eq!(report.amount, 0);
    }
}
