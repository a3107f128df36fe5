//! Text messages sent to members.

use readerspace_data::Member;

use crate::DuesReport;

pub fn welcome(member: &Member, fee: u64) -> String {
    format!(
        "Welcome {}! Your Library Code is {}. Admission Date: {}. \
         First payment of ₹{} received.",
        member.name,
        member.code,
        member.admission_date.format("%Y-%m-%d"),
        fee,
    )
}

pub fn reminder(report: &DuesReport) -> String {
    format!(
        "Dear {}, you have {} month(s) pending. Total Due: ₹{}. Please pay soon.",
        report.name, report.months_due, report.amount,
    )
}

pub fn receipt(member: &Member, amount: u64) -> String {
    format!(
        "Payment received: ₹{}. Thank you {}! Your next due will be next month.",
        amount, member.name,
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use readerspace_data::Profile;

    use super::*;

    fn member() -> Member {
        Member::admit(
            "L2025001".to_string(),
            Profile {
                name: "Asha".to_string(),
                contact: "+919800000001".to_string(),
                ..Default::default()
            },
            500,
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        )
    }

    #[test]
    fn test_welcome() {
        assert_eq!(
            welcome(&member(), 500),
            "Welcome Asha! Your Library Code is L2025001. \
             Admission Date: 2024-01-10. First payment of ₹500 received."
        );
    }

    #[test]
    fn test_reminder() {
        let report = DuesReport {
            code: "L2025001".to_string(),
            name: "Asha".to_string(),
            contact: "+919800000001".to_string(),
            months_due: 2,
            amount: 1000,
        };
        assert_eq!(
            reminder(&report),
            "Dear Asha, you have 2 month(s) pending. Total Due: ₹1000. Please pay soon."
        );
    }

    #[test]
    fn test_receipt() {
        let message = receipt(&member(), 1000);
        assert!(message.contains("₹1000"));
        assert!(message.contains("Thank you Asha"));
    }
}
