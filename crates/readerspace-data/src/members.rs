use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::LedgerError;

/// Profile details collected when a member registers.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub guardian_name: String,
    pub address: String,
    pub email: String,
    pub contact: String,
    pub seat_number: Option<String>,
}

impl Profile {
    /// Name and contact are required, the contact
    /// is where notifications are sent to.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.name.trim().is_empty() {
            return Err(LedgerError::InvalidInput(
                "name must not be empty".to_string(),
            ));
        }
        if self.contact.trim().is_empty() {
            return Err(LedgerError::InvalidInput(
                "contact must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// A single fee payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub date: NaiveDate,
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    #[serde(default)]
    pub code: String,
    pub name: String,
    #[serde(alias = "father_name")]
    pub guardian_name: String,
    pub address: String,
    pub email: String,
    pub contact: String,
    #[serde(default, alias = "seatno", deserialize_with = "blank_as_none")]
    pub seat_number: Option<String>,
    pub admission_date: NaiveDate,
    #[serde(alias = "last_payment")]
    pub last_payment_date: NaiveDate,
    pub payments: Vec<Payment>,
}

impl Member {
    /// Admit a new member. The admission counts as the
    /// first payment of one monthly fee.
    pub fn admit(
        code: String,
        profile: Profile,
        fee: u64,
        today: NaiveDate,
    ) -> Self {
        Self {
            code,
            name: profile.name,
            guardian_name: profile.guardian_name,
            address: profile.address,
            email: profile.email,
            contact: profile.contact,
            seat_number: profile.seat_number,
            admission_date: today,
            last_payment_date: today,
            payments: vec![Payment { date: today, amount: fee }],
        }
    }

    /// Append a payment and move the last payment date along.
    pub fn add_payment(&mut self, payment: Payment) {
        self.last_payment_date = payment.date;
        self.payments.push(payment);
    }

    /// Sum of all payments, including the admission payment.
    pub fn total_paid(&self) -> u64 {
        self.payments
            .iter()
            .fold(0, |total: u64, p| total.saturating_add(p.amount))
    }
}

// Older ledgers store an empty string for members without a seat.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let seat: Option<String> = Option::deserialize(deserializer)?;
    Ok(seat.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn profile() -> Profile {
        Profile {
            name: "Asha".to_string(),
            guardian_name: "Ravi".to_string(),
            address: "12 Lake Road".to_string(),
            email: "asha@example.org".to_string(),
            contact: "+919800000001".to_string(),
            seat_number: Some("14".to_string()),
        }
    }

    #[test]
    fn test_admit() {
        let today = date(2024, 1, 10);
        let member = Member::admit("L2025001".to_string(), profile(), 500, today);

        assert_eq!(member.admission_date, today);
        assert_eq!(member.last_payment_date, today);
        assert_eq!(member.payments, vec![Payment { date: today, amount: 500 }]);
        assert_eq!(member.total_paid(), 500);
    }

    #[test]
    fn test_add_payment() {
        let mut member =
            Member::admit("L2025001".to_string(), profile(), 500, date(2024, 1, 10));
        member.add_payment(Payment { date: date(2024, 3, 10), amount: 1000 });

        assert_eq!(member.payments.len(), 2);
        assert_eq!(member.last_payment_date, date(2024, 3, 10));
        assert_eq!(member.payments.last().unwrap().amount, 1000);
        assert_eq!(member.total_paid(), 1500);
    }

    #[test]
    fn test_total_paid_saturates() {
        let mut member =
            Member::admit("L2025001".to_string(), profile(), u64::MAX, date(2024, 1, 10));
        member.add_payment(Payment { date: date(2024, 2, 10), amount: u64::MAX });

        assert_eq!(member.total_paid(), u64::MAX);
    }

    #[test]
    fn test_validate_profile() {
        assert!(profile().validate().is_ok());

        let missing_contact = Profile {
            contact: "  ".to_string(),
            ..profile()
        };
        assert!(matches!(
            missing_contact.validate(),
            Err(LedgerError::InvalidInput(_))
        ));

        let missing_name = Profile {
            name: "".to_string(),
            ..profile()
        };
        assert!(matches!(
            missing_name.validate(),
            Err(LedgerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_read_legacy_record() {
        let record = r#"{
            "name": "Asha",
            "father_name": "Ravi",
            "address": "12 Lake Road",
            "email": "asha@example.org",
            "contact": "+919800000001",
            "seatno": "",
            "admission_date": "2024-01-10",
            "last_payment": "2024-03-10",
            "payments": [
                {"date": "2024-01-10", "amount": 500},
                {"date": "2024-03-10", "amount": 1000}
            ]
        }"#;
        let member: Member = serde_json::from_str(record).unwrap();

        assert_eq!(member.code, "");
        assert_eq!(member.guardian_name, "Ravi");
        assert_eq!(member.seat_number, None);
        assert_eq!(member.last_payment_date, date(2024, 3, 10));
        assert_eq!(member.payments.len(), 2);
    }
}
