use chrono::NaiveDate;

use readerspace_accounting::{Dues, DuesReport};
use readerspace_data::{Member, Payment, Profile};

pub trait PrintFormatted {
    fn print_formatted(&self);
}

fn or_none(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("None")
}

impl PrintFormatted for Profile {
    fn print_formatted(&self) {
        println!("Name:\t\t\t{}", self.name);
        println!("Guardian:\t\t{}", self.guardian_name);
        println!("Address:\t\t{}", self.address);
        println!("Email:\t\t\t{}", self.email);
        println!("Contact:\t\t{}", self.contact);
        println!("Seat:\t\t\t{}", or_none(&self.seat_number));
    }
}

impl PrintFormatted for Member {
    fn print_formatted(&self) {
        println!("Code:\t\t\t{}", self.code);
        println!("Name:\t\t\t{}", self.name);
        println!("Guardian:\t\t{}", self.guardian_name);
        println!("Address:\t\t{}", self.address);
        println!("Email:\t\t\t{}", self.email);
        println!("Contact:\t\t{}", self.contact);
        println!("Seat:\t\t\t{}", or_none(&self.seat_number));
        println!("Admission:\t\t{}", self.admission_date);
        println!("Last Payment:\t\t{}", self.last_payment_date);
        println!("Payments:\t\t{}\t(total {})", self.payments.len(), self.total_paid());
    }
}

/// Members with their months due as of a given day
pub struct MemberTable {
    pub members: Vec<Member>,
    pub today: NaiveDate,
}

impl MemberTable {
    fn row(&self, member: &Member) -> String {
        format!(
            "{:<10}\t{:<24}\t{:<16}\t{:<6}\t{:<12}\t{:<12}\t{:>6}",
            member.code,
            member.name,
            member.contact,
            member.seat_number.as_deref().unwrap_or(""),
            member.admission_date,
            member.last_payment_date,
            member.months_due(self.today).max(0)
        )
    }
}

impl PrintFormatted for MemberTable {
    fn print_formatted(&self) {
        println!(
            "{:<10}\t{:<24}\t{:<16}\t{:<6}\t{:<12}\t{:<12}\t{:>6}",
            "Code", "Name", "Contact", "Seat", "Admission", "Last Payment", "Due"
        );
        println!("{:-<120}", "-");

        for member in &self.members {
            println!("{}", self.row(member));
        }
    }
}

impl PrintFormatted for Vec<Payment> {
    fn print_formatted(&self) {
        println!("{:<12}\t{:>10}", "Date", "Amount");
        println!("{:-<30}", "-");
        for payment in self {
            println!("{:<12}\t{:>10}", payment.date, payment.amount);
        }
    }
}

impl PrintFormatted for Vec<DuesReport> {
    fn print_formatted(&self) {
        println!(
            "{:<10}\t{:<24}\t{:>6}\t{:>10}\t{}",
            "Code", "Name", "Months", "Due", "Status"
        );
        println!("{:-<80}", "-");
        for report in self {
            let status = if report.is_due() { "due" } else { "up to date" };
            println!(
                "{:<10}\t{:<24}\t{:>6}\t{:>10}\t{}",
                report.code,
                report.name,
                report.months_due.max(0),
                report.amount,
                status
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_member_table_months_due() {
        let member = Member::admit(
            "L2025001".to_string(),
            Profile {
                name: "Asha".to_string(),
                contact: "+919800000001".to_string(),
                ..Default::default()
            },
            500,
            date(2024, 1, 10),
        );

        let table = MemberTable {
            members: vec![member.clone()],
            today: date(2024, 3, 10),
        };
        let row = table.row(&member);
        assert!(row.starts_with("L2025001"));
        assert!(row.ends_with("     2"));

        let table = MemberTable {
            members: vec![member.clone()],
            today: date(2024, 1, 20),
        };
        assert!(table.row(&member).ends_with("     0"));
    }
}
