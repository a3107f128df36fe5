use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};

use readerspace_accounting::Dues;
use readerspace_data::{Member, Profile};

use crate::formatting::{MemberTable, PrintFormatted};
use crate::{prompts, App};

#[derive(Subcommand, Debug)]
pub enum Members {
    /// Register a new member
    #[clap(name = "add", alias = "register")]
    Add(AddMember),
    /// Show a member
    #[clap(name = "show", alias = "login")]
    Show(ShowMember),
    /// List members
    #[clap(name = "list")]
    List(ListMembers),
}

impl Members {
    pub async fn run(self, app: &mut App, today: NaiveDate) -> Result<()> {
        match self {
            Members::Add(cmd) => cmd.run(app, today).await,
            Members::Show(cmd) => cmd.run(app, today),
            Members::List(cmd) => cmd.run(app, today),
        }
    }
}

#[derive(Args, Debug)]
pub struct AddMember {
    #[clap(short, long)]
    pub name: Option<String>,
    /// Name of father or guardian
    #[clap(short, long)]
    pub guardian_name: Option<String>,
    #[clap(short, long)]
    pub address: Option<String>,
    #[clap(short, long)]
    pub email: Option<String>,
    /// Phone number with country code, e.g. +91...
    #[clap(short, long)]
    pub contact: Option<String>,
    #[clap(short, long)]
    pub seat: Option<String>,
    /// Do not ask for confirmation
    #[clap(short, long)]
    pub yes: bool,
}

impl AddMember {
    /// Ask for missing details and register the member
    pub async fn run(self, app: &mut App, today: NaiveDate) -> Result<()> {
        let profile = Profile {
            name: prompts::required(self.name, "Full name:")?,
            guardian_name: prompts::optional(
                self.guardian_name,
                "Father's / guardian's name:",
            )?,
            address: prompts::optional(self.address, "Address:")?,
            email: prompts::optional(self.email, "Email:")?,
            contact: prompts::required(
                self.contact,
                "Contact number (with country code):",
            )?,
            seat_number: Some(prompts::optional(self.seat, "Seat number:")?)
                .filter(|s| !s.trim().is_empty()),
        };
        profile.validate()?;

        println!();
        profile.print_formatted();
        println!();

        if !prompts::confirm("Register member?", self.yes)? {
            return Ok(());
        }

        let registration = app.register(profile, today).await?;
        println!(
            "Member registered with library code {}.",
            registration.member.code
        );
        println!("{}", registration.delivery);

        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct ShowMember {
    #[clap(short, long)]
    pub code: Option<String>,
}

impl ShowMember {
    /// Run the command and show a member
    pub fn run(self, app: &App, today: NaiveDate) -> Result<()> {
        let code = prompts::member_code(app, self.code)?;
        let member = app.lookup(&code)?;

        println!();
        member.print_formatted();
        if member.is_up_to_date(today) {
            println!("Status:\t\t\tup to date");
        } else {
            println!(
                "Status:\t\t\t{} month(s) due = {}",
                member.months_due(today),
                member.pending_amount(app.monthly_fee(), today)
            );
        }
        println!();

        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct ListMembers {
    /// Only members whose name contains this
    #[clap(short, long)]
    pub name: Option<String>,
}

impl ListMembers {
    /// Run the command and list members with their months due
    pub fn run(self, app: &App, today: NaiveDate) -> Result<()> {
        let name = self.name.map(|n| n.to_lowercase());
        let members: Vec<Member> = app
            .ledger()
            .members()
            .filter(|m| match &name {
                Some(name) => m.name.to_lowercase().contains(name),
                None => true,
            })
            .cloned()
            .collect();

        println!("{} members.", members.len());
        MemberTable { members, today }.print_formatted();

        Ok(())
    }
}
