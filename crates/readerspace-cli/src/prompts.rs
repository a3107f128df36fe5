use anyhow::Result;
use inquire::{validator::Validation, Confirm, CustomType, Text};

use crate::App;

/// Use the value if given, otherwise ask for it.
/// Empty answers are not accepted.
pub fn required(value: Option<String>, message: &str) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }
    let value = Text::new(message)
        .with_validator(|input: &str| {
            if input.trim().is_empty() {
                Ok(Validation::Invalid("This field is required".into()))
            } else {
                Ok(Validation::Valid)
            }
        })
        .prompt()?;
    Ok(value)
}

/// Use the value if given, otherwise ask for it.
/// The question may be skipped.
pub fn optional(value: Option<String>, message: &str) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }
    let value = Text::new(message).prompt_skippable()?;
    Ok(value.unwrap_or_default())
}

/// Member code from the command line, or asked for until
/// a known code is entered.
pub fn member_code(app: &App, code: Option<String>) -> Result<String> {
    if let Some(code) = code {
        return Ok(code);
    }
    let known: Vec<String> =
        app.ledger().members().map(|m| m.code.clone()).collect();
    let code = Text::new("Library code:")
        .with_validator(move |input: &str| {
            if known.iter().any(|code| code == input.trim()) {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid("Invalid library code".into()))
            }
        })
        .prompt()?;
    Ok(code.trim().to_string())
}

/// Number of months to pay for, at least one.
pub fn months(months: Option<u32>) -> Result<u32> {
    if let Some(months) = months {
        return Ok(months);
    }
    let months = CustomType::<u32>::new("Months paying for:")
        .with_default(1)
        .with_error_message("Please enter a number of months")
        .with_validator(|months: &u32| {
            if *months >= 1 {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid("At least one month".into()))
            }
        })
        .prompt()?;
    Ok(months)
}

/// Ask for confirmation unless it was given up front.
pub fn confirm(message: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    let ok = Confirm::new(message).with_default(true).prompt()?;
    Ok(ok)
}
