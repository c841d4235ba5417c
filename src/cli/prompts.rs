// src/cli/prompts.rs — Interactive forms (inquire)

use inquire::InquireError;
use strum::IntoEnumIterator;

use crate::cli::IntakeArgs;
use crate::core::intake::IntakeForm;
use crate::core::types::{Gender, Language};

/// `Ok(None)` when the user cancels (Esc / Ctrl-C).
fn skippable<T>(result: Result<T, InquireError>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginChoice {
    Guest,
    Quit,
}

pub fn login_menu() -> anyhow::Result<LoginChoice> {
    let options = vec!["Continue as guest", "Quit"];
    let choice = skippable(inquire::Select::new("WellMate:", options).prompt())?;
    Ok(match choice {
        Some("Continue as guest") => LoginChoice::Guest,
        _ => LoginChoice::Quit,
    })
}

/// Ask for every field, pre-filled from `defaults`.
pub fn intake_form(defaults: &IntakeForm) -> anyhow::Result<Option<IntakeForm>> {
    let Some(name) = skippable(
        inquire::Text::new("Name:")
            .with_initial_value(&defaults.name)
            .prompt(),
    )?
    else {
        return Ok(None);
    };

    let Some(age) = skippable(
        inquire::Text::new("Age:")
            .with_initial_value(&defaults.age)
            .prompt(),
    )?
    else {
        return Ok(None);
    };

    let genders: Vec<Gender> = Gender::iter().collect();
    let cursor = genders.iter().position(|g| *g == defaults.gender).unwrap_or(0);
    let Some(gender) = skippable(
        inquire::Select::new("Gender:", genders)
            .with_starting_cursor(cursor)
            .prompt(),
    )?
    else {
        return Ok(None);
    };

    let languages: Vec<Language> = Language::iter().collect();
    let cursor = languages
        .iter()
        .position(|l| *l == defaults.language)
        .unwrap_or(0);
    let Some(language) = skippable(
        inquire::Select::new("Preferred language:", languages)
            .with_starting_cursor(cursor)
            .prompt(),
    )?
    else {
        return Ok(None);
    };

    let Some(phone) = skippable(
        inquire::Text::new("Phone (optional):")
            .with_initial_value(&defaults.phone)
            .prompt(),
    )?
    else {
        return Ok(None);
    };

    Ok(Some(IntakeForm {
        name,
        age,
        gender,
        language,
        phone,
    }))
}

/// Form built from command-line flags, falling back to the autofilled values.
pub fn form_from_args(args: &IntakeArgs, defaults: &IntakeForm) -> IntakeForm {
    IntakeForm {
        name: args.name.clone().unwrap_or_else(|| defaults.name.clone()),
        age: args.age.clone().unwrap_or_else(|| defaults.age.clone()),
        gender: args.gender.unwrap_or(defaults.gender),
        language: args.language.unwrap_or(defaults.language),
        phone: args.phone.clone().unwrap_or_else(|| defaults.phone.clone()),
    }
}
