use crate::cli::command::MenuChoice;
use crate::prelude::{AppError, Contact};
use std::io::{self, Write};
use tracing::warn;

// OUTPUT FUNCTIONS
pub fn show_menu() -> Result<(), AppError> {
    println!();
    println!("1. Add Contact");
    println!("2. Edit Contact");
    println!("3. Delete Contact");
    println!("4. Search Contacts");
    println!("5. List Contacts");
    println!("6. Exit");
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

pub fn parse_menu_choice(action: &str) -> Result<MenuChoice, AppError> {
    match action.trim() {
        "1" => Ok(MenuChoice::Add),
        "2" => Ok(MenuChoice::Edit),
        "3" => Ok(MenuChoice::Delete),
        "4" => Ok(MenuChoice::Search),
        "5" => Ok(MenuChoice::List),
        "6" => Ok(MenuChoice::Exit),
        other => Err(AppError::ParseCommand(other.to_string())),
    }
}

pub fn display_contact(index: usize, contact: &Contact) -> String {
    format!("{index:>3}. {:<20} {}", contact.name, contact.phone)
}

// INPUT FUNCTIONS

/// Reads one trimmed line from stdin. `None` means stdin is exhausted.
pub fn get_input() -> Result<Option<String>, AppError> {
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

pub fn ask(question: &str) -> Result<Option<String>, AppError> {
    print!("{question}: ");
    io::stdout().flush()?;
    get_input()
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Asks a yes/no question. Anything but an explicit yes, including a closed
/// or unreadable stdin, counts as no.
pub fn confirm_action(question: &str, assume_yes: bool) -> bool {
    if assume_yes {
        return true;
    }

    print!("{question} (y/n)\n> ");
    if let Err(e) = io::stdout().flush() {
        warn!(error = %e, "could not flush prompt");
    }

    match get_input() {
        Ok(Some(answer)) => is_yes(&answer),
        Ok(None) => false,
        Err(e) => {
            warn!(error = %e, "could not read confirmation");
            false
        }
    }
}
