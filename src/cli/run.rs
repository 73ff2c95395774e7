use crate::{
    cli::{
        command::{Cli, Commands, MenuChoice},
        prompt::{ask, confirm_action, display_contact, get_input, parse_menu_choice, show_menu},
    },
    prelude::{
        AppError, ContactManager, ContactStore, Outcome,
        contact::{Contact, ValidationReq},
    },
};
use clap::Parser;
use dotenv::dotenv;
use tracing::debug;

pub fn run_app() -> Result<(), AppError> {
    // .env has to be in place before clap reads CONTACTS_FILE
    dotenv().ok();
    let cli = Cli::parse();

    let mut manager = ContactManager::open(&cli.file)?;
    debug!(
        file = %cli.file.display(),
        medium = manager.storage.get_medium(),
        count = manager.contact_list().len(),
        "contact book ready"
    );

    match cli.command {
        Commands::Add { name, phone } => add(&mut manager, &name, &phone, cli.yes),
        Commands::Edit {
            name,
            new_name,
            new_phone,
        } => edit(
            &mut manager,
            &name,
            new_name.as_deref(),
            new_phone.as_deref(),
            cli.yes,
        ),
        Commands::Delete { name } => delete(&mut manager, &name, cli.yes),
        Commands::Search { query, json } => search(&manager, &query, json),
        Commands::List { json } => list(&manager, json),
        Commands::Menu => run_menu(&mut manager, cli.yes),
    }
}

fn overwrite_question(name: &str) -> String {
    format!("A contact with the name '{name}' already exists. Do you want to overwrite it?")
}

pub fn add(
    manager: &mut ContactManager,
    name: &str,
    phone: &str,
    assume_yes: bool,
) -> Result<(), AppError> {
    let contact = Contact::from_input(name, phone)?;
    let name = contact.name.clone();

    let outcome = manager.add_contact(contact, |_, incoming| {
        confirm_action(&overwrite_question(&incoming.name), assume_yes)
    })?;

    if outcome.is_changed() {
        println!("Contact {name} added successfully.");
    } else {
        println!("Contact {name} was not changed.");
    }
    Ok(())
}

/// Edits the contact named `name`. Missing new values keep the current ones.
pub fn edit(
    manager: &mut ContactManager,
    name: &str,
    new_name: Option<&str>,
    new_phone: Option<&str>,
    assume_yes: bool,
) -> Result<(), AppError> {
    let current = selected_contact(manager, name)?;

    let updated = Contact::from_input(
        new_name.unwrap_or(&current.name),
        new_phone.unwrap_or(&current.phone),
    )?;
    let new_name = updated.name.clone();

    let outcome = manager.edit_contact(&current.name, updated, |_, incoming| {
        confirm_action(&overwrite_question(&incoming.name), assume_yes)
    })?;

    match outcome {
        Outcome::Applied | Outcome::Overwritten => {
            println!("Contact {} updated to {new_name}.", current.name)
        }
        Outcome::Declined => println!("Contact {} was not changed.", current.name),
        Outcome::NotFound => return Err(AppError::NotFound(format!("Contact '{}'", current.name))),
    }
    Ok(())
}

pub fn delete(manager: &mut ContactManager, name: &str, assume_yes: bool) -> Result<(), AppError> {
    let current = selected_contact(manager, name)?;

    let question = format!("Are you sure you want to delete {}?", current.name);
    if !confirm_action(&question, assume_yes) {
        println!("Contact {} was not deleted.", current.name);
        return Ok(());
    }

    manager.delete_contact(&current.name)?;
    println!("Contact {} deleted successfully.", current.name);
    Ok(())
}

pub fn search(manager: &ContactManager, query: &str, json: bool) -> Result<(), AppError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(AppError::Validation(ValidationReq::search_req()));
    }

    print_contacts(&manager.search(query), json)
}

pub fn list(manager: &ContactManager, json: bool) -> Result<(), AppError> {
    let contacts: Vec<&Contact> = manager.contact_list().iter().collect();
    print_contacts(&contacts, json)
}

// The shell's stand-in for selecting a row: the named contact must exist.
fn selected_contact(manager: &ContactManager, name: &str) -> Result<Contact, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation(ValidationReq::selection_req()));
    }

    manager
        .get(name)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Contact '{name}'")))
}

fn print_contacts(contacts: &[&Contact], json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(contacts)?);
        return Ok(());
    }

    if contacts.is_empty() {
        println!("No contacts found.");
        return Ok(());
    }

    for (i, contact) in contacts.iter().enumerate() {
        println!("{}", display_contact(i + 1, contact));
    }
    Ok(())
}

pub fn run_menu(manager: &mut ContactManager, assume_yes: bool) -> Result<(), AppError> {
    println!("\n--- Contact BOOK ---");

    loop {
        show_menu()?;

        let Some(action) = get_input()? else {
            break;
        };

        let choice = match parse_menu_choice(&action) {
            Ok(choice) => choice,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        let result = match choice {
            MenuChoice::Add => menu_add(manager, assume_yes),
            MenuChoice::Edit => menu_edit(manager, assume_yes),
            MenuChoice::Delete => menu_delete(manager, assume_yes),
            MenuChoice::Search => menu_search(manager),
            MenuChoice::List => list(manager, false),
            MenuChoice::Exit => break,
        };

        // Input problems are reported and the session goes on
        match result {
            Err(e @ (AppError::Validation(_) | AppError::NotFound(_))) => eprintln!("{e}"),
            other => other?,
        }
    }

    println!("\nBye!");
    Ok(())
}

fn menu_add(manager: &mut ContactManager, assume_yes: bool) -> Result<(), AppError> {
    let Some(name) = ask("Name")? else {
        return Ok(());
    };
    let Some(phone) = ask("Phone")? else {
        return Ok(());
    };
    add(manager, &name, &phone, assume_yes)
}

fn menu_edit(manager: &mut ContactManager, assume_yes: bool) -> Result<(), AppError> {
    let Some(name) = ask("Name of the contact to edit")? else {
        return Ok(());
    };
    let current = selected_contact(manager, &name)?;
    println!("Editing {}", display_contact(1, &current));

    let Some(new_name) = ask("New name (blank keeps current)")? else {
        return Ok(());
    };
    let Some(new_phone) = ask("New phone (blank keeps current)")? else {
        return Ok(());
    };

    edit(
        manager,
        &current.name,
        Some(new_name.as_str()).filter(|s| !s.is_empty()),
        Some(new_phone.as_str()).filter(|s| !s.is_empty()),
        assume_yes,
    )
}

fn menu_delete(manager: &mut ContactManager, assume_yes: bool) -> Result<(), AppError> {
    let Some(name) = ask("Name of the contact to delete")? else {
        return Ok(());
    };
    delete(manager, &name, assume_yes)
}

fn menu_search(manager: &ContactManager) -> Result<(), AppError> {
    let Some(query) = ask("Search")? else {
        return Ok(());
    };
    search(manager, &query, false)
}
