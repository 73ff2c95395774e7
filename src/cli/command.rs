use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::storage::txt::DEFAULT_STORAGE_PATH;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Simple Contact Book")]
pub struct Cli {
    /// Text file holding one `name,phone` contact per line
    #[arg(long, env = "CONTACTS_FILE", default_value = DEFAULT_STORAGE_PATH, global = true)]
    pub file: PathBuf,

    /// Answer yes to every confirmation prompt
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact, asking before overwriting one with the same name
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,
    },
    /// Edit an existing contact
    /// Fields that are not given keep their current value
    Edit {
        /// Contact current name
        #[arg(long)]
        name: String,

        /// Update name
        #[arg(long)]
        new_name: Option<String>,

        /// Update phone number
        #[arg(long)]
        new_phone: Option<String>,
    },
    /// Delete a contact by name
    Delete {
        /// Name of contact to delete
        #[arg(long)]
        name: String,
    },
    /// Search contacts whose name contains the query (case-insensitive)
    Search {
        /// Part of a contact name
        #[arg(short, long)]
        query: String,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },
    /// List all contacts
    List {
        /// Print contacts as JSON
        #[arg(long)]
        json: bool,
    },
    /// Start an interactive session
    Menu,
}

/// Choices offered by the interactive menu
#[derive(Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Edit,
    Delete,
    Search,
    List,
    Exit,
}
