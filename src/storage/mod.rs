pub mod memory;
pub mod txt;

use crate::prelude::{AppError, Contact};
use std::fs::{self, OpenOptions};
use std::io::{BufReader, Write};
use std::path::Path;

pub use memory::MemStorage;
pub use txt::TxtStorage;

/// Whole-collection persistence. `load` returns contacts in stored order and
/// `save` replaces everything previously stored.
pub trait ContactStore {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
