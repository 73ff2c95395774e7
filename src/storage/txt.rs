use super::*;

use crate::helper;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

pub const DEFAULT_STORAGE_PATH: &str = "contacts.txt";

pub struct TxtStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl TxtStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            medium: "txt".to_string(),
            path: path.into(),
        }
    }
}

impl ContactStore for TxtStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        // A missing file is an empty contact book
        let file = match OpenOptions::new().read(true).open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no contact file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let reader = BufReader::new(file);
        let contacts = helper::deserialize_contacts_from_txt_buffer(reader)?;

        debug!(path = %self.path.display(), count = contacts.len(), "loaded contacts");
        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        let data = helper::serialize_contacts(contacts);
        file.write_all(data.as_bytes())?;
        file.flush()?;

        debug!(path = %self.path.display(), count = contacts.len(), "saved contacts");
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
