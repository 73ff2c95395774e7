use serde::Serialize;

use crate::errors::AppError;

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

pub enum ValidationReq {
    __,
}

impl ValidationReq {
    pub fn name_and_phone_req() -> String {
        "Please enter both name and phone number.".to_string()
    }

    pub fn selection_req() -> String {
        "Please name the contact to edit or delete.".to_string()
    }

    pub fn search_req() -> String {
        "Please enter a name to search.".to_string()
    }
}

impl Contact {
    pub fn new(name: &str, phone: &str) -> Self {
        Contact {
            name: name.to_string(),
            phone: phone.to_string(),
        }
    }

    /// Builds a contact from raw user input, trimming both fields and
    /// rejecting empty values.
    pub fn from_input(name: &str, phone: &str) -> Result<Self, AppError> {
        let (name, phone) = (name.trim(), phone.trim());

        if name.is_empty() || phone.is_empty() {
            return Err(AppError::Validation(ValidationReq::name_and_phone_req()));
        }
        Ok(Contact::new(name, phone))
    }

    /// Names are the identity of a contact and compare case-insensitively.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    pub fn name_contains(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}
