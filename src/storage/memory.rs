use super::*;
use std::cell::RefCell;

/// Keeps the "persisted" contacts in memory. Useful wherever a real file
/// would get in the way, such as tests and benches.
#[derive(Default)]
pub struct MemStorage {
    data: RefCell<Vec<Contact>>,
    saves: RefCell<usize>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            data: RefCell::new(contacts),
            saves: RefCell::new(0),
        }
    }

    /// Snapshot of what was last saved.
    pub fn persisted(&self) -> Vec<Contact> {
        self.data.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl ContactStore for MemStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        *self.data.borrow_mut() = contacts.to_vec();
        *self.saves.borrow_mut() += 1;
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
