use super::*;

use std::path::PathBuf;
use tracing::{info, warn};

/// Owns the contact list and keeps its storage in step with it: every
/// successful mutation rewrites the whole store before returning. A mutation
/// whose save fails leaves `mem` as it was.
pub struct ContactManager {
    pub mem: Vec<Contact>,
    pub storage: Box<dyn ContactStore>,
}

impl ContactManager {
    /// Creates a manager over `storage` and loads whatever it already holds.
    pub fn new(storage: Box<dyn ContactStore>) -> Result<Self, AppError> {
        let mut manager = Self {
            mem: Vec::new(),
            storage,
        };
        manager.load()?;
        Ok(manager)
    }

    /// Shorthand for a manager backed by the text file at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        Self::new(Box::new(TxtStorage::new(path)))
    }

    pub fn load(&mut self) -> Result<(), AppError> {
        self.mem = self.storage.load()?;
        Ok(())
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.storage.save(&self.mem)
    }

    pub fn contact_list(&self) -> &[Contact] {
        &self.mem
    }

    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.mem.iter().find(|c| c.has_name(name))
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.mem.iter().position(|c| c.has_name(name))
    }

    // Persists `next` and only then makes it the current list.
    fn commit(&mut self, next: Vec<Contact>) -> Result<(), AppError> {
        self.storage.save(&next)?;
        self.mem = next;
        Ok(())
    }

    /// Appends `contact`, or replaces the contact already holding its name if
    /// `confirm(existing, incoming)` agrees. The replacement keeps the old
    /// position but takes the new name casing.
    pub fn add_contact<F>(&mut self, contact: Contact, confirm: F) -> Result<Outcome, AppError>
    where
        F: FnOnce(&Contact, &Contact) -> bool,
    {
        match self.position_of(&contact.name) {
            Some(idx) => {
                if !confirm(&self.mem[idx], &contact) {
                    warn!(name = %contact.name, "overwrite declined");
                    return Ok(Outcome::Declined);
                }

                info!(old = %self.mem[idx].name, new = %contact.name, "overwriting contact");
                let mut next = self.mem.clone();
                next[idx] = contact;
                self.commit(next)?;
                Ok(Outcome::Overwritten)
            }
            None => {
                info!(name = %contact.name, "adding contact");
                let mut next = self.mem.clone();
                next.push(contact);
                self.commit(next)?;
                Ok(Outcome::Applied)
            }
        }
    }

    /// Replaces the contact named `old_name` with `updated`.
    ///
    /// When `updated.name` belongs to a different contact, `confirm` decides:
    /// on yes that contact takes the new values and the one named `old_name`
    /// is removed, so the name stays unique.
    pub fn edit_contact<F>(
        &mut self,
        old_name: &str,
        updated: Contact,
        confirm: F,
    ) -> Result<Outcome, AppError>
    where
        F: FnOnce(&Contact, &Contact) -> bool,
    {
        let Some(source) = self.position_of(old_name) else {
            warn!(name = old_name, "edit target not found");
            return Ok(Outcome::NotFound);
        };

        let target = self
            .position_of(&updated.name)
            .filter(|&idx| idx != source);

        match target {
            Some(target) => {
                if !confirm(&self.mem[target], &updated) {
                    warn!(name = %updated.name, "overwrite declined");
                    return Ok(Outcome::Declined);
                }

                info!(from = old_name, onto = %self.mem[target].name, "renaming onto existing contact");
                let mut next = self.mem.clone();
                next[target] = updated;
                next.remove(source);
                self.commit(next)?;
                Ok(Outcome::Overwritten)
            }
            None => {
                info!(from = old_name, to = %updated.name, "editing contact");
                let mut next = self.mem.clone();
                next[source] = updated;
                self.commit(next)?;
                Ok(Outcome::Applied)
            }
        }
    }

    /// Removes every contact named `name` and returns how many went away.
    pub fn delete_contact(&mut self, name: &str) -> Result<usize, AppError> {
        let next: Vec<Contact> = self
            .mem
            .iter()
            .filter(|c| !c.has_name(name))
            .cloned()
            .collect();
        let removed = self.mem.len() - next.len();

        self.commit(next)?;

        if removed > 0 {
            info!(name, removed, "deleted contact");
        }
        Ok(removed)
    }

    pub fn search(&self, query: &str) -> Vec<&Contact> {
        self.mem.iter().filter(|c| c.name_contains(query)).collect()
    }
}
