/// Result of a mutating call on [`ContactManager`](super::manager::ContactManager).
///
/// Name collisions never fail a call: the caller is asked through the
/// `confirm` callback and the answer is reported back here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No collision; the change was applied and persisted.
    Applied,
    /// A colliding contact existed and the caller agreed to overwrite it.
    Overwritten,
    /// A colliding contact existed and the caller refused. Nothing changed.
    Declined,
    /// The contact to edit does not exist. Nothing changed.
    NotFound,
}

impl Outcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, Outcome::Applied | Outcome::Overwritten)
    }
}
