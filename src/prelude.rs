pub use crate::cli::{command, run_app};
pub use crate::domain::{
    contact::{self, Contact},
    manager::{self, ContactManager},
    outcome::Outcome,
};
pub use crate::errors::AppError;
pub use crate::storage::{self, ContactStore, MemStorage, TxtStorage};
