pub mod contact;
pub mod manager;
pub mod outcome;

use crate::prelude::AppError;
use crate::storage::{ContactStore, TxtStorage};

pub use contact::Contact;
pub use manager::ContactManager;
pub use outcome::Outcome;
