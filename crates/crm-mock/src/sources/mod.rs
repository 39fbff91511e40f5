//! Contact sources for dataset generation.
//!
//! - [`ContactPool`]: Built-in directory, caller-supplied contacts, or a JSON fixture
//! - [`SyntheticContacts`]: Invented companies and staff from fake names

mod contacts;
mod synthetic;

pub use contacts::{Contact, ContactPool};
pub use synthetic::SyntheticContacts;
