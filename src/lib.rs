//! Address Book - a minimal command-line contact store
//!
//! Core modules:
//! - `book`: In-memory name → address mapping
//! - `persistence`: JSON save/load of the whole book
//! - `config`: Storage location, passed explicitly
//! - `cli`: Interactive add/get/exit loop

pub mod book;
pub mod cli;
pub mod config;
pub mod persistence;

pub use book::AddressBook;
pub use cli::{CliError, Command, Session};
pub use config::Config;
pub use persistence::{PersistError, load, save};

/// Shared constants
pub mod consts {
    /// Storage file used when no other path is configured
    pub const DEFAULT_PATH: &str = "addressbook.pkl";
    /// Returned by lookups for names that are not in the book
    pub const CONTACT_NOT_FOUND: &str = "Contact not found";
}
