//! Address book
//!
//! In-memory mapping from contact name to address. Persisted wholesale by
//! [`crate::persistence`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::consts::CONTACT_NOT_FOUND;

/// Name → address mapping for one session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBook {
    pub contacts: HashMap<String, String>,
}

impl AddressBook {
    /// Create an empty address book
    pub fn new() -> Self {
        Self {
            contacts: HashMap::new(),
        }
    }

    /// Store `address` under `name`, replacing any previous address (last write wins)
    pub fn add_contact(&mut self, name: impl Into<String>, address: impl Into<String>) {
        self.contacts.insert(name.into(), address.into());
    }

    /// Address stored for `name`, or [`CONTACT_NOT_FOUND`] if there is none
    pub fn get_contact(&self, name: &str) -> &str {
        self.contacts
            .get(name)
            .map(String::as_str)
            .unwrap_or(CONTACT_NOT_FOUND)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.contacts.contains_key(name)
    }

    /// Number of stored contacts
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
