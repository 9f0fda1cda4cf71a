//! Domain model for phonebook entries.

use serde::{Deserialize, Serialize};

/// A single contact entry.
///
/// The entry is also its own wire format: it serializes to the fixed
/// lowercase JSON field names `forename`, `surname` and `phonenumber`.
///
/// There is no identity field. The (forename, surname) pair acts as a
/// composite key for deletion only; creation performs no uniqueness check
/// and duplicate entries are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// First name of the contact.
    pub forename: String,
    /// Last name of the contact.
    pub surname: String,
    /// Phone number, stored as a plain integer.
    #[serde(rename = "phonenumber")]
    pub phone_number: i64,
}
