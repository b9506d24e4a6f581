use crate::reminder::SentReminders;
use crate::webinar_date::{InvalidWebinarDateError, WebinarDate};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Position of a record in the backing store. For spreadsheets this
/// is the 1-indexed row number, so the first data row is `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowId(pub u32);

impl RowId {
    pub fn inner(&self) -> u32 {
        self.0
    }
}

impl Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub const WEBINAR_REGISTRATION_SOURCE: &str = "webinar_registration";

/// A signup for a single webinar.
///
/// Registrants are only ever appended, the only mutation is setting one of
/// the `sent` flags after the corresponding email was delivered.
#[derive(Debug, Clone, PartialEq)]
pub struct Registrant {
    pub row: RowId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub agency: String,
    pub submitted_at: String,
    pub source: String,
    pub webinar_id: String,
    /// Raw value as submitted, see `webinar_date()`
    pub webinar_date: String,
    pub sent: SentReminders,
}

impl Registrant {
    pub fn webinar_date(&self) -> Result<WebinarDate, InvalidWebinarDateError> {
        WebinarDate::parse(&self.webinar_date)
    }

    /// Name used in the greeting of emails
    pub fn greeting_name(&self) -> &str {
        greeting_name(&self.first_name)
    }
}

pub fn greeting_name(first_name: &str) -> &str {
    let first_name = first_name.trim();
    if first_name.is_empty() {
        "there"
    } else {
        first_name
    }
}

/// A registrant that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewRegistrant {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub agency: String,
    pub submitted_at: String,
    pub source: String,
    pub webinar_id: String,
    pub webinar_date: String,
}

impl NewRegistrant {
    /// The registration form has a single name field. The first word is used
    /// as first name and the rest as last name.
    pub fn split_name(name: &str) -> (String, String) {
        let mut parts = name.split_whitespace();
        let first = parts.next().unwrap_or_default().to_string();
        let last = parts.collect::<Vec<_>>().join(" ");
        (first, last)
    }

    pub fn into_registrant(self, row: RowId) -> Registrant {
        Registrant {
            row,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            agency: self.agency,
            submitted_at: self.submitted_at,
            source: self.source,
            webinar_id: self.webinar_id,
            webinar_date: self.webinar_date,
            sent: Default::default(),
        }
    }
}
