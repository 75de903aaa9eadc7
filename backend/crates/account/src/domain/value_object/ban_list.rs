//! Ban List
//!
//! Emails an administrator has suspended. Maintained outside this engine;
//! read-only here.

use serde::{Deserialize, Serialize};

use crate::domain::value_object::email::Email;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BanList(Vec<String>);

impl BanList {
    pub fn new(emails: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(emails.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, email: &Email) -> bool {
        self.0.iter().any(|entry| email.matches(entry))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
