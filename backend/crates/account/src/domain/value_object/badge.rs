use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Badge identifier, e.g. `"early_adopter"`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(transparent)]
pub struct Badge(String);

impl Badge {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Badge {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
