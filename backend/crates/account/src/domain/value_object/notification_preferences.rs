use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    pub email: bool,
    pub in_app: bool,
}

impl NotificationPreferences {
    pub const ALL: Self = Self {
        email: true,
        in_app: true,
    };
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self::ALL
    }
}
