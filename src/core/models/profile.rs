//! User profile models

use super::double_option;
use crate::auth::rbac::OwnedResource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timezone assigned to new profiles
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Reminder frequency assigned to new profiles
pub const DEFAULT_REMINDER_FREQUENCY: &str = "daily";

/// Per-user preferences, keyed by the identity provider's user ID
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// User ID
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    /// Free-form working preferences
    #[serde(default)]
    pub work_style: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub notification_settings: NotificationSettings,
    /// IANA timezone name
    pub timezone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Notification preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub reminder_frequency: String,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: true,
            reminder_frequency: DEFAULT_REMINDER_FREQUENCY.to_string(),
        }
    }
}

/// Partial profile update
///
/// The user ID and creation time are not updatable. `full_name` and
/// `avatar_url` accept an explicit `null` to clear them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileInput {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub full_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub avatar_url: Option<Option<String>>,
    #[serde(default)]
    pub work_style: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    pub notification_settings: Option<NotificationSettings>,
    #[serde(default)]
    pub timezone: Option<String>,
}

impl Profile {
    /// New profile with default preferences
    pub fn new(id: impl Into<String>, email: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            full_name: None,
            avatar_url: None,
            work_style: serde_json::Map::new(),
            notification_settings: NotificationSettings::default(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update and stamp `updated_at`
    pub fn apply_update(&mut self, update: UpdateProfileInput, now: DateTime<Utc>) {
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(full_name) = update.full_name {
            self.full_name = full_name;
        }
        if let Some(avatar_url) = update.avatar_url {
            self.avatar_url = avatar_url;
        }
        if let Some(work_style) = update.work_style {
            self.work_style = work_style;
        }
        if let Some(settings) = update.notification_settings {
            self.notification_settings = settings;
        }
        if let Some(timezone) = update.timezone {
            self.timezone = timezone;
        }
        self.updated_at = now;
    }
}

impl OwnedResource for Profile {
    fn owner_id(&self) -> Option<&str> {
        Some(self.id.as_str())
    }
}
