use serde::Deserialize;

use crate::forms::FieldError;
use crate::models::NotificationSettings;
use crate::utils::validate::is_valid_email;

/// Raw values posted from the notification settings form. The checkbox
/// arrives as a present-or-absent field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsFormInput {
    #[serde(default)]
    pub admin_email: String,
    #[serde(default)]
    pub enable_admin_notifications: Option<String>,
}

impl SettingsFormInput {
    /// Validate; nothing is persisted when any check fails.
    pub fn validate(&self) -> Result<NotificationSettings, Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.admin_email.is_empty() {
            errors.push(FieldError::new(
                "admin_email",
                "Admin Notification Email Address field is required.",
            ));
        } else if !is_valid_email(&self.admin_email) {
            errors.push(FieldError::new(
                "admin_email",
                "Please enter a valid email address.",
            ));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NotificationSettings {
            admin_email: self.admin_email.clone(),
            enable_admin_notifications: self.enable_admin_notifications.is_some(),
        })
    }

    pub fn from_settings(settings: &NotificationSettings) -> Self {
        Self {
            admin_email: settings.admin_email.clone(),
            enable_admin_notifications: settings
                .enable_admin_notifications
                .then(|| "1".to_string()),
        }
    }
}
