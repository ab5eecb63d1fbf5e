use serde::{Deserialize, Serialize};

/// Persisted notification settings, loaded from the key-value settings
/// store at request start and handed to the mailer. Not ambient state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub admin_email: String,
    pub enable_admin_notifications: bool,
}
