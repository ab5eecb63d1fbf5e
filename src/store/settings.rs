use sqlx::PgPool;

use crate::models::NotificationSettings;

const ADMIN_EMAIL: &str = "admin_email";
const ENABLE_ADMIN_NOTIFICATIONS: &str = "enable_admin_notifications";

/// Key-value persistence for the module's notification settings.
#[derive(Clone)]
pub struct SettingsStore {
    pool: PgPool,
}

impl SettingsStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load the current settings; unset keys fall back to defaults
    /// (empty admin address, notifications disabled).
    pub async fn load(&self) -> Result<NotificationSettings, sqlx::Error> {
        let rows: Vec<(String, String)> = sqlx::query_as(
            "SELECT name, value
             FROM module_settings
             WHERE name = $1 OR name = $2",
        )
        .bind(ADMIN_EMAIL)
        .bind(ENABLE_ADMIN_NOTIFICATIONS)
        .fetch_all(&self.pool)
        .await?;

        let mut settings = NotificationSettings::default();
        for (name, value) in rows {
            match name.as_str() {
                ADMIN_EMAIL => settings.admin_email = value,
                ENABLE_ADMIN_NOTIFICATIONS => settings.enable_admin_notifications = value == "1",
                _ => {}
            }
        }

        Ok(settings)
    }

    /// Persist both settings, inserting or overwriting each key.
    pub async fn save(&self, settings: &NotificationSettings) -> Result<(), sqlx::Error> {
        self.upsert(ADMIN_EMAIL, &settings.admin_email).await?;
        self.upsert(
            ENABLE_ADMIN_NOTIFICATIONS,
            if settings.enable_admin_notifications {
                "1"
            } else {
                "0"
            },
        )
        .await?;

        Ok(())
    }

    async fn upsert(&self, name: &str, value: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO module_settings (name, value)
             VALUES ($1, $2)
             ON CONFLICT (name) DO UPDATE SET value = EXCLUDED.value",
        )
        .bind(name)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
