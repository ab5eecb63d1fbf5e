use sqlx::PgPool;

use crate::config::MailConfig;
use crate::mailer::Mailer;
use crate::store::{EventStore, RegistrationStore, SettingsStore};

/// Shared handler state. The stores clone a pool handle each and the
/// mailer only carries configuration, so cloning the whole state per
/// request is cheap.
#[derive(Clone)]
pub struct AppState {
    pub events: EventStore,
    pub registrations: RegistrationStore,
    pub settings: SettingsStore,
    pub mailer: Mailer,
}

impl AppState {
    pub fn new(pool: PgPool, mail: MailConfig) -> Self {
        Self {
            events: EventStore::new(pool.clone()),
            registrations: RegistrationStore::new(pool.clone()),
            settings: SettingsStore::new(pool),
            mailer: Mailer::new(mail),
        }
    }
}
