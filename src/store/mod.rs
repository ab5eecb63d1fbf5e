pub mod events;
pub mod registrations;
pub mod settings;

pub use events::EventStore;
pub use registrations::{FilterSelection, RegistrationFilter, RegistrationStore};
pub use settings::SettingsStore;
