pub mod event;
pub mod registration;
pub mod settings;

pub use event::{EventConfig, NewEvent, EVENT_CATEGORIES};
pub use registration::{NewRegistration, RegistrationDetail};
pub use settings::NotificationSettings;
