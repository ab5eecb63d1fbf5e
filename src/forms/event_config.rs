use chrono::NaiveDate;
use serde::Deserialize;

use crate::forms::FieldError;
use crate::models::{NewEvent, EVENT_CATEGORIES};
use crate::utils::validate::is_plain_text;

/// Raw values posted from the admin event-configuration form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventConfigFormInput {
    #[serde(default)]
    pub registration_start_date: String,
    #[serde(default)]
    pub registration_end_date: String,
    #[serde(default)]
    pub event_date: String,
    #[serde(default)]
    pub event_name: String,
    #[serde(default)]
    pub event_category: String,
}

impl EventConfigFormInput {
    /// Validate and convert to an insertable event.
    ///
    /// Checks run in a fixed order: registration end against start, event
    /// date against registration start, then the name pattern. The event
    /// date is deliberately not compared with the registration end date;
    /// an event may be configured to take place while its registration
    /// window is still open, or before it closes.
    pub fn validate(&self) -> Result<NewEvent, Vec<FieldError>> {
        let mut errors = Vec::new();

        let start = date_field(
            &self.registration_start_date,
            "registration_start_date",
            "Event Registration Start Date field is required.",
            &mut errors,
        );
        let end = date_field(
            &self.registration_end_date,
            "registration_end_date",
            "Event Registration End Date field is required.",
            &mut errors,
        );
        let event_date = date_field(
            &self.event_date,
            "event_date",
            "Event Date field is required.",
            &mut errors,
        );

        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                errors.push(FieldError::new(
                    "registration_end_date",
                    "Registration end date must be after or equal to the start date.",
                ));
            }
        }

        if let (Some(start), Some(event_date)) = (start, event_date) {
            if event_date < start {
                errors.push(FieldError::new(
                    "event_date",
                    "Event date must be after or equal to the registration start date.",
                ));
            }
        }

        if self.event_name.is_empty() {
            errors.push(FieldError::new("event_name", "Event Name field is required."));
        } else if !is_plain_text(&self.event_name) {
            errors.push(FieldError::new(
                "event_name",
                "Event name should only contain letters, numbers, spaces, and hyphens.",
            ));
        }

        if self.event_category.is_empty() {
            errors.push(FieldError::new(
                "event_category",
                "Category of the Event field is required.",
            ));
        } else if !EVENT_CATEGORIES.contains(&self.event_category.as_str()) {
            errors.push(FieldError::new(
                "event_category",
                "An illegal choice has been detected. Please contact the site administrator.",
            ));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewEvent {
            event_name: self.event_name.clone(),
            event_category: self.event_category.clone(),
            // Unwraps cannot fire: a None date pushed an error above.
            event_date: event_date.unwrap(),
            registration_start_date: start.unwrap(),
            registration_end_date: end.unwrap(),
        })
    }
}

fn date_field(
    value: &str,
    field: &'static str,
    required_message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<NaiveDate> {
    if value.is_empty() {
        errors.push(FieldError::new(field, required_message.to_string()));
        return None;
    }
    match value.parse() {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(FieldError::new(field, "Enter a valid date.".to_string()));
            None
        }
    }
}
