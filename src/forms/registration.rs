use chrono::NaiveDate;
use serde::Deserialize;

use crate::forms::FieldError;
use crate::store::EventStore;
use crate::utils::validate::{is_plain_name, is_plain_text, is_valid_email};

/// Raw values posted from the public registration form. `event_name`
/// carries the id of the chosen event, as the form's name dropdown is
/// keyed by id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationFormInput {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub college_name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub event_category: String,
    #[serde(default)]
    pub event_date: String,
    #[serde(default)]
    pub event_name: String,
}

impl RegistrationFormInput {
    /// The chosen event's id, if the dropdown value parses as one.
    /// A tampered non-numeric value resolves to no event, which the
    /// validation path reports as the event no longer being open.
    pub fn event_config_id(&self) -> Option<i32> {
        self.event_name.parse().ok()
    }

    /// The chosen event date, if any.
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.event_date.parse().ok()
    }
}

/// Field-format checks. Every violation is collected so the form can
/// surface all of them at once; the storage-backed checks (duplicate
/// submission, event still open) are appended by the handler.
pub fn validate_fields(input: &RegistrationFormInput) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if input.full_name.is_empty() {
        errors.push(FieldError::new("full_name", "Full Name field is required."));
    } else if !is_plain_name(&input.full_name) {
        errors.push(FieldError::new(
            "full_name",
            "Full name should only contain letters, spaces, and hyphens.",
        ));
    }

    if input.email.is_empty() {
        errors.push(FieldError::new("email", "Email Address field is required."));
    } else if !is_valid_email(&input.email) {
        errors.push(FieldError::new(
            "email",
            "Please enter a valid email address.",
        ));
    }

    if input.college_name.is_empty() {
        errors.push(FieldError::new(
            "college_name",
            "College Name field is required.",
        ));
    } else if !is_plain_text(&input.college_name) {
        errors.push(FieldError::new(
            "college_name",
            "College name should only contain letters, numbers, spaces, and hyphens.",
        ));
    }

    if input.department.is_empty() {
        errors.push(FieldError::new(
            "department",
            "Department field is required.",
        ));
    } else if !is_plain_text(&input.department) {
        errors.push(FieldError::new(
            "department",
            "Department should only contain letters, numbers, spaces, and hyphens.",
        ));
    }

    if input.event_category.is_empty() {
        errors.push(FieldError::new(
            "event_category",
            "Category of the Event field is required.",
        ));
    }

    if input.event_date.is_empty() {
        errors.push(FieldError::new(
            "event_date",
            "Event Date field is required.",
        ));
    }

    if input.event_name.is_empty() {
        errors.push(FieldError::new(
            "event_name",
            "Event Name field is required.",
        ));
    }

    errors
}

/// One of the three cascading dropdowns on the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectStage {
    Category,
    EventDate,
    EventName,
}

/// The upstream selections a dropdown's option set depends on.
#[derive(Debug, Clone, Default)]
pub struct CascadeSelection {
    pub category: Option<String>,
    pub event_date: Option<NaiveDate>,
}

impl CascadeSelection {
    pub fn from_input(input: &RegistrationFormInput) -> Self {
        Self {
            category: (!input.event_category.is_empty()).then(|| input.event_category.clone()),
            event_date: input.selected_date(),
        }
    }
}

/// Option set for one dropdown stage as `(value, label)` pairs, driven by
/// the upstream selections. Both the full page render and the AJAX
/// refresh endpoints call this, so the option logic exists exactly once.
/// A stage whose upstream selection is missing has no options beyond the
/// placeholder.
pub async fn options_for(
    events: &EventStore,
    today: NaiveDate,
    stage: SelectStage,
    selection: &CascadeSelection,
) -> Result<Vec<(String, String)>, sqlx::Error> {
    match stage {
        SelectStage::Category => {
            let categories = events.available_categories(today).await?;
            Ok(categories.into_iter().map(|c| (c.clone(), c)).collect())
        }
        SelectStage::EventDate => match &selection.category {
            Some(category) => {
                let dates = events.dates_by_category(category, today).await?;
                Ok(dates
                    .into_iter()
                    .map(|d| (d.to_string(), d.to_string()))
                    .collect())
            }
            None => Ok(Vec::new()),
        },
        SelectStage::EventName => match (&selection.category, selection.event_date) {
            (Some(category), Some(date)) => {
                let names = events.names_by_category_and_date(category, date, today).await?;
                Ok(names
                    .into_iter()
                    .map(|(id, name)| (id.to_string(), name))
                    .collect())
            }
            _ => Ok(Vec::new()),
        },
    }
}

/// Everything the registration page template needs: the submitted values,
/// the collected errors, and the option set of each dropdown.
#[derive(Debug, Clone, Default)]
pub struct RegistrationFormView {
    pub input: RegistrationFormInput,
    pub errors: Vec<FieldError>,
    pub category_options: Vec<(String, String)>,
    pub date_options: Vec<(String, String)>,
    pub name_options: Vec<(String, String)>,
}

impl RegistrationFormView {
    /// Assemble the view for a render: option sets for all three stages
    /// given the current selections.
    pub async fn build(
        events: &EventStore,
        today: NaiveDate,
        input: RegistrationFormInput,
        errors: Vec<FieldError>,
    ) -> Result<Self, sqlx::Error> {
        let selection = CascadeSelection::from_input(&input);
        let category_options =
            options_for(events, today, SelectStage::Category, &selection).await?;
        let date_options = options_for(events, today, SelectStage::EventDate, &selection).await?;
        let name_options = options_for(events, today, SelectStage::EventName, &selection).await?;

        Ok(Self {
            input,
            errors,
            category_options,
            date_options,
            name_options,
        })
    }
}
