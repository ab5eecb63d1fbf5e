use crate::forms::message_for;
use crate::forms::registration::RegistrationFormView;

use super::widgets::{SelectField, TextField};
use super::{flashes_html, page_with_script, Flash};

/// Public registration page: four text fields and the three cascading
/// dropdowns. When nothing is open for registration the form is replaced
/// by a notice.
pub fn registration_page(view: &RegistrationFormView, flashes: &[Flash]) -> String {
    let body = if view.category_options.is_empty() {
        let notice = Flash::warning(
            "No events are currently open for registration. Please check back later.",
        );
        format!(
            "<h1>Event Registration</h1>\n{}{}",
            flashes_html(flashes),
            flashes_html(&[notice])
        )
    } else {
        format!(
            r#"<h1>Event Registration</h1>
{flashes}<form method="post" action="/register" id="event-registration-form">
{full_name}{email}{college_name}{department}{category}{date}{name}<button type="submit">Register</button>
</form>
"#,
            flashes = flashes_html(flashes),
            full_name = TextField {
                label: "Full Name",
                name: "full_name",
                value: &view.input.full_name,
                input_type: "text",
                required: true,
                maxlength: Some(255),
                description: Some("Enter your full name (letters, spaces, and hyphens only)."),
                error: message_for(&view.errors, "full_name"),
            }
            .render(),
            email = TextField {
                label: "Email Address",
                name: "email",
                value: &view.input.email,
                input_type: "email",
                required: true,
                maxlength: Some(255),
                description: Some("Enter a valid email address."),
                error: message_for(&view.errors, "email"),
            }
            .render(),
            college_name = TextField {
                label: "College Name",
                name: "college_name",
                value: &view.input.college_name,
                input_type: "text",
                required: true,
                maxlength: Some(255),
                description: Some(
                    "Enter your college name (letters, numbers, spaces, and hyphens only)."
                ),
                error: message_for(&view.errors, "college_name"),
            }
            .render(),
            department = TextField {
                label: "Department",
                name: "department",
                value: &view.input.department,
                input_type: "text",
                required: true,
                maxlength: Some(255),
                description: Some(
                    "Enter your department name (letters, numbers, spaces, and hyphens only)."
                ),
                error: message_for(&view.errors, "department"),
            }
            .render(),
            category = SelectField {
                label: "Category of the Event",
                name: "event_category",
                placeholder: "- Select Category -",
                options: &view.category_options,
                selected: Some(view.input.event_category.as_str()),
                required: true,
                description: Some("Select the category of the event you want to register for."),
                error: message_for(&view.errors, "event_category"),
            }
            .render(),
            date = SelectField {
                label: "Event Date",
                name: "event_date",
                placeholder: "- Select Event Date -",
                options: &view.date_options,
                selected: Some(view.input.event_date.as_str()),
                required: true,
                description: Some("Select the date of the event."),
                error: message_for(&view.errors, "event_date"),
            }
            .render(),
            name = SelectField {
                label: "Event Name",
                name: "event_name",
                placeholder: "- Select Event Name -",
                options: &view.name_options,
                selected: Some(view.input.event_name.as_str()),
                required: true,
                description: Some("Select the event you want to register for."),
                error: message_for(&view.errors, "event_name"),
            }
            .render(),
        )
    };

    page_with_script("Event Registration", &body, "/static/registration-form.js")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::registration::RegistrationFormInput;
    use crate::forms::FieldError;

    fn view_with_categories() -> RegistrationFormView {
        RegistrationFormView {
            category_options: vec![("Hackathon".to_string(), "Hackathon".to_string())],
            ..Default::default()
        }
    }

    #[test]
    fn renders_form_when_events_are_open() {
        let html = registration_page(&view_with_categories(), &[]);
        assert!(html.contains(r#"<form method="post" action="/register""#));
        assert!(html.contains("- Select Category -"));
        assert!(html.contains("- Select Event Date -"));
        assert!(html.contains("- Select Event Name -"));
        assert!(html.contains("registration-form.js"));
    }

    #[test]
    fn renders_notice_when_nothing_is_open() {
        let html = registration_page(&RegistrationFormView::default(), &[]);
        assert!(!html.contains("<form"));
        assert!(
            html.contains("No events are currently open for registration. Please check back later.")
        );
    }

    #[test]
    fn keeps_submitted_values_and_errors() {
        let mut view = view_with_categories();
        view.input = RegistrationFormInput {
            full_name: "Jane".to_string(),
            email: "not-an-email".to_string(),
            ..Default::default()
        };
        view.errors = vec![FieldError::new(
            "email",
            "Please enter a valid email address.",
        )];

        let html = registration_page(&view, &[]);
        assert!(html.contains(r#"value="Jane""#));
        assert!(html.contains(r#"value="not-an-email""#));
        assert!(html.contains("Please enter a valid email address."));
    }

    #[test]
    fn shows_flash_messages() {
        let flashes = [Flash::status(
            "Thank you for registering! A confirmation email has been sent to jane@example.com.",
        )];
        let html = registration_page(&view_with_categories(), &flashes);
        assert!(html.contains("message-status"));
        assert!(html.contains("Thank you for registering!"));
    }
}
