use chrono::NaiveDate;

use crate::forms::event_config::EventConfigFormInput;
use crate::forms::settings::SettingsFormInput;
use crate::forms::{message_for, FieldError};
use crate::models::{EventConfig, RegistrationDetail, EVENT_CATEGORIES};

use super::widgets::{CheckboxField, SelectField, TextField};
use super::{escape_html, flashes_html, page, page_with_script, Flash};

pub const EXPORT_CSV_PATH: &str = "/admin/event-registration/export-csv";

/// Everything the admin listing page renders: the (already filtered)
/// rows plus the state of the two filter dropdowns.
#[derive(Debug, Clone, Default)]
pub struct ListingView {
    pub rows: Vec<RegistrationDetail>,
    pub date_options: Vec<NaiveDate>,
    pub name_options: Vec<(i32, String)>,
    pub selected_date: Option<NaiveDate>,
    pub selected_event: Option<i32>,
}

impl ListingView {
    /// Export link carrying the active filters; the export endpoint gives
    /// the event id precedence when both are present.
    fn export_href(&self) -> String {
        let mut params = Vec::new();
        if let Some(date) = self.selected_date {
            params.push(format!("event_date={date}"));
        }
        if let Some(id) = self.selected_event {
            params.push(format!("event_name={id}"));
        }

        if params.is_empty() {
            EXPORT_CSV_PATH.to_string()
        } else {
            format!("{}?{}", EXPORT_CSV_PATH, params.join("&"))
        }
    }
}

pub fn listing_page(view: &ListingView) -> String {
    let date_options: Vec<(String, String)> = view
        .date_options
        .iter()
        .map(|d| (d.to_string(), d.to_string()))
        .collect();
    let name_options: Vec<(String, String)> = view
        .name_options
        .iter()
        .map(|(id, name)| (id.to_string(), name.clone()))
        .collect();
    let selected_date = view.selected_date.map(|d| d.to_string());
    let selected_event = view.selected_event.map(|id| id.to_string());

    let rows = if view.rows.is_empty() {
        "    <tr><td colspan=\"6\">No registrations found.</td></tr>\n".to_string()
    } else {
        view.rows.iter().map(listing_row).collect()
    };

    let body = format!(
        r#"<h1>Event Registrations</h1>
<div class="filters">
{date_select}{name_select}</div>
<a class="export-link" id="export-csv-link" href="{export_href}">Export as CSV</a>
<div class="total-participants">Total Participants: <span id="total-participants">{count}</span></div>
<table id="registrations-table">
  <thead>
    <tr><th>Name</th><th>Email</th><th>Event Date</th><th>College Name</th><th>Department</th><th>Submission Date</th></tr>
  </thead>
  <tbody id="registrations-tbody">
{rows}  </tbody>
</table>
"#,
        date_select = SelectField {
            label: "Event Date",
            name: "event_date",
            placeholder: "- Select Event Date -",
            options: &date_options,
            selected: selected_date.as_deref(),
            required: false,
            description: None,
            error: None,
        }
        .render(),
        name_select = SelectField {
            label: "Event Name",
            name: "event_name",
            placeholder: "- Select Event Name -",
            options: &name_options,
            selected: selected_event.as_deref(),
            required: false,
            description: None,
            error: None,
        }
        .render(),
        export_href = view.export_href(),
        count = view.rows.len(),
    );

    page_with_script("Event Registrations", &body, "/static/admin-listing.js")
}

fn listing_row(row: &RegistrationDetail) -> String {
    format!(
        "    <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        escape_html(&row.full_name),
        escape_html(&row.email),
        row.event_date,
        escape_html(&row.college_name),
        escape_html(&row.department),
        row.submission_date(),
    )
}

pub fn config_page(
    input: &EventConfigFormInput,
    errors: &[FieldError],
    events: &[EventConfig],
    flashes: &[Flash],
) -> String {
    let category_options: Vec<(String, String)> = EVENT_CATEGORIES
        .iter()
        .map(|c| (c.to_string(), c.to_string()))
        .collect();

    let body = format!(
        r#"<h1>Event Configuration</h1>
{flashes}<form method="post" action="/admin/event-registration/config">
{start}{end}{event_date}{event_name}{category}<button type="submit">Save Event Configuration</button>
</form>
<h2>Existing Events</h2>
{events_table}"#,
        flashes = flashes_html(flashes),
        start = TextField {
            label: "Event Registration Start Date",
            name: "registration_start_date",
            value: &input.registration_start_date,
            input_type: "date",
            required: true,
            maxlength: None,
            description: Some("The date when event registration opens."),
            error: message_for(errors, "registration_start_date"),
        }
        .render(),
        end = TextField {
            label: "Event Registration End Date",
            name: "registration_end_date",
            value: &input.registration_end_date,
            input_type: "date",
            required: true,
            maxlength: None,
            description: Some("The date when event registration closes."),
            error: message_for(errors, "registration_end_date"),
        }
        .render(),
        event_date = TextField {
            label: "Event Date",
            name: "event_date",
            value: &input.event_date,
            input_type: "date",
            required: true,
            maxlength: None,
            description: Some("The date when the event takes place."),
            error: message_for(errors, "event_date"),
        }
        .render(),
        event_name = TextField {
            label: "Event Name",
            name: "event_name",
            value: &input.event_name,
            input_type: "text",
            required: true,
            maxlength: Some(255),
            description: Some("The name of the event."),
            error: message_for(errors, "event_name"),
        }
        .render(),
        category = SelectField {
            label: "Category of the Event",
            name: "event_category",
            placeholder: "- Select Category -",
            options: &category_options,
            selected: Some(input.event_category.as_str()),
            required: true,
            description: Some("Select the category of the event."),
            error: message_for(errors, "event_category"),
        }
        .render(),
        events_table = events_table(events),
    );

    page("Event Configuration", &body)
}

fn events_table(events: &[EventConfig]) -> String {
    if events.is_empty() {
        return "<p>No events configured yet.</p>\n".to_string();
    }

    let rows: String = events
        .iter()
        .map(|e| {
            format!(
                "    <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                e.id,
                escape_html(&e.event_name),
                escape_html(&e.event_category),
                e.event_date,
                e.registration_start_date,
                e.registration_end_date,
            )
        })
        .collect();

    format!(
        r#"<table>
  <thead>
    <tr><th>ID</th><th>Event Name</th><th>Category</th><th>Event Date</th><th>Registration Start</th><th>Registration End</th></tr>
  </thead>
  <tbody>
{rows}  </tbody>
</table>
"#
    )
}

pub fn settings_page(
    input: &SettingsFormInput,
    errors: &[FieldError],
    flashes: &[Flash],
) -> String {
    let body = format!(
        r#"<h1>Event Registration Settings</h1>
{flashes}<form method="post" action="/admin/event-registration/settings">
{admin_email}{notifications}<button type="submit">Save configuration</button>
</form>
"#,
        flashes = flashes_html(flashes),
        admin_email = TextField {
            label: "Admin Notification Email Address",
            name: "admin_email",
            value: &input.admin_email,
            input_type: "email",
            required: true,
            maxlength: Some(255),
            description: Some("The email address where admin notifications will be sent."),
            error: message_for(errors, "admin_email"),
        }
        .render(),
        notifications = CheckboxField {
            label: "Enable Admin Notifications",
            name: "enable_admin_notifications",
            checked: input.enable_admin_notifications.is_some(),
            description: Some(
                "Check this box to send email notifications to the administrator when new registrations are submitted."
            ),
        }
        .render(),
    );

    page("Event Registration Settings", &body)
}
