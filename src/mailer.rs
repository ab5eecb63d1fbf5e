//! Outgoing notification emails.
//!
//! A transport is built per send and the send itself runs on the blocking
//! pool while the request waits on it. Failures are logged and reported
//! to the caller as a boolean; they never abort the request that
//! triggered them.

use chrono::NaiveDate;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::config::MailConfig;
use crate::models::NotificationSettings;

/// Everything the two templates interpolate, captured at submit time.
#[derive(Debug, Clone)]
pub struct EmailParams {
    pub full_name: String,
    pub email: String,
    pub college_name: String,
    pub department: String,
    pub event_name: String,
    pub event_date: NaiveDate,
    pub event_category: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailTemplate {
    RegistrationConfirmation,
    AdminNotification,
}

impl MailTemplate {
    pub fn subject(&self, params: &EmailParams) -> String {
        match self {
            MailTemplate::RegistrationConfirmation => {
                format!("Registration confirmed: {}", params.event_name)
            }
            MailTemplate::AdminNotification => {
                format!("New registration: {}", params.event_name)
            }
        }
    }

    pub fn body_html(&self, params: &EmailParams) -> String {
        match self {
            MailTemplate::RegistrationConfirmation => format!(
                r#"<html>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
  <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
    <h2>Thank you for registering, {full_name}!</h2>
    <p>Your registration for the following event has been received:</p>
    <ul>
      <li><strong>Event:</strong> {event_name}</li>
      <li><strong>Category:</strong> {event_category}</li>
      <li><strong>Date:</strong> {event_date}</li>
    </ul>
    <p>We look forward to seeing you there.</p>
  </div>
</body>
</html>"#,
                full_name = params.full_name,
                event_name = params.event_name,
                event_category = params.event_category,
                event_date = params.event_date,
            ),
            MailTemplate::AdminNotification => format!(
                r#"<html>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
  <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
    <h2>New event registration</h2>
    <ul>
      <li><strong>Name:</strong> {full_name}</li>
      <li><strong>Email:</strong> {email}</li>
      <li><strong>College:</strong> {college_name}</li>
      <li><strong>Department:</strong> {department}</li>
      <li><strong>Event:</strong> {event_name}</li>
      <li><strong>Category:</strong> {event_category}</li>
      <li><strong>Event date:</strong> {event_date}</li>
    </ul>
  </div>
</body>
</html>"#,
                full_name = params.full_name,
                email = params.email,
                college_name = params.college_name,
                department = params.department,
                event_name = params.event_name,
                event_category = params.event_category,
                event_date = params.event_date,
            ),
        }
    }
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail transport is not configured")]
    NotConfigured,

    #[error("SMTP relay error: {0}")]
    Relay(String),

    #[error("failed to build email: {0}")]
    Build(String),

    #[error("failed to send email: {0}")]
    Send(String),
}

/// SMTP-backed notifier.
#[derive(Clone)]
pub struct Mailer {
    config: MailConfig,
}

impl Mailer {
    pub fn new(config: MailConfig) -> Self {
        Self { config }
    }

    /// Confirmation to the address the user registered with. Returns
    /// whether the send succeeded; the outcome is also logged here.
    pub async fn send_user_confirmation(&self, to: &str, params: &EmailParams) -> bool {
        match self
            .send(MailTemplate::RegistrationConfirmation, to, params)
            .await
        {
            Ok(()) => {
                info!(email = %to, "Confirmation email sent");
                true
            }
            Err(e) => {
                error!(error = %e, email = %to, "Failed to send confirmation email");
                false
            }
        }
    }

    /// Notification to the configured admin address, gated on the loaded
    /// settings: disabled means a silent skip, enabled without an address
    /// means a logged warning.
    pub async fn send_admin_notification(
        &self,
        settings: &NotificationSettings,
        params: &EmailParams,
    ) -> bool {
        if !settings.enable_admin_notifications {
            return false;
        }

        if settings.admin_email.is_empty() {
            warn!("Admin notification email is not configured.");
            return false;
        }

        match self
            .send(MailTemplate::AdminNotification, &settings.admin_email, params)
            .await
        {
            Ok(()) => {
                info!(email = %settings.admin_email, "Admin notification email sent");
                true
            }
            Err(e) => {
                error!(error = %e, email = %settings.admin_email, "Failed to send admin notification email");
                false
            }
        }
    }

    async fn send(
        &self,
        template: MailTemplate,
        to: &str,
        params: &EmailParams,
    ) -> Result<(), MailError> {
        let email = Message::builder()
            .from(
                self.from_header()
                    .parse()
                    .map_err(|e| MailError::Build(format!("Invalid from address: {e}")))?,
            )
            .to(to
                .parse()
                .map_err(|e| MailError::Build(format!("Invalid to address: {e}")))?)
            .subject(template.subject(params))
            .header(ContentType::TEXT_HTML)
            .body(template.body_html(params))
            .map_err(|e| MailError::Build(e.to_string()))?;

        let mailer = self.build_transport()?;

        tokio::task::spawn_blocking(move || {
            mailer
                .send(&email)
                .map(|_| ())
                .map_err(|e| MailError::Send(e.to_string()))
        })
        .await
        .map_err(|e| MailError::Send(format!("send task failed: {e}")))?
    }

    /// Build a transport for one send; no pooled connections.
    fn build_transport(&self) -> Result<SmtpTransport, MailError> {
        let relay = self
            .config
            .smtp_relay
            .as_deref()
            .ok_or(MailError::NotConfigured)?;

        let mut builder = SmtpTransport::relay(relay)
            .map_err(|e| MailError::Relay(e.to_string()))?
            .port(self.config.smtp_port);

        if let (Some(username), Some(password)) =
            (&self.config.smtp_username, &self.config.smtp_password)
        {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(builder.build())
    }

    fn from_header(&self) -> String {
        format!("{} <{}>", self.config.from_name, self.config.from_email)
    }
}
