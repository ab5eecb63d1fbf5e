use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::{NewRegistration, RegistrationDetail};

/// Which subset of registrations a listing, live filter or export wants.
///
/// Precedence: an event id beats a date beats no filter, even when both
/// parameters arrive on the same request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistrationFilter {
    pub event_id: Option<i32>,
    pub event_date: Option<NaiveDate>,
}

/// The resolved filter after precedence is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterSelection {
    ByEvent(i32),
    ByDate(NaiveDate),
    All,
}

impl RegistrationFilter {
    pub fn new(event_id: Option<i32>, event_date: Option<NaiveDate>) -> Self {
        Self {
            event_id,
            event_date,
        }
    }

    pub fn selection(&self) -> FilterSelection {
        match (self.event_id, self.event_date) {
            (Some(id), _) => FilterSelection::ByEvent(id),
            (None, Some(date)) => FilterSelection::ByDate(date),
            (None, None) => FilterSelection::All,
        }
    }
}

const DETAIL_COLUMNS: &str = "r.id, r.full_name, r.email, r.college_name, r.department, \
     r.event_category, r.event_config_id, r.created, e.event_name, e.event_date";

/// Queries over the `event_registrations` table, joined with
/// `event_config` wherever event name and date are displayed.
#[derive(Clone)]
pub struct RegistrationStore {
    pool: PgPool,
}

impl RegistrationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a submission and return its id. The submitted category is
    /// stored on the row as-is; it is not re-read from the event.
    pub async fn create(&self, registration: &NewRegistration) -> Result<i32, sqlx::Error> {
        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO event_registrations
                 (full_name, email, college_name, department,
                  event_category, event_config_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(&registration.full_name)
        .bind(&registration.email)
        .bind(&registration.college_name)
        .bind(&registration.department)
        .bind(&registration.event_category)
        .bind(registration.event_config_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Fast-path duplicate check for the user-facing message. The unique
    /// index on (email, event_config_id) remains the authority.
    pub async fn is_duplicate(&self, email: &str, event_config_id: i32) -> Result<bool, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*)
             FROM event_registrations
             WHERE email = $1 AND event_config_id = $2",
        )
        .bind(email)
        .bind(event_config_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    /// All submissions, newest first.
    pub async fn all(&self) -> Result<Vec<RegistrationDetail>, sqlx::Error> {
        let sql = format!(
            "SELECT {DETAIL_COLUMNS}
             FROM event_registrations r
             JOIN event_config e ON r.event_config_id = e.id
             ORDER BY r.created DESC"
        );
        sqlx::query_as(&sql).fetch_all(&self.pool).await
    }

    pub async fn by_event(&self, event_config_id: i32) -> Result<Vec<RegistrationDetail>, sqlx::Error> {
        let sql = format!(
            "SELECT {DETAIL_COLUMNS}
             FROM event_registrations r
             JOIN event_config e ON r.event_config_id = e.id
             WHERE r.event_config_id = $1
             ORDER BY r.created DESC"
        );
        sqlx::query_as(&sql)
            .bind(event_config_id)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn by_date(&self, date: NaiveDate) -> Result<Vec<RegistrationDetail>, sqlx::Error> {
        let sql = format!(
            "SELECT {DETAIL_COLUMNS}
             FROM event_registrations r
             JOIN event_config e ON r.event_config_id = e.id
             WHERE e.event_date = $1
             ORDER BY r.created DESC"
        );
        sqlx::query_as(&sql).bind(date).fetch_all(&self.pool).await
    }

    pub async fn count_by_event(&self, event_config_id: i32) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*)
             FROM event_registrations
             WHERE event_config_id = $1",
        )
        .bind(event_config_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// The single entry point the listing page, the live filter endpoint
    /// and the CSV export all share.
    pub async fn filtered(
        &self,
        filter: RegistrationFilter,
    ) -> Result<Vec<RegistrationDetail>, sqlx::Error> {
        match filter.selection() {
            FilterSelection::ByEvent(id) => self.by_event(id).await,
            FilterSelection::ByDate(date) => self.by_date(date).await,
            FilterSelection::All => self.all().await,
        }
    }
}
