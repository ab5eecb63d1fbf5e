use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::{EventConfig, NewEvent};

/// Queries over the `event_config` table.
///
/// The public-facing lookups (`available_categories`, `dates_by_category`,
/// `names_by_category_and_date`) only see events whose registration window
/// contains `today`; the admin lookups (`all_event_dates`, `names_by_date`)
/// see every event ever configured. The split is deliberate.
#[derive(Clone)]
pub struct EventStore {
    pool: PgPool,
}

impl EventStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new event configuration and return its id.
    pub async fn create(&self, event: &NewEvent) -> Result<i32, sqlx::Error> {
        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO event_config
                 (event_name, event_category, event_date,
                  registration_start_date, registration_end_date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(&event.event_name)
        .bind(&event.event_category)
        .bind(event.event_date)
        .bind(event.registration_start_date)
        .bind(event.registration_end_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Every configured event, soonest event date first.
    pub async fn all(&self) -> Result<Vec<EventConfig>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, event_name, event_category, event_date,
                    registration_start_date, registration_end_date, created
             FROM event_config
             ORDER BY event_date ASC",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn by_id(&self, id: i32) -> Result<Option<EventConfig>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, event_name, event_category, event_date,
                    registration_start_date, registration_end_date, created
             FROM event_config
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Distinct categories that have at least one event open for
    /// registration on `today`.
    pub async fn available_categories(&self, today: NaiveDate) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT DISTINCT event_category
             FROM event_config
             WHERE registration_start_date <= $1 AND registration_end_date >= $1
             ORDER BY event_category ASC",
        )
        .bind(today)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|(category,)| category).collect())
    }

    /// Distinct event dates within a category, open windows only.
    pub async fn dates_by_category(
        &self,
        category: &str,
        today: NaiveDate,
    ) -> Result<Vec<NaiveDate>, sqlx::Error> {
        let rows: Vec<(NaiveDate,)> = sqlx::query_as(
            "SELECT DISTINCT event_date
             FROM event_config
             WHERE event_category = $1
               AND registration_start_date <= $2 AND registration_end_date >= $2
             ORDER BY event_date ASC",
        )
        .bind(category)
        .bind(today)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|(date,)| date).collect())
    }

    /// `(id, name)` pairs for events in a category on a date, open windows
    /// only, name ascending.
    pub async fn names_by_category_and_date(
        &self,
        category: &str,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<Vec<(i32, String)>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, event_name
             FROM event_config
             WHERE event_category = $1 AND event_date = $2
               AND registration_start_date <= $3 AND registration_end_date >= $3
             ORDER BY event_name ASC",
        )
        .bind(category)
        .bind(date)
        .bind(today)
        .fetch_all(&self.pool)
        .await
    }

    /// Distinct event dates across all events, regardless of window.
    /// Admin listing only.
    pub async fn all_event_dates(&self) -> Result<Vec<NaiveDate>, sqlx::Error> {
        let rows: Vec<(NaiveDate,)> = sqlx::query_as(
            "SELECT DISTINCT event_date
             FROM event_config
             ORDER BY event_date ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|(date,)| date).collect())
    }

    /// `(id, name)` pairs for events on a date, regardless of window.
    /// Admin listing only.
    pub async fn names_by_date(&self, date: NaiveDate) -> Result<Vec<(i32, String)>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, event_name
             FROM event_config
             WHERE event_date = $1
             ORDER BY event_name ASC",
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await
    }
}
