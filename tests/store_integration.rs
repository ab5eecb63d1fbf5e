//! Integration tests for the event, registration and settings stores
//! against a real PostgreSQL database, plus the full submit flow through
//! the public form handler.
//!
//! These tests validate:
//! - Registration-window filtering in the public event lookups
//! - Admin lookups seeing events regardless of window
//! - Duplicate detection and the unique-index backstop
//! - Filter precedence shared by the listing, live filter and CSV export
//! - Settings persistence round-trips
//! - A submission being stored exactly once and a resubmission rejected
//!
//! # Running These Tests
//!
//! These tests are marked as `#[ignore]` by default because they:
//! - Require a running PostgreSQL server reachable via `DATABASE_URL`
//! - Truncate the `event_config`, `event_registrations` and
//!   `module_settings` tables before each test
//!
//! Point `DATABASE_URL` at a throwaway database and run single-threaded
//! so the truncation in one test cannot race another:
//! ```bash
//! DATABASE_URL=postgres://localhost/eventreg_test \
//!     cargo test --test store_integration -- --ignored --test-threads=1
//! ```
//!
//! # Panics
//!
//! These tests use `expect()` for setup failures, which is acceptable in
//! test code.

use std::time::Duration;

use axum::extract::State;
use axum::Form;
use chrono::{NaiveDate, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use eventreg_server::config::MailConfig;
use eventreg_server::forms::registration::RegistrationFormInput;
use eventreg_server::handlers::public::submit_registration;
use eventreg_server::models::{NewEvent, NewRegistration, NotificationSettings};
use eventreg_server::state::AppState;
use eventreg_server::store::{EventStore, RegistrationFilter, RegistrationStore, SettingsStore};

/// Connect, migrate and reset the tables so every test starts from an
/// empty database.
async fn setup() -> PgPool {
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set to run these tests");

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    sqlx::query("TRUNCATE event_registrations, event_config RESTART IDENTITY CASCADE")
        .execute(&pool)
        .await
        .expect("Failed to reset event tables");
    sqlx::query("TRUNCATE module_settings")
        .execute(&pool)
        .await
        .expect("Failed to reset settings table");

    pool
}

fn date(s: &str) -> NaiveDate {
    s.parse().expect("valid test date")
}

fn event(name: &str, category: &str, event_date: &str, start: &str, end: &str) -> NewEvent {
    NewEvent {
        event_name: name.to_string(),
        event_category: category.to_string(),
        event_date: date(event_date),
        registration_start_date: date(start),
        registration_end_date: date(end),
    }
}

fn registration(full_name: &str, email: &str, event_config_id: i32) -> NewRegistration {
    NewRegistration {
        full_name: full_name.to_string(),
        email: email.to_string(),
        college_name: "State College".to_string(),
        department: "Physics".to_string(),
        event_category: "Hackathon".to_string(),
        event_config_id,
    }
}

async fn page_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Response body is not UTF-8")
}

#[tokio::test]
#[ignore]
async fn registration_window_bounds_are_inclusive() {
    let pool = setup().await;
    let events = EventStore::new(pool);

    events
        .create(&event(
            "Hack Day",
            "Hackathon",
            "2024-07-01",
            "2024-06-01",
            "2024-06-20",
        ))
        .await
        .expect("Failed to create event");

    // Both window edges accept registrations.
    for day in ["2024-06-01", "2024-06-10", "2024-06-20"] {
        let categories = events
            .available_categories(date(day))
            .await
            .expect("Failed to query categories");
        assert_eq!(categories, vec!["Hackathon".to_string()], "on {day}");
    }

    // One day outside either edge sees nothing.
    for day in ["2024-05-31", "2024-06-21"] {
        let categories = events
            .available_categories(date(day))
            .await
            .expect("Failed to query categories");
        assert!(categories.is_empty(), "on {day}: {categories:?}");
    }
}

#[tokio::test]
#[ignore]
async fn categories_are_distinct_and_sorted() {
    let pool = setup().await;
    let events = EventStore::new(pool);

    for (name, category) in [
        ("Hack Day", "Hackathon"),
        ("Hack Night", "Hackathon"),
        ("RustConf", "Conference"),
    ] {
        events
            .create(&event(name, category, "2024-07-01", "2024-06-01", "2024-06-30"))
            .await
            .expect("Failed to create event");
    }

    let categories = events
        .available_categories(date("2024-06-15"))
        .await
        .expect("Failed to query categories");
    assert_eq!(
        categories,
        vec!["Conference".to_string(), "Hackathon".to_string()]
    );
}

#[tokio::test]
#[ignore]
async fn dates_scope_to_category_and_open_window() {
    let pool = setup().await;
    let events = EventStore::new(pool);

    // Two open Hackathon dates out of order, one closed Hackathon, one
    // open Conference on yet another date.
    events
        .create(&event("B", "Hackathon", "2024-07-15", "2024-06-01", "2024-06-30"))
        .await
        .expect("Failed to create event");
    events
        .create(&event("A", "Hackathon", "2024-07-01", "2024-06-01", "2024-06-30"))
        .await
        .expect("Failed to create event");
    events
        .create(&event("Closed", "Hackathon", "2024-07-20", "2024-01-01", "2024-01-31"))
        .await
        .expect("Failed to create event");
    events
        .create(&event("Conf", "Conference", "2024-08-01", "2024-06-01", "2024-06-30"))
        .await
        .expect("Failed to create event");

    let dates = events
        .dates_by_category("Hackathon", date("2024-06-15"))
        .await
        .expect("Failed to query dates");
    assert_eq!(dates, vec![date("2024-07-01"), date("2024-07-15")]);
}

#[tokio::test]
#[ignore]
async fn names_scope_to_category_and_date() {
    let pool = setup().await;
    let events = EventStore::new(pool);

    let hack_id = events
        .create(&event("Hack Day", "Hackathon", "2024-07-01", "2024-06-01", "2024-06-30"))
        .await
        .expect("Failed to create event");
    // Same date, different category; same category, different date.
    events
        .create(&event("Conf", "Conference", "2024-07-01", "2024-06-01", "2024-06-30"))
        .await
        .expect("Failed to create event");
    events
        .create(&event("Hack Night", "Hackathon", "2024-07-02", "2024-06-01", "2024-06-30"))
        .await
        .expect("Failed to create event");

    let names = events
        .names_by_category_and_date("Hackathon", date("2024-07-01"), date("2024-06-15"))
        .await
        .expect("Failed to query names");
    assert_eq!(names, vec![(hack_id, "Hack Day".to_string())]);
}

#[tokio::test]
#[ignore]
async fn admin_lookups_ignore_registration_windows() {
    let pool = setup().await;
    let events = EventStore::new(pool);

    let closed_id = events
        .create(&event("Closed", "Hackathon", "2024-07-01", "2024-01-01", "2024-01-31"))
        .await
        .expect("Failed to create event");

    let dates = events.all_event_dates().await.expect("Failed to query dates");
    assert_eq!(dates, vec![date("2024-07-01")]);

    let names = events
        .names_by_date(date("2024-07-01"))
        .await
        .expect("Failed to query names");
    assert_eq!(names, vec![(closed_id, "Closed".to_string())]);
}

#[tokio::test]
#[ignore]
async fn duplicate_check_is_per_email_and_event() {
    let pool = setup().await;
    let events = EventStore::new(pool.clone());
    let registrations = RegistrationStore::new(pool);

    let first = events
        .create(&event("Hack Day", "Hackathon", "2024-07-01", "2024-06-01", "2024-06-30"))
        .await
        .expect("Failed to create event");
    let second = events
        .create(&event("Hack Night", "Hackathon", "2024-07-02", "2024-06-01", "2024-06-30"))
        .await
        .expect("Failed to create event");

    registrations
        .create(&registration("Jane Doe", "jane@example.com", first))
        .await
        .expect("Failed to create registration");

    assert!(registrations
        .is_duplicate("jane@example.com", first)
        .await
        .expect("Failed to check duplicate"));
    assert!(!registrations
        .is_duplicate("jane@example.com", second)
        .await
        .expect("Failed to check duplicate"));
    assert!(!registrations
        .is_duplicate("john@example.com", first)
        .await
        .expect("Failed to check duplicate"));
}

#[tokio::test]
#[ignore]
async fn unique_index_rejects_second_registration() {
    let pool = setup().await;
    let events = EventStore::new(pool.clone());
    let registrations = RegistrationStore::new(pool);

    let id = events
        .create(&event("Hack Day", "Hackathon", "2024-07-01", "2024-06-01", "2024-06-30"))
        .await
        .expect("Failed to create event");

    registrations
        .create(&registration("Jane Doe", "jane@example.com", id))
        .await
        .expect("Failed to create registration");

    // Skipping the duplicate pre-check, the index itself must refuse the
    // second row.
    let err = registrations
        .create(&registration("Jane Doe", "jane@example.com", id))
        .await
        .expect_err("Second registration with the same email must fail");
    match err {
        sqlx::Error::Database(db) => {
            assert!(db.is_unique_violation(), "unexpected database error: {db}");
        }
        other => panic!("expected a database error, got {other:?}"),
    }
}

#[tokio::test]
#[ignore]
async fn filter_precedence_selects_rows() {
    let pool = setup().await;
    let events = EventStore::new(pool.clone());
    let registrations = RegistrationStore::new(pool);

    let hack = events
        .create(&event("Hack Day", "Hackathon", "2024-07-01", "2024-06-01", "2024-06-30"))
        .await
        .expect("Failed to create event");
    let conf = events
        .create(&event("Conf", "Conference", "2024-07-01", "2024-06-01", "2024-06-30"))
        .await
        .expect("Failed to create event");
    let night = events
        .create(&event("Hack Night", "Hackathon", "2024-07-02", "2024-06-01", "2024-06-30"))
        .await
        .expect("Failed to create event");

    for (email, event_id) in [
        ("a@example.com", hack),
        ("b@example.com", hack),
        ("c@example.com", conf),
        ("d@example.com", night),
    ] {
        registrations
            .create(&registration("Someone", email, event_id))
            .await
            .expect("Failed to create registration");
    }

    // Event id alone.
    let rows = registrations
        .filtered(RegistrationFilter::new(Some(hack), None))
        .await
        .expect("Failed to filter");
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.event_config_id == hack));

    // Event id wins even when a date for a different event is also set.
    let rows = registrations
        .filtered(RegistrationFilter::new(Some(night), Some(date("2024-07-01"))))
        .await
        .expect("Failed to filter");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].event_config_id, night);

    // Date alone spans every event on that date.
    let rows = registrations
        .filtered(RegistrationFilter::new(None, Some(date("2024-07-01"))))
        .await
        .expect("Failed to filter");
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.event_date == date("2024-07-01")));

    // No filter returns everything.
    let rows = registrations
        .filtered(RegistrationFilter::default())
        .await
        .expect("Failed to filter");
    assert_eq!(rows.len(), 4);
}

#[tokio::test]
#[ignore]
async fn filtered_rows_and_count_agree() {
    let pool = setup().await;
    let events = EventStore::new(pool.clone());
    let registrations = RegistrationStore::new(pool);

    let id = events
        .create(&event("Hack Day", "Hackathon", "2024-07-01", "2024-06-01", "2024-06-30"))
        .await
        .expect("Failed to create event");

    for email in ["a@example.com", "b@example.com", "c@example.com"] {
        registrations
            .create(&registration("Someone", email, id))
            .await
            .expect("Failed to create registration");
    }

    let rows = registrations
        .filtered(RegistrationFilter::new(Some(id), None))
        .await
        .expect("Failed to filter");
    let count = registrations
        .count_by_event(id)
        .await
        .expect("Failed to count");
    assert_eq!(rows.len() as i64, count);
    assert_eq!(count, 3);
}

#[tokio::test]
#[ignore]
async fn listing_rows_carry_event_fields_newest_first() {
    let pool = setup().await;
    let events = EventStore::new(pool.clone());
    let registrations = RegistrationStore::new(pool);

    let id = events
        .create(&event("Hack Day", "Hackathon", "2024-07-01", "2024-06-01", "2024-06-30"))
        .await
        .expect("Failed to create event");

    registrations
        .create(&registration("First", "first@example.com", id))
        .await
        .expect("Failed to create registration");
    // Keep the created timestamps apart so the ordering is unambiguous.
    tokio::time::sleep(Duration::from_millis(20)).await;
    registrations
        .create(&registration("Second", "second@example.com", id))
        .await
        .expect("Failed to create registration");

    let rows = registrations.all().await.expect("Failed to list");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].full_name, "Second");
    assert_eq!(rows[1].full_name, "First");
    for row in &rows {
        assert_eq!(row.event_name, "Hack Day");
        assert_eq!(row.event_date, date("2024-07-01"));
    }
}

#[tokio::test]
#[ignore]
async fn submit_flow_stores_once_and_rejects_resubmission() {
    let pool = setup().await;
    let events = EventStore::new(pool.clone());
    let registrations = RegistrationStore::new(pool.clone());
    let state = AppState::new(pool, MailConfig::default());

    // The handler reads the real clock, so the window must contain it.
    let today = Utc::now().date_naive();
    let id = events
        .create(&NewEvent {
            event_name: "Hack Day".to_string(),
            event_category: "Hackathon".to_string(),
            event_date: today + chrono::Duration::days(30),
            registration_start_date: today - chrono::Duration::days(1),
            registration_end_date: today + chrono::Duration::days(1),
        })
        .await
        .expect("Failed to create event");

    let input = RegistrationFormInput {
        full_name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        college_name: "State College".to_string(),
        department: "Physics".to_string(),
        event_category: "Hackathon".to_string(),
        event_date: (today + chrono::Duration::days(30)).to_string(),
        event_name: id.to_string(),
    };

    let response = submit_registration(State(state.clone()), Form(input.clone()))
        .await
        .expect("Submit must render a page");
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    let body = page_text(response).await;
    assert!(body.contains("Thank you for registering!"), "{body}");
    assert_eq!(
        registrations
            .count_by_event(id)
            .await
            .expect("Failed to count"),
        1
    );

    // Same email, same event: the duplicate message and no second row.
    let response = submit_registration(State(state), Form(input))
        .await
        .expect("Resubmit must render a page");
    let body = page_text(response).await;
    assert!(
        body.contains("You have already registered for this event with this email address."),
        "{body}"
    );
    assert_eq!(
        registrations
            .count_by_event(id)
            .await
            .expect("Failed to count"),
        1
    );
}

#[tokio::test]
#[ignore]
async fn settings_default_when_unset() {
    let pool = setup().await;
    let settings = SettingsStore::new(pool);

    let loaded = settings.load().await.expect("Failed to load settings");
    assert_eq!(loaded.admin_email, "");
    assert!(!loaded.enable_admin_notifications);
}

#[tokio::test]
#[ignore]
async fn settings_roundtrip_and_overwrite() {
    let pool = setup().await;
    let settings = SettingsStore::new(pool);

    settings
        .save(&NotificationSettings {
            admin_email: "admin@example.com".to_string(),
            enable_admin_notifications: true,
        })
        .await
        .expect("Failed to save settings");

    let loaded = settings.load().await.expect("Failed to load settings");
    assert_eq!(loaded.admin_email, "admin@example.com");
    assert!(loaded.enable_admin_notifications);

    // A second save overwrites both keys in place.
    settings
        .save(&NotificationSettings {
            admin_email: "ops@example.com".to_string(),
            enable_admin_notifications: false,
        })
        .await
        .expect("Failed to save settings");

    let loaded = settings.load().await.expect("Failed to load settings");
    assert_eq!(loaded.admin_email, "ops@example.com");
    assert!(!loaded.enable_admin_notifications);
}
