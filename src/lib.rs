pub mod config;
pub mod forms;
pub mod handlers;
pub mod mailer;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod utils;
pub mod views;
