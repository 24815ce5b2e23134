//! Core library surface for the fleet console: a menu-driven CRUD demo over a
//! local SQLite database of drivers, cars and trips.
pub mod config;
pub mod console;
pub mod db;
pub mod models;
pub mod plate;
pub mod resources;

/// Convenience re-exports for the startup path in `main.rs`.
pub use config::Config;
pub use db::{create_schema, open_connection, seed_if_empty};

pub use models::{Car, ChassisBounds, Driver};

/// The menu loop and its context.
pub use console::{print_banner, run_app, App};
