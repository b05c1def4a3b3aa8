pub mod models;
pub mod test_utils;

use sea_orm::{Database, DatabaseConnection};
use std::path::Path;
use util::config;

/// Connects to the database named by `DATABASE_URL`.
///
/// A full DSN (`postgres://…`, `sqlite:…`) is used as-is; anything else is
/// treated as a SQLite file path.
pub async fn connect() -> DatabaseConnection {
    let path_or_url = config::database_url();
    let url = if path_or_url.starts_with("sqlite:") || path_or_url.starts_with("postgres://") {
        path_or_url
    } else {
        // SQLite won't create intermediate directories on its own.
        if let Some(parent) = Path::new(&path_or_url).parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        format!("sqlite://{path_or_url}")
    };

    Database::connect(&url)
        .await
        .expect("Failed to connect to database")
}
