use std::{env, fs, path::Path};

mod runner;

/// Resolves `DATABASE_URL` into a connectable URL.
///
/// Accepts a full DSN (`postgres://…`, `sqlite:…`, `mysql://…`) as-is, or a
/// bare file path which is treated as a SQLite database (created on demand).
fn resolve_url(raw: &str) -> String {
    if raw.starts_with("sqlite:") || raw.starts_with("postgres://") || raw.starts_with("mysql://") {
        raw.to_string()
    } else {
        format!("sqlite://{raw}?mode=rwc")
    }
}

/// Returns the file path behind `DATABASE_URL` when it points at SQLite,
/// `None` for server-backed databases (nothing to delete for those).
fn sqlite_file_path(raw: &str) -> Option<String> {
    if raw.starts_with("postgres://") || raw.starts_with("mysql://") {
        None
    } else if let Some(stripped) = raw.strip_prefix("sqlite://") {
        Some(stripped.split('?').next().unwrap_or(stripped).to_string())
    } else if let Some(stripped) = raw.strip_prefix("sqlite:") {
        Some(stripped.split('?').next().unwrap_or(stripped).to_string())
    } else {
        Some(raw.to_string())
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let raw = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let url = resolve_url(&raw);
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("clean") => {
            remove_db_file(&raw);
        }
        Some("fresh") => {
            remove_db_file(&raw);
            create_db_dir(&raw);
            runner::run_all_migrations(&url).await;
        }
        _ => {
            create_db_dir(&raw);
            runner::run_all_migrations(&url).await;
        }
    }
}

fn remove_db_file(raw: &str) {
    let Some(path) = sqlite_file_path(raw) else {
        println!("DATABASE_URL is not a SQLite file; nothing to clean");
        return;
    };

    let db_path = Path::new(&path);
    if db_path.exists() {
        fs::remove_file(db_path).expect("Failed to delete DB file");
        println!("Deleted DB: {}", db_path.display());
    } else {
        println!("DB file does not exist: {}", db_path.display());
    }
}

fn create_db_dir(raw: &str) {
    if let Some(path) = sqlite_file_path(raw) {
        if let Some(parent) = Path::new(&path).parent() {
            fs::create_dir_all(parent).expect("Failed to create DB directory");
        }
    }
}
