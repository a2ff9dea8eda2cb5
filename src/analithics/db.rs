use rusqlite::Connection;
use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

// load .env at first use if present
fn load_dotenv() {
    let _ = dotenv::dotenv();
}

/// Return the path to the request-log DB. Exposed so other submodules can
/// open short-lived connections. Honors the ANALITHICS_DB_PATH env var.
pub fn analytics_db_path() -> PathBuf {
    load_dotenv();
    match env::var("ANALITHICS_DB_PATH") {
        Ok(p) => PathBuf::from(p),
        Err(_) => PathBuf::from("analithics/analytics.db"),
    }
}

/// Initialize the request-log DB (create dir + sqlite file + table).
pub fn init_db() -> Result<(), Box<dyn Error>> {
    let db_path = analytics_db_path();
    if let Some(dir) = db_path.parent() {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }

    let conn = Connection::open(db_path)?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS requests (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            ts TEXT NOT NULL,
            endpoint TEXT NOT NULL,
            duration_ms INTEGER NOT NULL,
            client_ip TEXT,
            groups_count INTEGER NOT NULL,
            rooms_count INTEGER NOT NULL,
            allocations_count INTEGER NOT NULL,
            unallocated_members INTEGER NOT NULL,
            response_json TEXT
        )",
        [],
    )?;
    Ok(())
}
