use crate::analithics::db::analytics_db_path;
use chrono::Utc;
use rusqlite::{params, Connection};
use std::error::Error;

/// Insert one row per allocation request into the request-log DB. Opens a
/// short-lived connection; callers fire this from a blocking task and
/// ignore the result (logging must never fail a request).
pub fn log_request(
    endpoint: &str,
    duration_ms: i64,
    client_ip: &str,
    groups_count: i64,
    rooms_count: i64,
    allocations_count: i64,
    unallocated_members: i64,
    response_json: &str,
) -> Result<(), Box<dyn Error>> {
    let db_path = analytics_db_path();
    let conn = Connection::open(db_path)?;
    let ts = Utc::now().to_rfc3339();

    conn.execute(
        "INSERT INTO requests (
            ts, endpoint, duration_ms, client_ip,
            groups_count, rooms_count, allocations_count, unallocated_members,
            response_json
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            ts,
            endpoint,
            duration_ms,
            client_ip,
            groups_count,
            rooms_count,
            allocations_count,
            unallocated_members,
            response_json,
        ],
    )?;
    Ok(())
}
