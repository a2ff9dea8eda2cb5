use crate::analithics::db::analytics_db_path;
use rusqlite::Connection;
use serde::Serialize;
use std::error::Error;

#[derive(Debug, Serialize)]
pub struct RequestRow {
    pub id: i64,
    pub ts: String,
    pub endpoint: String,
    pub duration_ms: i64,
    pub client_ip: Option<String>,
    pub groups_count: i64,
    pub rooms_count: i64,
    pub allocations_count: i64,
    pub unallocated_members: i64,
}

/// Most recent allocation requests, newest first.
pub fn recent_requests(limit: i64) -> Result<Vec<RequestRow>, Box<dyn Error>> {
    let conn = Connection::open(analytics_db_path())?;
    let mut stmt = conn.prepare(
        "SELECT id, ts, endpoint, duration_ms, client_ip,
                groups_count, rooms_count, allocations_count, unallocated_members
         FROM requests ORDER BY id DESC LIMIT ?1",
    )?;

    let rows = stmt.query_map([limit], |row| {
        Ok(RequestRow {
            id: row.get(0)?,
            ts: row.get(1)?,
            endpoint: row.get(2)?,
            duration_ms: row.get(3)?,
            client_ip: row.get(4)?,
            groups_count: row.get(5)?,
            rooms_count: row.get(6)?,
            allocations_count: row.get(7)?,
            unallocated_members: row.get(8)?,
        })
    })?;

    let mut out: Vec<RequestRow> = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

#[derive(Debug, Serialize)]
pub struct UsageSummary {
    pub requests: i64,
    pub allocations: i64,
    pub unallocated_members: i64,
    pub avg_duration_ms: f64,
}

/// Aggregate totals over the whole request log.
pub fn usage_summary() -> Result<UsageSummary, Box<dyn Error>> {
    let conn = Connection::open(analytics_db_path())?;
    let summary = conn.query_row(
        "SELECT COUNT(*),
                COALESCE(SUM(allocations_count), 0),
                COALESCE(SUM(unallocated_members), 0),
                COALESCE(AVG(duration_ms), 0.0)
         FROM requests",
        [],
        |row| {
            Ok(UsageSummary {
                requests: row.get(0)?,
                allocations: row.get(1)?,
                unallocated_members: row.get(2)?,
                avg_duration_ms: row.get(3)?,
            })
        },
    )?;
    Ok(summary)
}
