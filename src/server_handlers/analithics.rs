use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

/// Query param: ?limit=10
pub async fn analytics_recent_handler(query: web::Query<std::collections::HashMap<String, String>>) -> impl Responder {
    let limit = query.get("limit").and_then(|s| s.parse::<usize>().ok()).unwrap_or(10) as i64;
    match crate::analithics::recent_requests(limit) {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => {
            eprintln!("error fetching recent requests: {}", e);
            HttpResponse::InternalServerError().json(json!({"error": "failed to fetch recent requests"}))
        }
    }
}

pub async fn analytics_summary_handler() -> impl Responder {
    match crate::analithics::usage_summary() {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(e) => {
            eprintln!("error fetching usage summary: {}", e);
            HttpResponse::InternalServerError().json(json!({"error": "failed to fetch usage summary"}))
        }
    }
}
