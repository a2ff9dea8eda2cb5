use actix_cors::Cors;
use actix_web::{web, App, HttpServer};

use crate::server_handlers::{
    allocate_handler, analytics_recent_handler, analytics_summary_handler, help_handler,
    upload_handler,
};

pub async fn run_server(bind_addr: &str) -> std::io::Result<()> {
    // The request log is best-effort: a missing DB must not stop the server.
    if let Err(e) = crate::analithics::init_db() {
        eprintln!("WARN: failed to initialize analytics DB: {}", e);
    }

    HttpServer::new(|| {
        // The backend is consumed by a browser frontend on another origin.
        App::new()
            .wrap(Cors::permissive())
            .route("/upload", web::post().to(upload_handler))
            .route("/allocate", web::post().to(allocate_handler))
            .route("/help", web::get().to(help_handler))
            .route("/analytics/recent", web::get().to(analytics_recent_handler))
            .route("/analytics/summary", web::get().to(analytics_summary_handler))
    })
    .bind(bind_addr)?
    .run()
    .await
}
