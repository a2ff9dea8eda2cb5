// --- Hostel room allocation service - main entry point ---

use roomshift::run_server;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenv::dotenv();
    println!("=== Roomshift - hostel room allocation (API) ===");
    let bind = std::env::var("ROOMSHIFT_BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    println!("Starting server at http://{}", bind);
    run_server(&bind).await
}
