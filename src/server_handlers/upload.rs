use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Responder};
use futures_util::stream::StreamExt;
use serde_json::json;
use std::sync::{Arc, OnceLock};
use tokio::sync::Semaphore;

use crate::server_handlers::allocate::{respond_and_log, run_allocation};

/// POST /upload
/// Multipart form with two CSV parts: `groupFile` (Group ID, Members,
/// Gender) and `hostelFile` (Hostel Name, Room Number, Capacity, Gender).
/// Parsing and allocation run on a blocking task behind a CPU-sized
/// semaphore so large uploads don't starve the worker threads.
pub async fn upload_handler(req: HttpRequest, mut payload: Multipart) -> impl Responder {
    let mut group_bytes: Option<Vec<u8>> = None;
    let mut hostel_bytes: Option<Vec<u8>> = None;

    while let Some(field_res) = payload.next().await {
        let mut field = match field_res {
            Ok(f) => f,
            Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("multipart field error: {}", e)})),
        };

        let name = field
            .content_disposition()
            .get_name()
            .unwrap_or("")
            .to_string();

        let mut buf: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            match chunk {
                Ok(bytes) => buf.extend_from_slice(&bytes),
                Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("upload stream error: {}", e)})),
            }
        }

        match name.as_str() {
            "groupFile" => group_bytes = Some(buf),
            "hostelFile" => hostel_bytes = Some(buf),
            _ => { /* unknown parts are ignored */ }
        }
    }

    let group_bytes = match group_bytes {
        Some(b) => b,
        None => return HttpResponse::BadRequest().json(json!({"error": "missing groupFile part"})),
    };
    let hostel_bytes = match hostel_bytes {
        Some(b) => b,
        None => return HttpResponse::BadRequest().json(json!({"error": "missing hostelFile part"})),
    };

    let client_ip = req.connection_info().realip_remote_addr().unwrap_or("unknown").to_string();
    let start = std::time::Instant::now();

    static GLOBAL_SEM: OnceLock<Arc<Semaphore>> = OnceLock::new();
    let sem = GLOBAL_SEM
        .get_or_init(|| {
            let procs = num_cpus::get();
            Arc::new(Semaphore::new(std::cmp::max(1, procs)))
        })
        .clone();

    let permit = match sem.acquire_owned().await {
        Ok(p) => p,
        Err(_) => return HttpResponse::InternalServerError().json(json!({"error": "failed to acquire semaphore"})),
    };

    let blocking_handle = tokio::task::spawn_blocking(move || {
        let _permit = permit;
        let raw_groups = crate::csvdata::read_groups_csv(group_bytes.as_slice())
            .map_err(|e| format!("failed to parse group file: {}", e))?;
        let rooms = crate::csvdata::read_rooms_csv(hostel_bytes.as_slice())
            .map_err(|e| format!("failed to parse hostel file: {}", e))?;
        let (groups_count, rooms_count) = (raw_groups.len(), rooms.len());
        Ok::<_, String>((groups_count, rooms_count, run_allocation(raw_groups, rooms)))
    });

    let blocking_result = match blocking_handle.await {
        Ok(res) => res,
        Err(e) => return HttpResponse::InternalServerError().json(json!({"error": format!("task join error: {}", e)})),
    };

    let (groups_count, rooms_count, resp) = match blocking_result {
        Ok(v) => v,
        Err(err_msg) => return HttpResponse::BadRequest().json(json!({"error": err_msg})),
    };

    respond_and_log("/upload", client_ip, start, groups_count, rooms_count, resp)
}
