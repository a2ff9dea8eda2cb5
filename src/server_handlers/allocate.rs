use crate::algorithm::{allocate_rooms, split_groups_by_gender, unallocated_by_group};
use crate::models::{Allocation, RawGroup, Room};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
pub struct AllocationResponse {
    pub status: &'static str,
    pub allocations_count: usize,
    pub allocations: Vec<Allocation>,
    /// Groups whose members could not all be placed, with the shortfall.
    /// The allocator itself stays silent about these; this summary is
    /// computed afterwards so clients don't have to diff the records
    /// against their input.
    pub unallocated: Vec<UnallocatedEntry>,
}

#[derive(Serialize)]
pub struct UnallocatedEntry {
    #[serde(rename = "Group ID")]
    pub group_id: String,
    #[serde(rename = "Members Unallocated")]
    pub members: u32,
}

/// Run the full pipeline (normalize, then allocate) over typed records.
pub fn run_allocation(raw_groups: Vec<RawGroup>, rooms: Vec<Room>) -> AllocationResponse {
    let partitioned = split_groups_by_gender(&raw_groups);
    let allocations = allocate_rooms(&partitioned, &rooms);
    let unallocated: Vec<UnallocatedEntry> = unallocated_by_group(&partitioned, &allocations)
        .into_iter()
        .map(|(group_id, members)| UnallocatedEntry { group_id, members })
        .collect();

    AllocationResponse {
        status: "ok",
        allocations_count: allocations.len(),
        allocations,
        unallocated,
    }
}

/// Serialize the response, fire the analytics row from a blocking task
/// (best-effort, never fails the request) and answer 200.
pub(crate) fn respond_and_log(
    endpoint: &'static str,
    client_ip: String,
    start: std::time::Instant,
    groups_count: usize,
    rooms_count: usize,
    resp: AllocationResponse,
) -> HttpResponse {
    let duration_ms = start.elapsed().as_millis() as i64;
    let allocations_count = resp.allocations.len() as i64;
    let unallocated_members: i64 = resp.unallocated.iter().map(|u| u.members as i64).sum();

    let response_json = match serde_json::to_string(&resp) {
        Ok(s) => s,
        Err(_) => String::from("{}"),
    };
    let resp_clone = response_json.clone();
    tokio::task::spawn_blocking(move || {
        let _ = crate::analithics::log_request(
            endpoint,
            duration_ms,
            &client_ip,
            groups_count as i64,
            rooms_count as i64,
            allocations_count,
            unallocated_members,
            &resp_clone,
        );
    });

    HttpResponse::Ok().json(resp)
}

/// POST /allocate
/// JSON twin of /upload: takes the two record lists in the body instead of
/// multipart CSV files. See `api_json::AllocationInput` for the shape.
pub async fn allocate_handler(req: HttpRequest, body: web::Json<serde_json::Value>) -> impl Responder {
    let body_value = body.into_inner();
    let json_str = match serde_json::to_string(&body_value) {
        Ok(s) => s,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("invalid JSON body: {}", e)})),
    };

    let input = match crate::api_json::parse_json_input(&json_str) {
        Ok(i) => i,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("failed to parse input: {}", e)})),
    };

    let (raw_groups, rooms) = match input.into_records() {
        Ok(t) => t,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("{}", e)})),
    };

    let client_ip = req.connection_info().realip_remote_addr().unwrap_or("unknown").to_string();
    let start = std::time::Instant::now();
    let (groups_count, rooms_count) = (raw_groups.len(), rooms.len());

    let resp = run_allocation(raw_groups, rooms);
    respond_and_log("/allocate", client_ip, start, groups_count, rooms_count, resp)
}
