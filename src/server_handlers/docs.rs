use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::api_json::{AllocationInput, GroupRow, RoomRow};

pub async fn help_handler() -> impl Responder {
    // Example body to show the expected format for POST /allocate. The same
    // columns apply to the CSV files accepted by POST /upload.
    let example = AllocationInput {
        groups: vec![
            GroupRow {
                group_id: "G1".to_string(),
                members: 5,
                gender: Some("Boys".to_string()),
            },
            GroupRow {
                group_id: "G3".to_string(),
                members: 6,
                gender: Some("Mixed".to_string()),
            },
        ],
        rooms: vec![
            RoomRow {
                hostel_name: "H1".to_string(),
                room_number: "101".to_string(),
                capacity: 3,
                gender: "Boys".to_string(),
            },
            RoomRow {
                hostel_name: "H2".to_string(),
                room_number: "201".to_string(),
                capacity: 4,
                gender: "Girls".to_string(),
            },
        ],
    };

    let help = json!({
        "description": "API for gender-segregated hostel room allocation. POST /upload takes a multipart form with two CSV files (groupFile, hostelFile) and returns the allocation records. POST /allocate takes the same data as a JSON body (see 'post_example').",
        "post_example": example,
        "upload_parts": {
            "groupFile": "CSV with columns: Group ID, Members, Gender",
            "hostelFile": "CSV with columns: Hostel Name, Room Number, Capacity, Gender"
        },
        "note": "A group whose Gender is not 'Boys' or 'Girls' is treated as mixed and split in two (floor half to Boys, remainder to Girls), both halves keeping the Group ID. Rooms must carry a fixed Gender.",
        "note_shortfall": "When capacity runs out the remaining members are reported under 'unallocated'; no error is raised.",
        "analytics": ["/analytics/recent?limit=10", "/analytics/summary"]
    });

    HttpResponse::Ok().json(help)
}
