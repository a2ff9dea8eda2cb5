// CSV ingestion boundary. Maps the external column contract onto the typed
// records in `models`. Malformed rows are rejected here, with the row
// number in the error, so the allocator can assume well-typed input.

use crate::models::{Gender, RawGroup, Room};
use std::error::Error;
use std::io::Read;

/// Normalize a header cell: lowercase, whitespace stripped. Lets the
/// uploaded files spell columns as "Group ID", "group id", "GROUPID", etc.
pub fn normalize_header(s: &str) -> String {
    s.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect()
}

fn header_index(headers: &csv::StringRecord, wanted: &str, label: &str) -> Result<usize, Box<dyn Error>> {
    headers
        .iter()
        .position(|h| normalize_header(h) == wanted)
        .ok_or_else(|| format!("missing required column '{}'", label).into())
}

/// Read the groups table. Expected columns: `Group ID`, `Members`, `Gender`.
/// A gender cell that is not a fixed category (or is empty) yields
/// `gender: None`, i.e. a mixed group for the normalizer to split.
pub fn read_groups_csv<R: Read>(reader: R) -> Result<Vec<RawGroup>, Box<dyn Error>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = rdr.headers()?.clone();
    let id_col = header_index(&headers, "groupid", "Group ID")?;
    let members_col = header_index(&headers, "members", "Members")?;
    let gender_col = header_index(&headers, "gender", "Gender")?;

    let mut groups: Vec<RawGroup> = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let row = i + 2; // 1-based, header is row 1

        let group_id = record.get(id_col).unwrap_or("").to_string();
        if group_id.is_empty() {
            return Err(format!("groups row {}: empty Group ID", row).into());
        }

        let members_cell = record.get(members_col).unwrap_or("");
        let members: u32 = members_cell
            .parse()
            .map_err(|_| format!("groups row {}: invalid Members value '{}'", row, members_cell))?;

        let gender = Gender::from_raw(record.get(gender_col).unwrap_or(""));
        groups.push(RawGroup { group_id, members, gender });
    }

    Ok(groups)
}

/// Read the rooms table. Expected columns: `Hostel Name`, `Room Number`,
/// `Capacity`, `Gender`. Rooms are never mixed, so an unknown gender cell
/// rejects the row instead of falling back.
pub fn read_rooms_csv<R: Read>(reader: R) -> Result<Vec<Room>, Box<dyn Error>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = rdr.headers()?.clone();
    let hostel_col = header_index(&headers, "hostelname", "Hostel Name")?;
    let number_col = header_index(&headers, "roomnumber", "Room Number")?;
    let capacity_col = header_index(&headers, "capacity", "Capacity")?;
    let gender_col = header_index(&headers, "gender", "Gender")?;

    let mut rooms: Vec<Room> = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let row = i + 2;

        let hostel_name = record.get(hostel_col).unwrap_or("").to_string();
        if hostel_name.is_empty() {
            return Err(format!("rooms row {}: empty Hostel Name", row).into());
        }
        let room_number = record.get(number_col).unwrap_or("").to_string();
        if room_number.is_empty() {
            return Err(format!("rooms row {}: empty Room Number", row).into());
        }

        let capacity_cell = record.get(capacity_col).unwrap_or("");
        let capacity: u32 = capacity_cell
            .parse()
            .map_err(|_| format!("rooms row {}: invalid Capacity value '{}'", row, capacity_cell))?;

        let gender_cell = record.get(gender_col).unwrap_or("");
        let gender = Gender::from_raw(gender_cell)
            .ok_or_else(|| format!("rooms row {}: unknown Gender '{}'", row, gender_cell))?;

        rooms.push(Room { hostel_name, room_number, capacity, gender });
    }

    Ok(rooms)
}
