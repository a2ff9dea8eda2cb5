use crate::models::{Gender, RawGroup, Room};
use serde::{Deserialize, Serialize};
use std::error::Error;

/// Request body for `POST /allocate`
///
/// # Expected JSON shape:
/// ```json
/// {
///   "groups": [
///     { "Group ID": "G1", "Members": 5, "Gender": "Boys" },
///     { "Group ID": "G3", "Members": 6, "Gender": "Mixed" }
///   ],
///   "rooms": [
///     { "Hostel Name": "H1", "Room Number": "101", "Capacity": 3, "Gender": "Boys" },
///     { "Hostel Name": "H2", "Room Number": "201", "Capacity": 4, "Gender": "Girls" }
///   ]
/// }
/// ```
///
/// # Fields:
/// - `groups[].Gender`: "Boys" or "Girls" places the whole group in that
///   category; anything else (or a missing field) marks the group as mixed
///   and it gets split in two before allocation.
/// - `rooms[].Gender`: must be "Boys" or "Girls"; rooms are never mixed.
/// - `rooms[].Room Number` is a string so labels like "101A" survive.
#[derive(Debug, Serialize, Deserialize)]
pub struct AllocationInput {
    pub groups: Vec<GroupRow>,
    pub rooms: Vec<RoomRow>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GroupRow {
    #[serde(rename = "Group ID")]
    pub group_id: String,
    #[serde(rename = "Members")]
    pub members: u32,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RoomRow {
    #[serde(rename = "Hostel Name")]
    pub hostel_name: String,
    #[serde(rename = "Room Number")]
    pub room_number: String,
    #[serde(rename = "Capacity")]
    pub capacity: u32,
    #[serde(rename = "Gender")]
    pub gender: String,
}

pub fn parse_json_input(json_str: &str) -> Result<AllocationInput, serde_json::Error> {
    serde_json::from_str::<AllocationInput>(json_str)
}

impl AllocationInput {
    /// Convert the wire rows into the typed records the pipeline consumes.
    /// Group gender falls through to `None` (mixed) when unrecognized; a
    /// room with an unrecognized gender is a contract violation and fails
    /// the whole request.
    pub fn into_records(self) -> Result<(Vec<RawGroup>, Vec<Room>), Box<dyn Error>> {
        let groups: Vec<RawGroup> = self
            .groups
            .into_iter()
            .map(|g| RawGroup {
                group_id: g.group_id,
                members: g.members,
                gender: g.gender.as_deref().and_then(Gender::from_raw),
            })
            .collect();

        let mut rooms: Vec<Room> = Vec::new();
        for (i, r) in self.rooms.into_iter().enumerate() {
            let gender = Gender::from_raw(&r.gender)
                .ok_or_else(|| format!("rooms[{}]: unknown Gender '{}'", i, r.gender))?;
            rooms.push(Room {
                hostel_name: r.hostel_name,
                room_number: r.room_number,
                capacity: r.capacity,
                gender,
            });
        }

        Ok((groups, rooms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_full_body() {
        let json_data = r#"
        {
            "groups": [
                { "Group ID": "G1", "Members": 5, "Gender": "Boys" },
                { "Group ID": "G3", "Members": 6, "Gender": "Mixed" }
            ],
            "rooms": [
                { "Hostel Name": "H1", "Room Number": "101", "Capacity": 3, "Gender": "Boys" },
                { "Hostel Name": "H2", "Room Number": "201", "Capacity": 4, "Gender": "Girls" }
            ]
        }
        "#;

        let input = parse_json_input(json_data).expect("body should parse");
        assert_eq!(input.groups.len(), 2);
        assert_eq!(input.groups[0].group_id, "G1");
        assert_eq!(input.groups[0].members, 5);
        assert_eq!(input.rooms[1].room_number, "201");
        assert_eq!(input.rooms[1].capacity, 4);

        let (raw_groups, rooms) = input.into_records().expect("records should convert");
        assert_eq!(raw_groups[0].gender, Some(Gender::Boys));
        // "Mixed" is not a fixed category, so the group must be split later
        assert_eq!(raw_groups[1].gender, None);
        assert_eq!(rooms[0].gender, Gender::Boys);
        assert_eq!(rooms[1].gender, Gender::Girls);
    }

    #[test]
    fn test_parse_json_gender_field_optional() {
        let json_data = r#"
        {
            "groups": [ { "Group ID": "G7", "Members": 3 } ],
            "rooms": []
        }
        "#;

        let input = parse_json_input(json_data).expect("body should parse without Gender");
        assert!(input.groups[0].gender.is_none());

        let (raw_groups, _rooms) = input.into_records().unwrap();
        assert_eq!(raw_groups[0].gender, None);
    }

    #[test]
    fn test_room_with_unknown_gender_is_rejected() {
        let json_data = r#"
        {
            "groups": [],
            "rooms": [ { "Hostel Name": "H1", "Room Number": "101", "Capacity": 3, "Gender": "Anyone" } ]
        }
        "#;

        let input = parse_json_input(json_data).expect("body should parse");
        let err = input.into_records().expect_err("room gender must be fixed");
        assert!(err.to_string().contains("unknown Gender"));
    }
}
