// Core data structures shared by the ingestion boundary and the allocator.

use serde::{Deserialize, Serialize};

/// Gender designation of a room or a normalized group. Housing is strictly
/// segregated: there is no third category at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Boys,
    Girls,
}

impl Gender {
    /// Map a raw cell value onto a fixed category. Anything that is not a
    /// case-insensitive match for "Boys"/"Girls" comes back as `None`, which
    /// for a group means "mixed, must be split".
    pub fn from_raw(s: &str) -> Option<Gender> {
        match s.trim().to_lowercase().as_str() {
            "boys" => Some(Gender::Boys),
            "girls" => Some(Gender::Girls),
            _ => None,
        }
    }
}

/// A group row as produced by the ingestion boundary. `gender: None` marks
/// a mixed group that the normalizer will split in two.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawGroup {
    pub group_id: String,
    pub members: u32,
    pub gender: Option<Gender>,
}

/// A normalized group: exactly one gender, ready for allocation. A split
/// group yields two of these sharing the parent `group_id`.
#[derive(Debug, Clone, Serialize)]
pub struct Group {
    pub group_id: String,
    pub members: u32,
    pub gender: Gender,
}

/// One unit of housing capacity. `capacity` is the inventory value; the
/// allocator copies it into its own pool before consuming beds, so the
/// inventory instance itself is never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub hostel_name: String,
    pub room_number: String,
    pub capacity: u32,
    pub gender: Gender,
}

/// One placement event: some members of one group into one room. Field
/// names follow the external column contract of the input tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    #[serde(rename = "Group ID")]
    pub group_id: String,
    #[serde(rename = "Hostel Name")]
    pub hostel_name: String,
    #[serde(rename = "Room Number")]
    pub room_number: String,
    #[serde(rename = "Members Allocated")]
    pub members_allocated: u32,
}

/// Output of the normalizer: one ordered group list per gender, input
/// order preserved within each list.
#[derive(Debug, Clone, Default)]
pub struct GroupsByGender {
    pub boys: Vec<Group>,
    pub girls: Vec<Group>,
}

impl GroupsByGender {
    pub fn push(&mut self, group: Group) {
        match group.gender {
            Gender::Boys => self.boys.push(group),
            Gender::Girls => self.girls.push(group),
        }
    }

    pub fn for_gender(&self, gender: Gender) -> &[Group] {
        match gender {
            Gender::Boys => &self.boys,
            Gender::Girls => &self.girls,
        }
    }
}
