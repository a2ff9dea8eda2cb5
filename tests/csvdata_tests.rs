use roomshift::csvdata::{normalize_header, read_groups_csv, read_rooms_csv};
use roomshift::models::Gender;

#[test]
fn test_normalize_header() {
    assert_eq!(normalize_header("Group ID"), "groupid");
    assert_eq!(normalize_header("  ROOM  NUMBER "), "roomnumber");
    assert_eq!(normalize_header("capacity"), "capacity");
}

#[test]
fn test_read_groups_csv() {
    let data = "\
Group ID,Members,Gender
G1,5,Boys
G2,10,Girls
G3,6,Mixed
G4,3,
";
    let groups = read_groups_csv(data.as_bytes()).expect("groups CSV should parse");

    assert_eq!(groups.len(), 4);
    assert_eq!(groups[0].group_id, "G1");
    assert_eq!(groups[0].members, 5);
    assert_eq!(groups[0].gender, Some(Gender::Boys));
    assert_eq!(groups[1].gender, Some(Gender::Girls));
    // unknown and empty gender cells both mean "mixed, split later"
    assert_eq!(groups[2].gender, None);
    assert_eq!(groups[3].gender, None);
}

#[test]
fn test_groups_header_spelling_is_flexible() {
    let data = "\
group id,MEMBERS,gender
G1,2,girls
";
    let groups = read_groups_csv(data.as_bytes()).expect("case/spacing should not matter");
    assert_eq!(groups[0].group_id, "G1");
    assert_eq!(groups[0].gender, Some(Gender::Girls));
}

#[test]
fn test_groups_missing_column_is_rejected() {
    let data = "\
Group ID,Gender
G1,Boys
";
    let err = read_groups_csv(data.as_bytes()).expect_err("Members column is required");
    assert!(err.to_string().contains("Members"));
}

#[test]
fn test_groups_bad_members_names_the_row() {
    let data = "\
Group ID,Members,Gender
G1,5,Boys
G2,lots,Girls
";
    let err = read_groups_csv(data.as_bytes()).expect_err("non-numeric Members must fail");
    let msg = err.to_string();
    assert!(msg.contains("row 3"), "got: {}", msg);
    assert!(msg.contains("lots"), "got: {}", msg);
}

#[test]
fn test_read_rooms_csv() {
    let data = "\
Hostel Name,Room Number,Capacity,Gender
H1,101,3,Boys
H1,102,4,Boys
H2,201,0,Girls
";
    let rooms = read_rooms_csv(data.as_bytes()).expect("rooms CSV should parse");

    assert_eq!(rooms.len(), 3);
    assert_eq!(rooms[0].hostel_name, "H1");
    assert_eq!(rooms[0].room_number, "101");
    assert_eq!(rooms[0].capacity, 3);
    assert_eq!(rooms[0].gender, Gender::Boys);
    // zero capacity is valid inventory
    assert_eq!(rooms[2].capacity, 0);
    assert_eq!(rooms[2].gender, Gender::Girls);
}

#[test]
fn test_rooms_order_is_preserved() {
    // Allocation is order-sensitive, so ingestion must not reorder rows.
    let data = "\
Hostel Name,Room Number,Capacity,Gender
H9,3,1,Boys
H1,1,1,Boys
H5,2,1,Boys
";
    let rooms = read_rooms_csv(data.as_bytes()).unwrap();
    let names: Vec<&str> = rooms.iter().map(|r| r.hostel_name.as_str()).collect();
    assert_eq!(names, vec!["H9", "H1", "H5"]);
}

#[test]
fn test_rooms_unknown_gender_is_rejected() {
    let data = "\
Hostel Name,Room Number,Capacity,Gender
H1,101,3,Anyone
";
    let err = read_rooms_csv(data.as_bytes()).expect_err("rooms are never mixed");
    let msg = err.to_string();
    assert!(msg.contains("row 2"), "got: {}", msg);
    assert!(msg.contains("Anyone"), "got: {}", msg);
}

#[test]
fn test_rooms_negative_capacity_is_rejected() {
    let data = "\
Hostel Name,Room Number,Capacity,Gender
H1,101,-2,Boys
";
    let err = read_rooms_csv(data.as_bytes()).expect_err("capacity is non-negative");
    assert!(err.to_string().contains("-2"));
}
