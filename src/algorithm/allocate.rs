// Room allocator: greedy, cursor-based consumption of per-gender room pools.

use crate::models::{Allocation, Gender, Group, GroupsByGender, Room};

/// Allocate every normalized group into the room inventory, one gender at a
/// time (`Boys` first, then `Girls`, so the output order is deterministic).
///
/// Remaining capacity is tracked on an owned per-pass pool, so the caller's
/// inventory is untouched and a rerun over the same inputs reproduces the
/// same records. If a gender's pool runs out of beds the rest of that
/// group's members stay unplaced; no record and no error is produced for
/// the shortfall (see `unallocated_by_group`).
pub fn allocate_rooms(groups: &GroupsByGender, rooms: &[Room]) -> Vec<Allocation> {
    let mut allocations: Vec<Allocation> = Vec::new();
    for gender in [Gender::Boys, Gender::Girls] {
        allocate_gender(groups.for_gender(gender), rooms, gender, &mut allocations);
    }
    allocations
}

/// One greedy pass over a single gender's room pool. The cursor only ever
/// moves forward: a room is left behind the moment its beds run out and is
/// never reconsidered, even when that would pack a later group tighter.
fn allocate_gender(groups: &[Group], rooms: &[Room], gender: Gender, out: &mut Vec<Allocation>) {
    // (room, remaining beds) in inventory order, capacity copied up front.
    let mut pool: Vec<(&Room, u32)> = rooms
        .iter()
        .filter(|r| r.gender == gender)
        .map(|r| (r, r.capacity))
        .collect();

    let mut room_idx = 0usize;

    for group in groups {
        let mut members_left = group.members;

        while members_left > 0 && room_idx < pool.len() {
            let (room, remaining) = &mut pool[room_idx];

            if *remaining >= members_left {
                out.push(Allocation {
                    group_id: group.group_id.clone(),
                    hostel_name: room.hostel_name.clone(),
                    room_number: room.room_number.clone(),
                    members_allocated: members_left,
                });
                *remaining -= members_left;
                members_left = 0;
                // The room may still have beds for the next group, so the
                // cursor stays put.
            } else {
                // Partial fit: drain whatever is left. A drained room
                // contributes nothing, so no zero-member record is emitted.
                if *remaining > 0 {
                    out.push(Allocation {
                        group_id: group.group_id.clone(),
                        hostel_name: room.hostel_name.clone(),
                        room_number: room.room_number.clone(),
                        members_allocated: *remaining,
                    });
                    members_left -= *remaining;
                    *remaining = 0;
                }
                room_idx += 1;
            }
        }
    }
}

/// Per-group shortfall summary: requested members minus allocated members,
/// for every `group_id` that came up short. A split group's two derived
/// records share one id and are summed together. Order follows the first
/// appearance of each id in the normalized group lists.
pub fn unallocated_by_group(groups: &GroupsByGender, allocations: &[Allocation]) -> Vec<(String, u32)> {
    let mut order: Vec<String> = Vec::new();
    let mut requested: std::collections::HashMap<String, u32> = std::collections::HashMap::new();

    for group in groups.boys.iter().chain(groups.girls.iter()) {
        if !requested.contains_key(&group.group_id) {
            order.push(group.group_id.clone());
        }
        *requested.entry(group.group_id.clone()).or_insert(0) += group.members;
    }

    let mut allocated: std::collections::HashMap<&str, u32> = std::collections::HashMap::new();
    for a in allocations {
        *allocated.entry(a.group_id.as_str()).or_insert(0) += a.members_allocated;
    }

    order
        .into_iter()
        .filter_map(|group_id| {
            let want = requested.get(&group_id).copied().unwrap_or(0);
            let got = allocated.get(group_id.as_str()).copied().unwrap_or(0);
            if got < want {
                Some((group_id, want - got))
            } else {
                None
            }
        })
        .collect()
}
