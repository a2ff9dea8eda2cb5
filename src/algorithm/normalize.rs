// Group normalizer: partitions raw groups by gender before allocation.

use crate::models::{Gender, Group, GroupsByGender, RawGroup};

/// Partition raw groups into per-gender lists, splitting mixed groups.
///
/// A group already tagged `Boys` or `Girls` is passed through unchanged. A
/// mixed group (no fixed gender) is apportioned with the floor half to
/// `Boys` and the remainder to `Girls`; both derived records keep the
/// parent `group_id`. A derived count of zero is kept as-is, the allocator
/// treats zero-member groups as a no-op.
///
/// Input order is preserved within each gender list.
pub fn split_groups_by_gender(raw_groups: &[RawGroup]) -> GroupsByGender {
    let mut partitioned = GroupsByGender::default();

    for raw in raw_groups {
        match raw.gender {
            Some(gender) => partitioned.push(Group {
                group_id: raw.group_id.clone(),
                members: raw.members,
                gender,
            }),
            None => {
                let boys = raw.members / 2;
                let girls = raw.members - boys;
                partitioned.push(Group {
                    group_id: raw.group_id.clone(),
                    members: boys,
                    gender: Gender::Boys,
                });
                partitioned.push(Group {
                    group_id: raw.group_id.clone(),
                    members: girls,
                    gender: Gender::Girls,
                });
            }
        }
    }

    partitioned
}
