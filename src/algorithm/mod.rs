// High-level module for the allocation pipeline.
// Declares submodules (files under `src/algorithm`).
pub mod allocate;
pub mod normalize;

// Reexport the public API so callers don't reach into submodules.
pub use allocate::{allocate_rooms, unallocated_by_group};
pub use normalize::split_groups_by_gender;
