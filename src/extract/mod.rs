//! Extractors over a query payload.
//!
//! ```text
//!  extract_cubes ──► extract_members ──┬──► walk_filter        (filters)
//!                                      └──► scan_members       (pushdown)
//!
//!  extract_filters_members_with_values ┬──► walk_filter_with_values
//!                                      └──► scan_member_values (segments)
//! ```
//!
//! All extractors are pure functions of the payload. Sets are returned as
//! `BTreeSet`s so their iteration order is stable.

mod cubes;
mod filter;
mod members;
mod values;

pub use cubes::{cube_of, extract_cubes};
pub use filter::{walk_filter, walk_filter_with_values, ValueMap};
pub use members::{extract_all_members, extract_filters_members, extract_members};
pub use values::extract_filters_members_with_values;
