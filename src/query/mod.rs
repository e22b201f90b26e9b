//! Typed views over a Cube query payload.
//!
//! The payload itself stays a borrowed `serde_json::Value`; this module
//! only decides how each part of it should be read:
//!
//! - [`Payload`] normalizes the top-level value and hands out axis entries.
//! - [`Axis`] names the five query axes and their wire keys.
//! - [`Entry`] classifies a single axis entry once, so extractors match on
//!   a variant instead of probing fields.
//! - [`FilterValue`] is the ordered scalar collected from filter values.

mod entry;
mod payload;
mod value;

pub use entry::{Entry, PushdownMember};
pub use payload::{Axis, Payload};
pub use value::{FilterValue, MemberValues};
