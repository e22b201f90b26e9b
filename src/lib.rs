//! # cube-utils
//!
//! Static extraction of cube and member references from Cube query payloads.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │            Query payload (serde_json::Value)             │
//! │  dimensions, measures, filters, segments, timeDimensions │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [query]
//! ┌─────────────────────────────────────────────────────────┐
//! │       Payload + Entry (plain / time / pushdown / filter) │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [extract]  ◄── [expr] ${cube.member} scanner
//! ┌─────────────────────────────────────────────────────────┐
//! │      cubes, members, (member, values) associations       │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is evaluated: the payload is only read, and every call is a pure
//! function of its input.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! let payload = json!({
//!     "measures": ["orders.count"],
//!     "filters": [{ "or": [{ "member": "users.city", "operator": "set" }] }]
//! });
//!
//! let cubes = cube_utils::extract_cubes(&payload).unwrap();
//! assert_eq!(cubes.into_iter().collect::<Vec<_>>(), vec!["orders", "users"]);
//! ```

pub mod config;
pub mod error;
pub mod expr;
pub mod extract;
pub mod query;
pub mod url_params;

pub use error::{QueryError, QueryResult};
pub use extract::{
    extract_all_members, extract_cubes, extract_filters_members,
    extract_filters_members_with_values, extract_members,
};
pub use query::{Axis, FilterValue, MemberValues};
pub use url_params::{extract_url_params, query_payload_from_url, ParamValue};
