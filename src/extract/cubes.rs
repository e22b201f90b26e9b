//! Cube derivation from member identifiers.

use std::collections::BTreeSet;

use serde_json::Value;

use super::members::extract_all_members;
use crate::error::{QueryError, QueryResult};

/// Cubes touched by a payload: the prefix of every member before its first `.`.
///
/// A member without a `.` has no cube and fails with
/// [`QueryError::UnqualifiedMember`].
pub fn extract_cubes(payload: &Value) -> QueryResult<BTreeSet<String>> {
    extract_all_members(payload)?
        .iter()
        .map(|member| cube_of(member).map(str::to_string))
        .collect()
}

/// The cube part of a `cube.member` identifier.
pub fn cube_of(member: &str) -> QueryResult<&str> {
    member
        .split_once('.')
        .map(|(cube, _)| cube)
        .ok_or_else(|| QueryError::UnqualifiedMember(member.to_string()))
}
