//! Lexical scanning of member references embedded in SQL expressions.

mod scanner;

pub use scanner::{scan_member_values, scan_members};
