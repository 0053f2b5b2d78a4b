//! Compile-time record schemas.
//!
//! A record type describes its persisted shape as an ordered table of
//! [`field::Field`] entries. The order of that table is the column order of
//! the stored line, so it must stay stable for the lifetime of stored data.

pub mod field;
pub mod field_kind;
pub mod field_value;
pub mod identifiable;
pub mod record;
