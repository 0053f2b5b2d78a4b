//! Single-line text encodings of records.
//!
//! A stored record is one line of tab-separated segments, one segment per
//! schema field in declaration order. [`line_format::LineFormat`] selects how
//! absent values and special characters are represented.

mod escaped;
mod legacy;
pub mod line_format;
