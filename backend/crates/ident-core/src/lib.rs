pub mod codec;
pub mod error;
pub mod models;
pub mod schema;


pub use codec::line_format::LineFormat;
pub use error::{CoreError, CoreResult};
pub use models::user::User;
pub use schema::field::Field;
pub use schema::field_kind::FieldKind;
pub use schema::field_value::FieldValue;
pub use schema::identifiable::Identifiable;
pub use schema::record::Record;

/// Text written in place of an absent value by the legacy line format.
pub const LEGACY_NULL_MARKER: &str = "NULL";

/// Token written in place of an absent value by the escaped line format.
pub const ESCAPED_NULL_MARKER: &str = "\\N";

/// Separator between field segments in both line formats.
pub const FIELD_SEPARATOR: char = '\t';
