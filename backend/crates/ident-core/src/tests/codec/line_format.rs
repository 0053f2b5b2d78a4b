use crate::{
    CoreError, CoreResult, Field, FieldKind, FieldValue, Identifiable, LineFormat, Record, User,
};

use std::str::FromStr;

use googletest::prelude::*;
use uuid::Uuid;

const ALICE_ID: &str = "11111111-1111-1111-1111-111111111111";

fn alice() -> User {
    User {
        id: Uuid::parse_str(ALICE_ID).unwrap(),
        user_name: Some("alice".to_string()),
        normalized_user_name: Some("ALICE".to_string()),
        email: Some("alice@example.com".to_string()),
        password_hash: Some("h4sh".to_string()),
    }
}

/// A record with an integer column and a column the codec cannot read back.
#[derive(Debug, Default, PartialEq)]
struct Device {
    id: Uuid,
    label: Option<String>,
    port: Option<i32>,
    trusted: Option<bool>,
}

impl Identifiable for Device {
    fn id(&self) -> Uuid {
        self.id
    }
}

fn device_trusted(value: Option<FieldValue>) -> CoreResult<Option<bool>> {
    value
        .map(|v| v.into_text("Trusted").map(|text| text == "true"))
        .transpose()
}

static DEVICE_FIELDS: [Field<Device>; 4] = [
    Field::new(
        "Id",
        FieldKind::Uuid,
        |device| Some(FieldValue::Uuid(device.id)),
        |device, value| {
            device.id = FieldValue::require(value, "Id")?.into_uuid("Id")?;
            Ok(())
        },
    ),
    Field::new(
        "Label",
        FieldKind::Text,
        |device| device.label.clone().map(FieldValue::Text),
        |device, value| {
            device.label = value.map(|v| v.into_text("Label")).transpose()?;
            Ok(())
        },
    ),
    Field::new(
        "Port",
        FieldKind::Integer,
        |device| device.port.map(FieldValue::Integer),
        |device, value| {
            device.port = value.map(|v| v.into_integer("Port")).transpose()?;
            Ok(())
        },
    ),
    Field::new(
        "Trusted",
        FieldKind::Other("bool"),
        |device| device.trusted.map(|t| FieldValue::Other(t.to_string())),
        |device, value| {
            device.trusted = device_trusted(value)?;
            Ok(())
        },
    ),
];

impl Record for Device {
    fn fields() -> &'static [Field<Self>] {
        &DEVICE_FIELDS
    }
}

// =========================================================================
// Escaped format
// =========================================================================

#[test]
fn given_user_when_encoded_escaped_then_tab_separated_without_trailing_separator() {
    // When
    let line = LineFormat::Escaped.encode(&alice());

    // Then
    assert_that!(
        line,
        eq(&format!(
            "{ALICE_ID}\talice\tALICE\talice@example.com\th4sh"
        ))
    );
}

#[test]
fn given_encoded_user_when_decoded_escaped_then_fields_preserved() {
    // Given
    let line = LineFormat::Escaped.encode(&alice());

    // When
    let decoded: User = LineFormat::Escaped.decode(&line).unwrap();

    // Then
    assert_that!(decoded, eq(&alice()));
}

#[test]
fn given_absent_fields_when_encoded_escaped_then_absence_marker_written() {
    // Given
    let user = User {
        password_hash: None,
        email: None,
        ..alice()
    };

    // When
    let line = LineFormat::Escaped.encode(&user);

    // Then
    assert_that!(line, eq(&format!("{ALICE_ID}\talice\tALICE\t\\N\t\\N")));
    let decoded: User = LineFormat::Escaped.decode(&line).unwrap();
    assert_that!(decoded.email, none());
    assert_that!(decoded.password_hash, none());
}

#[test]
fn given_literal_null_text_when_round_tripped_escaped_then_text_preserved() {
    // Given
    let user = User {
        user_name: Some("NULL".to_string()),
        email: Some("\\N".to_string()),
        ..alice()
    };

    // When
    let decoded: User = LineFormat::Escaped
        .decode(&LineFormat::Escaped.encode(&user))
        .unwrap();

    // Then
    assert_that!(decoded.user_name, some(eq("NULL")));
    assert_that!(decoded.email, some(eq("\\N")));
}

#[test]
fn given_tabs_and_newlines_in_values_when_round_tripped_escaped_then_preserved() {
    // Given
    let user = User {
        user_name: Some("a\tb".to_string()),
        password_hash: Some("line1\nline2\r\n\\end".to_string()),
        ..alice()
    };

    // When
    let line = LineFormat::Escaped.encode(&user);
    let decoded: User = LineFormat::Escaped.decode(&line).unwrap();

    // Then
    assert_that!(line.contains('\n'), eq(false));
    assert_that!(decoded, eq(&user));
}

#[test]
fn given_empty_string_value_when_round_tripped_escaped_then_empty_not_absent() {
    // Given
    let user = User {
        email: Some(String::new()),
        ..alice()
    };

    // When
    let decoded: User = LineFormat::Escaped
        .decode(&LineFormat::Escaped.encode(&user))
        .unwrap();

    // Then
    assert_that!(decoded.email, some(eq("")));
}

#[test]
fn given_trailing_newline_when_decoded_escaped_then_ignored() {
    // Given
    let line = format!("{}\n", LineFormat::Escaped.encode(&alice()));

    // When
    let decoded: User = LineFormat::Escaped.decode(&line).unwrap();

    // Then
    assert_that!(decoded.password_hash, some(eq("h4sh")));
}

#[test]
fn given_unknown_escape_when_decoded_then_invalid_escape_error() {
    // Given
    let line = format!("{ALICE_ID}\tal\\xice\tALICE\t\\N\t\\N");

    // When
    let result: CoreResult<User> = LineFormat::Escaped.decode(&line);

    // Then
    assert!(matches!(
        result.unwrap_err(),
        CoreError::InvalidEscape { sequence, .. } if sequence == "\\x"
    ));
}

#[test]
fn given_dangling_backslash_when_decoded_then_invalid_escape_error() {
    let line = format!("{ALICE_ID}\talice\\\tALICE\t\\N\t\\N");

    let result: CoreResult<User> = LineFormat::Escaped.decode(&line);

    assert!(matches!(
        result.unwrap_err(),
        CoreError::InvalidEscape { .. }
    ));
}

// =========================================================================
// Legacy format
// =========================================================================

#[test]
fn given_user_when_encoded_legacy_then_trailing_separator_written() {
    // When
    let line = LineFormat::Legacy.encode(&alice());

    // Then
    assert_that!(
        line,
        eq(&format!(
            "{ALICE_ID}\talice\tALICE\talice@example.com\th4sh\t"
        ))
    );
}

#[test]
fn given_encoded_user_when_decoded_legacy_then_fields_preserved() {
    // Given
    let line = LineFormat::Legacy.encode(&alice());

    // When
    let decoded: User = LineFormat::Legacy.decode(&line).unwrap();

    // Then
    assert_that!(decoded, eq(&alice()));
}

#[test]
fn given_absent_field_when_encoded_legacy_then_null_sentinel_written() {
    // Given
    let user = User {
        password_hash: None,
        ..alice()
    };

    // When
    let line = LineFormat::Legacy.encode(&user);
    let decoded: User = LineFormat::Legacy.decode(&line).unwrap();

    // Then
    assert_that!(line.ends_with("alice@example.com\tNULL\t"), eq(true));
    assert_that!(decoded.password_hash, none());
}

#[test]
fn given_literal_null_text_when_round_tripped_legacy_then_reads_back_absent() {
    // Given
    let user = User {
        user_name: Some("NULL".to_string()),
        ..alice()
    };

    // When
    let decoded: User = LineFormat::Legacy
        .decode(&LineFormat::Legacy.encode(&user))
        .unwrap();

    // Then
    assert_that!(decoded.user_name, none());
}

#[test]
fn given_embedded_tab_when_round_tripped_legacy_then_structural_mismatch() {
    // Given
    let user = User {
        user_name: Some("al\tice".to_string()),
        ..alice()
    };

    // When
    let result: CoreResult<User> = LineFormat::Legacy.decode(&LineFormat::Legacy.encode(&user));

    // Then
    assert!(matches!(
        result.unwrap_err(),
        CoreError::StructuralMismatch {
            expected: 5,
            found: 6,
            ..
        }
    ));
}

#[test]
fn given_empty_string_when_round_tripped_legacy_then_segment_is_discarded() {
    let user = User {
        email: Some(String::new()),
        ..alice()
    };

    let result: CoreResult<User> = LineFormat::Legacy.decode(&LineFormat::Legacy.encode(&user));

    assert!(matches!(
        result.unwrap_err(),
        CoreError::StructuralMismatch {
            expected: 5,
            found: 4,
            ..
        }
    ));
}

// =========================================================================
// Decode failures
// =========================================================================

#[test]
fn given_too_few_segments_when_decoded_then_structural_mismatch() {
    // Given
    let line = format!("{ALICE_ID}\talice\tALICE");

    // When
    let result: CoreResult<User> = LineFormat::Escaped.decode(&line);

    // Then
    assert_that!(result, err(anything()));
    assert!(matches!(
        result.unwrap_err(),
        CoreError::StructuralMismatch {
            expected: 5,
            found: 3,
            ..
        }
    ));
}

#[test]
fn given_too_many_segments_when_decoded_legacy_then_structural_mismatch() {
    let line = format!("{ALICE_ID}\ta\tb\tc\td\te\t");

    let result: CoreResult<User> = LineFormat::Legacy.decode(&line);

    assert!(matches!(
        result.unwrap_err(),
        CoreError::StructuralMismatch {
            expected: 5,
            found: 6,
            ..
        }
    ));
}

#[test]
fn given_malformed_uuid_when_decoded_then_invalid_field_value() {
    // Given
    let line = "not-a-uuid\talice\tALICE\t\\N\t\\N";

    // When
    let result: CoreResult<User> = LineFormat::Escaped.decode(line);

    // Then
    assert!(matches!(
        result.unwrap_err(),
        CoreError::InvalidFieldValue { field: "Id", .. }
    ));
}

#[test]
fn given_absent_id_when_decoded_then_missing_value() {
    let line = "\\N\talice\tALICE\t\\N\t\\N";

    let result: CoreResult<User> = LineFormat::Escaped.decode(line);

    assert!(matches!(
        result.unwrap_err(),
        CoreError::MissingValue { field: "Id", .. }
    ));
}

#[test]
fn given_integer_column_when_round_tripped_then_value_preserved() {
    // Given
    let device = Device {
        id: Uuid::new_v4(),
        label: Some("laptop".to_string()),
        port: Some(-8080),
        trusted: None,
    };

    // When
    let line = LineFormat::Escaped.encode(&device);
    let decoded: Device = LineFormat::Escaped.decode(&line).unwrap();

    // Then
    assert_that!(decoded, eq(&device));
}

#[test]
fn given_non_numeric_integer_column_when_decoded_then_invalid_field_value() {
    let line = format!("{ALICE_ID}\tlaptop\teighty\t\\N");

    let result: CoreResult<Device> = LineFormat::Escaped.decode(&line);

    assert!(matches!(
        result.unwrap_err(),
        CoreError::InvalidFieldValue { field: "Port", .. }
    ));
}

#[test]
fn given_unsupported_column_with_value_when_decoded_then_unsupported_field_type() {
    // Given
    let device = Device {
        id: Uuid::new_v4(),
        label: None,
        port: None,
        trusted: Some(true),
    };
    let line = LineFormat::Legacy.encode(&device);

    // When
    let result: CoreResult<Device> = LineFormat::Legacy.decode(&line);

    // Then
    assert_that!(line.ends_with("NULL\tNULL\ttrue\t"), eq(true));
    assert!(matches!(
        result.unwrap_err(),
        CoreError::UnsupportedFieldType {
            field: "Trusted",
            type_name: "bool",
            ..
        }
    ));
}

#[test]
fn given_unsupported_column_absent_when_decoded_then_succeeds() {
    let device = Device {
        id: Uuid::new_v4(),
        label: Some("phone".to_string()),
        port: Some(443),
        trusted: None,
    };

    let decoded: Device = LineFormat::Escaped
        .decode(&LineFormat::Escaped.encode(&device))
        .unwrap();

    assert_that!(decoded, eq(&device));
}

// =========================================================================
// Parsing
// =========================================================================

#[test]
fn given_format_names_when_parsed_then_case_insensitive() {
    assert_that!(LineFormat::from_str("Escaped").unwrap(), eq(LineFormat::Escaped));
    assert_that!(LineFormat::from_str("LEGACY").unwrap(), eq(LineFormat::Legacy));
    assert_that!(LineFormat::from_str("csv"), err(anything()));
    assert_that!(LineFormat::default(), eq(LineFormat::Escaped));
}
