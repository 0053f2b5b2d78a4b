use crate::{FIELD_SEPARATOR, FieldValue, LEGACY_NULL_MARKER};

// Values are written verbatim: an embedded tab shifts every later column, and
// a genuine "NULL" string reads back as absent.

pub(crate) fn render(value: Option<FieldValue>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => LEGACY_NULL_MARKER.to_string(),
    }
}

/// Every segment is followed by the separator, including the last one.
pub(crate) fn join(segments: Vec<String>) -> String {
    let mut line = String::new();
    for segment in segments {
        line.push_str(&segment);
        line.push(FIELD_SEPARATOR);
    }
    line
}

/// Split a stored line, discarding empty segments.
pub(crate) fn split(line: &str) -> Vec<Option<String>> {
    line.split(FIELD_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            if segment == LEGACY_NULL_MARKER {
                None
            } else {
                Some(segment.to_string())
            }
        })
        .collect()
}
