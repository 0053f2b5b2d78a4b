use crate::{CoreError, CoreResult, ESCAPED_NULL_MARKER, FIELD_SEPARATOR, FieldValue};

use std::panic::Location;

use error_location::ErrorLocation;

pub(crate) fn render(value: Option<FieldValue>) -> String {
    match value {
        Some(value) => escape(&value.to_string()),
        None => ESCAPED_NULL_MARKER.to_string(),
    }
}

pub(crate) fn join(segments: Vec<String>) -> String {
    segments.join(&FIELD_SEPARATOR.to_string())
}

/// Split a stored line. Empty segments are kept: they are empty strings.
#[track_caller]
pub(crate) fn split(line: &str) -> CoreResult<Vec<Option<String>>> {
    let line = line
        .strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .unwrap_or(line);

    line.split(FIELD_SEPARATOR)
        .map(|segment| {
            if segment == ESCAPED_NULL_MARKER {
                Ok(None)
            } else {
                unescape(segment).map(Some)
            }
        })
        .collect()
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[track_caller]
fn unescape(segment: &str) -> CoreResult<String> {
    let mut text = String::with_capacity(segment.len());
    let mut chars = segment.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            text.push(c);
            continue;
        }

        match chars.next() {
            Some('\\') => text.push('\\'),
            Some('t') => text.push('\t'),
            Some('n') => text.push('\n'),
            Some('r') => text.push('\r'),
            Some(other) => {
                return Err(CoreError::InvalidEscape {
                    sequence: format!("\\{other}"),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            None => {
                return Err(CoreError::InvalidEscape {
                    sequence: String::from("\\"),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }
    }

    Ok(text)
}
