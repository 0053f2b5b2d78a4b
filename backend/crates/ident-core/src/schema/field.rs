use crate::{CoreResult, FieldKind, FieldValue};

use std::fmt;

pub type Getter<T> = fn(&T) -> Option<FieldValue>;
pub type Setter<T> = fn(&mut T, Option<FieldValue>) -> CoreResult<()>;

/// One persisted column of a record type.
pub struct Field<T> {
    pub name: &'static str,
    pub kind: FieldKind,
    pub get: Getter<T>,
    pub set: Setter<T>,
}

impl<T> Field<T> {
    pub const fn new(name: &'static str, kind: FieldKind, get: Getter<T>, set: Setter<T>) -> Self {
        Self {
            name,
            kind,
            get,
            set,
        }
    }

    pub fn read(&self, record: &T) -> Option<FieldValue> {
        (self.get)(record)
    }

    /// Parse `text` as this field's kind and assign it. `None` assigns absence.
    #[track_caller]
    pub fn write_text(&self, record: &mut T, text: Option<&str>) -> CoreResult<()> {
        let value = match text {
            Some(text) => Some(FieldValue::parse(self.name, self.kind, text)?),
            None => None,
        };
        self.write(record, value)
    }

    pub fn write(&self, record: &mut T, value: Option<FieldValue>) -> CoreResult<()> {
        (self.set)(record, value)
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}
