//! User entity - the account record consumed by the identity layer.

use crate::{CoreError, CoreResult, Field, FieldKind, FieldValue, Identifiable, Record};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An identity account. Every attribute except `id` may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub user_name: Option<String>,
    /// Upper-cased `user_name`, used for case-insensitive lookups
    pub normalized_user_name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

impl User {
    /// Create a new user with a fresh identifier and derived normalized name
    #[track_caller]
    pub fn new(user_name: impl Into<String>, email: impl Into<String>) -> CoreResult<Self> {
        let user_name = user_name.into();
        if user_name.trim().is_empty() {
            return Err(CoreError::Validation {
                message: "user name cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            id: Uuid::new_v4(),
            normalized_user_name: Some(user_name.to_uppercase()),
            user_name: Some(user_name),
            email: Some(email.into()),
            password_hash: None,
        })
    }

    pub fn with_password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = Some(password_hash.into());
        self
    }
}

impl Identifiable for User {
    fn id(&self) -> Uuid {
        self.id
    }
}

fn optional_text(value: Option<FieldValue>, field: &'static str) -> CoreResult<Option<String>> {
    value.map(|v| v.into_text(field)).transpose()
}

static USER_FIELDS: [Field<User>; 5] = [
    Field {
        name: "Id",
        kind: FieldKind::Uuid,
        get: |user| Some(FieldValue::Uuid(user.id)),
        set: |user, value| {
            user.id = FieldValue::require(value, "Id")?.into_uuid("Id")?;
            Ok(())
        },
    },
    Field {
        name: "UserName",
        kind: FieldKind::Text,
        get: |user| user.user_name.clone().map(FieldValue::Text),
        set: |user, value| {
            user.user_name = optional_text(value, "UserName")?;
            Ok(())
        },
    },
    Field {
        name: "NormalizedUserName",
        kind: FieldKind::Text,
        get: |user| user.normalized_user_name.clone().map(FieldValue::Text),
        set: |user, value| {
            user.normalized_user_name = optional_text(value, "NormalizedUserName")?;
            Ok(())
        },
    },
    Field {
        name: "Email",
        kind: FieldKind::Text,
        get: |user| user.email.clone().map(FieldValue::Text),
        set: |user, value| {
            user.email = optional_text(value, "Email")?;
            Ok(())
        },
    },
    Field {
        name: "PasswordHash",
        kind: FieldKind::Text,
        get: |user| user.password_hash.clone().map(FieldValue::Text),
        set: |user, value| {
            user.password_hash = optional_text(value, "PasswordHash")?;
            Ok(())
        },
    },
];

impl Record for User {
    fn fields() -> &'static [Field<Self>] {
        &USER_FIELDS
    }
}
