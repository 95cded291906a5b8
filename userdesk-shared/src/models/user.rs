use serde::{Deserialize, Serialize};
use std::{fmt, num::ParseIntError, str::FromStr};
use strum::{EnumIter, IntoEnumIterator};

/// Backend identifier of a persisted user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value.trim().parse().map(Self)
    }
}

/// The editable text fields of a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum UserField {
    Name,
    Email,
    Password,
    PasswordConfirmation,
}

impl UserField {
    /// Field name as used in request bodies and validation error maps.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::PasswordConfirmation => "password_confirmation",
        }
    }

    /// Browser input type used when rendering the field.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Name => "text",
            Self::Email => "email",
            Self::Password | Self::PasswordConfirmation => "password",
        }
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserField {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|field| field.as_str() == value)
            .ok_or("unknown user field")
    }
}

/// A user record as exchanged with the `/users` endpoints.
///
/// The same shape is used for the body of `POST /users` and `PUT /users/{id}`
/// and for the record returned by `GET /users/{id}`. Password fields are never
/// returned by the backend and default to empty strings when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    /// Identifier of a persisted user, `None` for a record not yet created.
    pub id: Option<UserId>,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Email address.
    #[serde(default)]
    pub email: String,

    /// New password.
    #[serde(default)]
    pub password: String,

    /// Repetition of `password`.
    #[serde(default)]
    pub password_confirmation: String,
}

impl UserRecord {
    /// Current text of `field`.
    #[must_use]
    pub fn field(&self, field: UserField) -> &str {
        match field {
            UserField::Name => &self.name,
            UserField::Email => &self.email,
            UserField::Password => &self.password,
            UserField::PasswordConfirmation => &self.password_confirmation,
        }
    }

    /// Returns a copy of this record with `field` replaced by `value`.
    #[must_use]
    pub fn with_field(&self, field: UserField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            UserField::Name => next.name = value,
            UserField::Email => next.email = value,
            UserField::Password => next.password = value,
            UserField::PasswordConfirmation => next.password_confirmation = value,
        }
        next
    }

    /// `true` when every text field is non-empty.
    ///
    /// Only emptiness is checked; whitespace counts as content.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        UserField::iter().all(|field| !self.field(field).is_empty())
    }
}
