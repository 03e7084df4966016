//! User records and the enumerations that describe them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Gender choices offered by the form's select control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// All choices in the order the select control lists them.
    pub const fn all() -> &'static [Gender] {
        &[Self::Male, Self::Female, Self::Other]
    }

    /// Returns the stored value (`male`, `female`, `other`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    /// Returns the label shown in the select control.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ModelError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(ModelError::UnknownGender(s.to_string())),
        }
    }
}

/// One of the five editable fields of a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Gender,
    PhoneNumber,
}

impl FormField {
    /// Fields in form order.
    pub const fn all() -> &'static [FormField] {
        &[
            Self::FirstName,
            Self::LastName,
            Self::Email,
            Self::Gender,
            Self::PhoneNumber,
        ]
    }

    /// Field identifier as bound to the input control.
    pub const fn id(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Gender => "gender",
            Self::PhoneNumber => "phoneNumber",
        }
    }

    /// Human-readable label (also used as the table column header).
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Gender => "Gender",
            Self::PhoneNumber => "Phone Number",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FormField {
    type Err = ModelError;

    /// Accepts the camelCase control id or its snake_case spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "firstName" | "first_name" => Ok(Self::FirstName),
            "lastName" | "last_name" => Ok(Self::LastName),
            "email" => Ok(Self::Email),
            "gender" => Ok(Self::Gender),
            "phoneNumber" | "phone_number" => Ok(Self::PhoneNumber),
            _ => Err(ModelError::UnknownField(s.to_string())),
        }
    }
}

/// A committed user row.
///
/// Rows have no identity beyond their position in the store; two rows with
/// equal fields compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// `None` when no gender was chosen.
    pub gender: Option<Gender>,
    pub phone_number: String,
}

impl UserRecord {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        gender: Gender,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            gender: Some(gender),
            phone_number: phone_number.into(),
        }
    }

    /// Text shown in the table cell for `field`.
    pub fn display_value(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Gender => self.gender.as_ref().map_or("", Gender::as_str),
            FormField::PhoneNumber => &self.phone_number,
        }
    }

    /// Full name as "first last", trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl fmt::Display for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gender = self.gender.as_ref().map_or("unspecified", Gender::as_str);
        write!(
            f,
            "{} <{}> ({}, {})",
            self.full_name(),
            self.email,
            gender,
            self.phone_number
        )
    }
}
