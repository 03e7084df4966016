//! The editable draft bound to the form controls.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::{FormField, Gender, UserRecord};

/// A typed value for one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Gender(Option<Gender>),
}

impl FieldValue {
    /// Parse a raw control value for `field`.
    ///
    /// For the gender field an empty string is the "Select" placeholder.
    pub fn parse(field: FormField, raw: &str) -> Result<Self> {
        match field {
            FormField::Gender if raw.trim().is_empty() => Ok(Self::Gender(None)),
            FormField::Gender => Ok(Self::Gender(Some(raw.parse()?))),
            _ => Ok(Self::Text(raw.to_string())),
        }
    }
}

/// In-progress values for a user record.
///
/// Every field is always present; text fields may be empty and gender may be
/// unselected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormBuffer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: Option<Gender>,
    pub phone_number: String,
}

impl FormBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when every field is empty and no gender is selected.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Text value of a field; gender renders as its stored value or "".
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Gender => self.gender.as_ref().map_or("", Gender::as_str),
            FormField::PhoneNumber => &self.phone_number,
        }
    }

    /// Replace exactly one field, leaving the others unchanged.
    ///
    /// A text value aimed at the gender field is parsed; anything that does
    /// not parse leaves the gender unselected. Use [`FieldValue::parse`] first
    /// when the caller needs the parse error.
    pub fn set(&mut self, field: FormField, value: FieldValue) {
        let text = match (field, value) {
            (FormField::Gender, FieldValue::Gender(gender)) => {
                self.gender = gender;
                return;
            }
            (FormField::Gender, FieldValue::Text(text)) => {
                self.gender = text.parse().ok();
                return;
            }
            (_, FieldValue::Gender(gender)) => gender.map_or("", |g| g.as_str()).to_string(),
            (_, FieldValue::Text(text)) => text,
        };
        match field {
            FormField::FirstName => self.first_name = text,
            FormField::LastName => self.last_name = text,
            FormField::Email => self.email = text,
            FormField::PhoneNumber => self.phone_number = text,
            FormField::Gender => {}
        }
    }

    /// Fields, in form order, that the required-input gate would reject.
    ///
    /// Whitespace-only text counts as missing, as does an unselected gender.
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::all()
            .iter()
            .copied()
            .filter(|field| match field {
                FormField::Gender => self.gender.is_none(),
                _ => self.get(*field).trim().is_empty(),
            })
            .collect()
    }

    /// True when every required field has a value.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Build a record from the current values, verbatim.
    pub fn to_record(&self) -> UserRecord {
        UserRecord {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            gender: self.gender,
            phone_number: self.phone_number.clone(),
        }
    }
}

impl From<&UserRecord> for FormBuffer {
    fn from(record: &UserRecord) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            gender: record.gender,
            phone_number: record.phone_number.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_touches_one_field() {
        let mut buffer = FormBuffer::new();
        buffer.set(FormField::Email, FieldValue::Text("a@x.com".to_string()));
        assert_eq!(buffer.email, "a@x.com");
        assert_eq!(buffer.first_name, "");
        assert_eq!(buffer.gender, None);
    }

    #[test]
    fn test_parse_gender_placeholder() {
        assert_eq!(
            FieldValue::parse(FormField::Gender, "").unwrap(),
            FieldValue::Gender(None)
        );
        assert_eq!(
            FieldValue::parse(FormField::Gender, "female").unwrap(),
            FieldValue::Gender(Some(Gender::Female))
        );
        assert!(FieldValue::parse(FormField::Gender, "robot").is_err());
    }

    #[test]
    fn test_missing_fields_in_form_order() {
        let buffer = FormBuffer {
            first_name: "Alice".to_string(),
            email: "   ".to_string(),
            ..FormBuffer::default()
        };
        assert_eq!(
            buffer.missing_fields(),
            vec![
                FormField::LastName,
                FormField::Email,
                FormField::Gender,
                FormField::PhoneNumber
            ]
        );
        assert!(!buffer.is_complete());
    }

    #[test]
    fn test_record_round_trip() {
        let record = UserRecord::new("Alice", "Smith", "a@x.com", Gender::Female, "555-1111");
        let buffer = FormBuffer::from(&record);
        assert!(buffer.is_complete());
        assert_eq!(buffer.to_record(), record);
    }
}
