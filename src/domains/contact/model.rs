use std::{borrow::Cow, collections::BTreeMap};

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::utils::is_valid_email;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
  Name,
  Email,
  Subject,
  Message,
}

impl ContactField {
  pub const ALL: [ContactField; 4] = [
    ContactField::Name,
    ContactField::Email,
    ContactField::Subject,
    ContactField::Message,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      ContactField::Name => "name",
      ContactField::Email => "email",
      ContactField::Subject => "subject",
      ContactField::Message => "message",
    }
  }

  pub fn from_name(name: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|field| field.as_str() == name)
  }

  /// Checks one raw field value and returns the message to show under it.
  pub fn check(self, value: &str) -> Result<(), &'static str> {
    let trimmed = value.trim();
    let min_len = |min: usize, too_short: &'static str| {
      if trimmed.chars().count() < min {
        Err(too_short)
      } else {
        Ok(())
      }
    };

    match self {
      ContactField::Name if trimmed.is_empty() => Err("Name is required"),
      ContactField::Name => min_len(2, "Name must be at least 2 characters"),
      ContactField::Email if trimmed.is_empty() => Err("Email is required"),
      ContactField::Email if !is_valid_email(value) => Err("Please enter a valid email address"),
      ContactField::Email => Ok(()),
      ContactField::Subject if trimmed.is_empty() => Err("Subject is required"),
      ContactField::Subject => min_len(3, "Subject must be at least 3 characters"),
      ContactField::Message if trimmed.is_empty() => Err("Message is required"),
      ContactField::Message => min_len(10, "Message must be at least 10 characters"),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct ContactRequest {
  #[validate(custom(function = "validate_name"))]
  pub name: String,
  #[validate(custom(function = "validate_email"))]
  pub email: String,
  #[validate(custom(function = "validate_subject"))]
  pub subject: String,
  #[validate(custom(function = "validate_message"))]
  pub message: String,
}

impl ContactRequest {
  pub fn value(&self, field: ContactField) -> &str {
    match field {
      ContactField::Name => &self.name,
      ContactField::Email => &self.email,
      ContactField::Subject => &self.subject,
      ContactField::Message => &self.message,
    }
  }

  pub fn value_mut(&mut self, field: ContactField) -> &mut String {
    match field {
      ContactField::Name => &mut self.name,
      ContactField::Email => &mut self.email,
      ContactField::Subject => &mut self.subject,
      ContactField::Message => &mut self.message,
    }
  }
}

fn check_field(field: ContactField, value: &str) -> Result<(), ValidationError> {
  field.check(value).map_err(|msg| {
    let mut err = ValidationError::new(field.as_str());
    err.message = Some(Cow::Borrowed(msg));
    err
  })
}

fn validate_name(value: &str) -> Result<(), ValidationError> {
  check_field(ContactField::Name, value)
}

fn validate_email(value: &str) -> Result<(), ValidationError> {
  check_field(ContactField::Email, value)
}

fn validate_subject(value: &str) -> Result<(), ValidationError> {
  check_field(ContactField::Subject, value)
}

fn validate_message(value: &str) -> Result<(), ValidationError> {
  check_field(ContactField::Message, value)
}

/// Flattens validator output to one message per invalid field.
pub fn field_errors(errors: &ValidationErrors) -> BTreeMap<ContactField, String> {
  errors
    .field_errors()
    .into_iter()
    .filter_map(|(name, errs)| {
      let field = ContactField::from_name(&name)?;
      let message = errs
        .first()
        .and_then(|err| err.message.as_ref())
        .map(|msg| msg.to_string())
        .unwrap_or_else(|| format!("{} is invalid", field.as_str()));
      Some((field, message))
    })
    .collect()
}
