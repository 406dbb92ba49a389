use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The JSON envelope every API endpoint answers with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiResponse {
  #[serde(default)]
  pub success: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub errors: Option<BTreeMap<String, String>>,
}

impl ApiResponse {
  pub fn ok(message: impl Into<String>) -> Self {
    Self {
      success: true,
      message: Some(message.into()),
      ..Self::default()
    }
  }

  pub fn failure(error: impl Into<String>) -> Self {
    Self {
      success: false,
      error: Some(error.into()),
      ..Self::default()
    }
  }

  /// Text suitable for showing to the person who submitted a form.
  pub fn user_message(&self) -> Option<&str> {
    self
      .message
      .as_deref()
      .or(self.error.as_deref())
      .filter(|msg| !msg.trim().is_empty())
  }
}
