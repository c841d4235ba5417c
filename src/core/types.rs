// src/core/types.rs — Core domain types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A client-held session. The id is an opaque token for the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    pub is_guest: bool,
}

impl Session {
    /// Guest sessions are not backed by authentication.
    pub fn guest(timestamp_ms: i64) -> Self {
        Self {
            session_id: format!("guest-{timestamp_ms}"),
            is_guest: true,
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
    Hindi,
    Arabic,
    Chinese,
    Urdu,
}

/// Validated patient demographics. `name` is non-empty and `age > 0`;
/// construct through `IntakeForm::parse`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientInfo {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub language: Language,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Legacy locally cached conversation. Read at chat load, never written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastConsultation {
    pub timestamp: i64,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}
