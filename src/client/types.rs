// src/client/types.rs — Wire types

use serde::{Deserialize, Serialize};

use crate::core::types::PatientInfo;

#[derive(Debug, Serialize)]
pub struct UpdatePatientRequest<'a> {
    pub session_id: &'a str,
    pub patient_info: &'a PatientInfo,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdatePatientResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UpdatePatientResponse {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }
}

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub session_id: &'a str,
    pub message: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}
