// src/client/mod.rs — Backend seam for the intake service

pub mod http;
pub mod types;

use async_trait::async_trait;

pub use http::HttpBackend;
pub use types::{ChatReply, HealthStatus, UpdatePatientResponse};

use crate::core::types::PatientInfo;
use crate::infra::errors::WellmateError;

pub const UPDATE_PATIENT_PATH: &str = "/update-patient";
pub const CHAT_PATH: &str = "/chat";
pub const HEALTH_PATH: &str = "/test";

/// Request/response calls against the intake backend. No streaming, no retry.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// `POST /update-patient`. Returns the decoded body whatever the HTTP
    /// status; callers judge success by its `status` field.
    async fn update_patient(
        &self,
        session_id: &str,
        patient_info: &PatientInfo,
    ) -> Result<UpdatePatientResponse, WellmateError>;

    /// `POST /chat`. Non-2xx statuses are errors.
    async fn chat(&self, session_id: &str, message: &str) -> Result<ChatReply, WellmateError>;

    /// `GET /test`.
    async fn health(&self) -> Result<HealthStatus, WellmateError>;
}
