// src/core/testing.rs — Test doubles shared by unit tests

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::client::{ChatBackend, ChatReply, HealthStatus, UpdatePatientResponse};
use crate::core::context::ClientContext;
use crate::core::notify::RecordingNotifier;
use crate::core::types::PatientInfo;
use crate::infra::config::ChatConfig;
use crate::infra::errors::WellmateError;
use crate::render::TranscriptSurface;
use crate::store::{MemoryStore, SessionStore};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    UpdatePatient { session_id: String, info: PatientInfo },
    Chat { session_id: String, message: String },
    Health,
}

/// Scripted backend. `update_status` / `chat_reply` choose the outcome;
/// when `observe` is set, each chat call records how many messages the
/// surface already held.
pub struct FakeBackend {
    pub calls: Mutex<Vec<Call>>,
    pub update_status: Option<String>,
    pub chat_reply: Result<String, u16>,
    pub observe: Option<TranscriptSurface>,
    pub seen_before_chat: Mutex<Vec<usize>>,
}

impl FakeBackend {
    pub fn ok() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            update_status: Some("success".into()),
            chat_reply: Ok("How long have you had it?".into()),
            observe: None,
            seen_before_chat: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatBackend for FakeBackend {
    async fn update_patient(
        &self,
        session_id: &str,
        patient_info: &PatientInfo,
    ) -> Result<UpdatePatientResponse, WellmateError> {
        self.calls.lock().unwrap().push(Call::UpdatePatient {
            session_id: session_id.into(),
            info: patient_info.clone(),
        });
        match &self.update_status {
            Some(status) => Ok(UpdatePatientResponse {
                status: Some(status.clone()),
                extra: Default::default(),
            }),
            None => Err(WellmateError::Transport {
                endpoint: "/update-patient".into(),
                message: "connection refused".into(),
            }),
        }
    }

    async fn chat(&self, session_id: &str, message: &str) -> Result<ChatReply, WellmateError> {
        if let Some(t) = &self.observe {
            self.seen_before_chat.lock().unwrap().push(t.messages().len());
        }
        self.calls.lock().unwrap().push(Call::Chat {
            session_id: session_id.into(),
            message: message.into(),
        });
        match &self.chat_reply {
            Ok(r) => Ok(ChatReply { response: r.clone() }),
            Err(status) => Err(WellmateError::Http {
                endpoint: "/chat".into(),
                status: *status,
            }),
        }
    }

    async fn health(&self) -> Result<HealthStatus, WellmateError> {
        self.calls.lock().unwrap().push(Call::Health);
        Ok(HealthStatus {
            status: "Server is running".into(),
            message: "Test endpoint reached".into(),
        })
    }
}

pub fn context(backend: Arc<FakeBackend>) -> (ClientContext, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::new());
    let ctx = ClientContext::new(
        SessionStore::new(Box::new(MemoryStore::new())),
        backend,
        notifier.clone(),
        ChatConfig::default(),
    );
    (ctx, notifier)
}
