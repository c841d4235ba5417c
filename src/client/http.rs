// src/client/http.rs — reqwest implementation of ChatBackend

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use super::types::{ChatRequest, UpdatePatientRequest};
use super::{
    ChatBackend, ChatReply, HealthStatus, UpdatePatientResponse, CHAT_PATH, HEALTH_PATH,
    UPDATE_PATIENT_PATH,
};
use crate::core::types::PatientInfo;
use crate::infra::config::ServerConfig;
use crate::infra::errors::WellmateError;

pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: &ServerConfig) -> Result<Self, WellmateError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| WellmateError::Config(format!("HTTP client: {e}")))?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Use a preconfigured client (custom proxy or TLS settings).
    pub fn with_client(base_url: &str, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        endpoint: &str,
        resp: reqwest::Response,
    ) -> Result<T, WellmateError> {
        resp.json::<T>().await.map_err(|e| WellmateError::Decode {
            endpoint: endpoint.into(),
            message: e.to_string(),
        })
    }
}

fn transport(endpoint: &str, e: reqwest::Error) -> WellmateError {
    WellmateError::Transport {
        endpoint: endpoint.into(),
        message: e.to_string(),
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn update_patient(
        &self,
        session_id: &str,
        patient_info: &PatientInfo,
    ) -> Result<UpdatePatientResponse, WellmateError> {
        let resp = self
            .client
            .post(self.url(UPDATE_PATIENT_PATH))
            .json(&UpdatePatientRequest {
                session_id,
                patient_info,
            })
            .send()
            .await
            .map_err(|e| transport(UPDATE_PATIENT_PATH, e))?;

        debug!("Update patient response status: {}", resp.status());
        let body: UpdatePatientResponse = Self::decode(UPDATE_PATIENT_PATH, resp).await?;
        debug!("Update patient response data: {:?}", body);
        Ok(body)
    }

    async fn chat(&self, session_id: &str, message: &str) -> Result<ChatReply, WellmateError> {
        let resp = self
            .client
            .post(self.url(CHAT_PATH))
            .json(&ChatRequest {
                session_id,
                message,
            })
            .send()
            .await
            .map_err(|e| transport(CHAT_PATH, e))?;

        let status = resp.status();
        debug!("Chat response status: {status}");
        if !status.is_success() {
            return Err(WellmateError::Http {
                endpoint: CHAT_PATH.into(),
                status: status.as_u16(),
            });
        }
        Self::decode(CHAT_PATH, resp).await
    }

    async fn health(&self) -> Result<HealthStatus, WellmateError> {
        let resp = self
            .client
            .get(self.url(HEALTH_PATH))
            .send()
            .await
            .map_err(|e| transport(HEALTH_PATH, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(WellmateError::Http {
                endpoint: HEALTH_PATH.into(),
                status: status.as_u16(),
            });
        }
        Self::decode(HEALTH_PATH, resp).await
    }
}
