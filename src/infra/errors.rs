// src/infra/errors.rs — Error types for WellMate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WellmateError {
    // Transport errors (surfaced to the user, never retried)
    #[error("HTTP error! status: {status}")]
    Http { endpoint: String, status: u16 },

    #[error("{endpoint}: {message}")]
    Transport { endpoint: String, message: String },

    #[error("{endpoint}: invalid response body: {message}")]
    Decode { endpoint: String, message: String },

    #[error(
        "Failed to update patient info on server (status: {})",
        .status.as_deref().unwrap_or("missing")
    )]
    SyncRejected { status: Option<String> },

    // User errors
    #[error("No session found. Please log in or start as a guest.")]
    NoSession,

    #[error("Please provide a valid name and age.")]
    InvalidPatientInfo,

    #[error("Please enter a message and ensure you are logged in.")]
    InvalidChatInput,

    // Infra
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WellmateError {
    /// True for failures that happened on the wire rather than locally.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            WellmateError::Http { .. }
                | WellmateError::Transport { .. }
                | WellmateError::Decode { .. }
                | WellmateError::SyncRejected { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message_matches_alert_text() {
        let e = WellmateError::Http {
            endpoint: "/chat".into(),
            status: 500,
        };
        assert_eq!(e.to_string(), "HTTP error! status: 500");
        assert!(e.is_transport());
    }

    #[test]
    fn test_validation_errors_are_local() {
        assert!(!WellmateError::InvalidPatientInfo.is_transport());
        assert!(!WellmateError::NoSession.is_transport());
        assert_eq!(
            WellmateError::InvalidChatInput.to_string(),
            "Please enter a message and ensure you are logged in."
        );
    }

    #[test]
    fn test_sync_rejected_names_server_status() {
        let e = WellmateError::SyncRejected {
            status: Some("error".into()),
        };
        assert_eq!(
            e.to_string(),
            "Failed to update patient info on server (status: error)"
        );
        assert!(e.is_transport());

        let e = WellmateError::SyncRejected { status: None };
        assert!(e.to_string().ends_with("(status: missing)"));
    }
}
