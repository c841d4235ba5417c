// src/store/session.rs — Typed access to the well-known keys

use tracing::warn;

use super::KeyValueStore;
use crate::core::types::{PastConsultation, PatientInfo, Session};
use crate::infra::errors::WellmateError;

pub const SESSION_ID_KEY: &str = "sessionId";
pub const IS_GUEST_KEY: &str = "isGuest";
pub const PATIENT_INFO_KEY: &str = "patientInfo";
pub const PAST_CONSULTATIONS_KEY: &str = "pastConsultations";

pub struct SessionStore {
    inner: Box<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(inner: Box<dyn KeyValueStore>) -> Self {
        Self { inner }
    }

    pub fn raw(&self) -> &dyn KeyValueStore {
        self.inner.as_ref()
    }

    // -- Session --

    pub fn session_id(&self) -> Result<Option<String>, WellmateError> {
        Ok(self
            .inner
            .get(SESSION_ID_KEY)?
            .filter(|id| !id.is_empty()))
    }

    pub fn session(&self) -> Result<Option<Session>, WellmateError> {
        let Some(session_id) = self.session_id()? else {
            return Ok(None);
        };
        let is_guest = self.inner.get(IS_GUEST_KEY)?.as_deref() == Some("true");
        Ok(Some(Session {
            session_id,
            is_guest,
        }))
    }

    pub fn save_session(&self, session: &Session) -> Result<(), WellmateError> {
        self.inner.set(SESSION_ID_KEY, &session.session_id)?;
        if session.is_guest {
            self.inner.set(IS_GUEST_KEY, "true")?;
        } else {
            self.inner.remove(IS_GUEST_KEY)?;
        }
        Ok(())
    }

    pub fn clear_session(&self) -> Result<(), WellmateError> {
        self.inner.remove(SESSION_ID_KEY)?;
        self.inner.remove(IS_GUEST_KEY)?;
        Ok(())
    }

    // -- Patient info --

    pub fn patient_info(&self) -> Result<Option<PatientInfo>, WellmateError> {
        let Some(raw) = self.inner.get(PATIENT_INFO_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(info) => Ok(Some(info)),
            Err(e) => {
                warn!("Ignoring unreadable {PATIENT_INFO_KEY}: {e}");
                Ok(None)
            }
        }
    }

    pub fn save_patient_info(&self, info: &PatientInfo) -> Result<(), WellmateError> {
        let json = serde_json::to_string(info)?;
        self.inner.set(PATIENT_INFO_KEY, &json)
    }

    pub fn clear_patient_info(&self) -> Result<(), WellmateError> {
        self.inner.remove(PATIENT_INFO_KEY)
    }

    // -- Legacy --

    /// Read-only: nothing in the active flow appends to this list.
    pub fn past_consultations(&self) -> Result<Vec<PastConsultation>, WellmateError> {
        let Some(raw) = self.inner.get(PAST_CONSULTATIONS_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(list) => Ok(list),
            Err(e) => {
                warn!("Ignoring unreadable {PAST_CONSULTATIONS_KEY}: {e}");
                Ok(Vec::new())
            }
        }
    }
}
