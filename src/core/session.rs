// src/core/session.rs — Guest login, logout, new chat

use chrono::Utc;
use tracing::debug;

use crate::core::navigation::{Navigation, Page};
use crate::core::types::Session;
use crate::infra::errors::WellmateError;
use crate::store::SessionStore;

/// Start an unauthenticated session and continue to the intake form.
pub fn guest_login(store: &SessionStore) -> Result<(Session, Navigation), WellmateError> {
    guest_login_at(store, Utc::now().timestamp_millis())
}

pub fn guest_login_at(
    store: &SessionStore,
    timestamp_ms: i64,
) -> Result<(Session, Navigation), WellmateError> {
    let session = Session::guest(timestamp_ms);
    debug!("Guest login, setting sessionId: {}", session.session_id);
    store.save_session(&session)?;
    Ok((session, Navigation::Redirect(Page::IntakeForm)))
}

/// Clear the session and patient info locally. There is no server call and
/// legacy consultation history is left in place.
pub fn logout(store: &SessionStore) -> Result<Navigation, WellmateError> {
    debug!("Logging out, clearing sessionId");
    store.clear_session()?;
    store.clear_patient_info()?;
    Ok(Navigation::Redirect(Page::Login))
}

/// The intake page decides what to reuse through its own guard and autofill.
pub fn new_chat() -> Navigation {
    debug!("Starting new chat");
    Navigation::Redirect(Page::IntakeForm)
}
