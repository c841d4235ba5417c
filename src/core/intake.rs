// src/core/intake.rs — Patient intake: parse, validate, persist, sync
//
// Local data is authoritative. The server copy is advisory: a failed sync is
// reported but never blocks moving on to the chat, and nothing reconciles
// the two afterwards.

use tracing::{debug, warn};

use crate::core::context::ClientContext;
use crate::core::navigation::{Navigation, Page};
use crate::core::notify::SYNC_FAILED_ALERT;
use crate::core::types::{Gender, Language, PatientInfo};
use crate::infra::errors::WellmateError;

/// Raw form values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeForm {
    pub name: String,
    pub age: String,
    pub gender: Gender,
    pub language: Language,
    pub phone: String,
}

impl IntakeForm {
    /// Pre-fill from previously saved data; missing fields fall back to the
    /// form defaults (empty text, Male, English).
    pub fn autofill(stored: Option<&PatientInfo>) -> Self {
        match stored {
            Some(info) => Self {
                name: info.name.clone(),
                age: if info.age > 0 {
                    info.age.to_string()
                } else {
                    String::new()
                },
                gender: info.gender,
                language: info.language,
                phone: info.phone.clone(),
            },
            None => Self::default(),
        }
    }

    pub fn parse(&self) -> Result<PatientInfo, WellmateError> {
        let name = self.name.trim();
        let age = parse_age(&self.age);
        if name.is_empty() || age <= 0 {
            return Err(WellmateError::InvalidPatientInfo);
        }
        let age = u32::try_from(age).map_err(|_| WellmateError::InvalidPatientInfo)?;
        Ok(PatientInfo {
            name: name.to_string(),
            age,
            gender: self.gender,
            language: self.language,
            phone: self.phone.trim().to_string(),
        })
    }
}

/// Integer-prefix parse: optional leading whitespace and sign, then digits.
/// A `0x`/`0X` prefix switches to hex. Anything unparsable is 0.
pub fn parse_age(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let mut value: i64 = 0;
    let mut seen = false;
    for d in digits.chars().map_while(|c| c.to_digit(radix)) {
        seen = true;
        value = value
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(d));
    }
    if !seen {
        return 0;
    }
    if negative {
        -value
    } else {
        value
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Synced,
    /// Server answered without the success marker
    Rejected { status: Option<String> },
    Failed(String),
    /// No session id, so nothing was sent
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeOutcome {
    Invalid,
    Saved {
        patient: PatientInfo,
        sync: SyncOutcome,
    },
}

impl IntakeOutcome {
    pub fn navigation(&self) -> Navigation {
        match self {
            IntakeOutcome::Invalid => Navigation::Stay,
            IntakeOutcome::Saved { .. } => Navigation::Redirect(Page::Chat),
        }
    }
}

pub async fn submit_patient_info(
    ctx: &ClientContext,
    form: &IntakeForm,
) -> Result<IntakeOutcome, WellmateError> {
    let patient = match form.parse() {
        Ok(p) => p,
        Err(e) => {
            warn!("Invalid patient info: name or age missing");
            ctx.alert(&e.to_string());
            return Ok(IntakeOutcome::Invalid);
        }
    };
    debug!("Submitting patient info: {:?}", patient);

    ctx.store.save_patient_info(&patient)?;

    let sync = match ctx.store.session_id()? {
        Some(session_id) => sync_patient_info(ctx, &session_id, &patient).await,
        None => {
            warn!("No sessionId found. Proceeding with local data.");
            SyncOutcome::Skipped
        }
    };

    Ok(IntakeOutcome::Saved { patient, sync })
}

async fn sync_patient_info(
    ctx: &ClientContext,
    session_id: &str,
    patient: &PatientInfo,
) -> SyncOutcome {
    let e = match ctx.backend.update_patient(session_id, patient).await {
        Ok(resp) if resp.is_success() => return SyncOutcome::Synced,
        Ok(resp) => WellmateError::SyncRejected {
            status: resp.status,
        },
        Err(e) => e,
    };
    warn!("Error updating patient info: {e}");
    ctx.alert(SYNC_FAILED_ALERT);
    match e {
        WellmateError::SyncRejected { status } => SyncOutcome::Rejected { status },
        other => SyncOutcome::Failed(other.to_string()),
    }
}
