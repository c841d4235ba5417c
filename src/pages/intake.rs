// src/pages/intake.rs — Intake form page

use tracing::{debug, warn};

use crate::core::context::ClientContext;
use crate::core::intake::{submit_patient_info, IntakeForm, IntakeOutcome};
use crate::core::navigation::{Page, PageLoad};
use crate::infra::errors::WellmateError;

pub struct IntakePage {
    /// Pre-filled values for the form
    pub form: IntakeForm,
}

impl IntakePage {
    /// Without a session the form is never shown; the bounce is silent.
    pub fn load(ctx: &ClientContext) -> Result<PageLoad<IntakePage>, WellmateError> {
        let session_id = ctx.store.session_id()?;
        debug!("Checking sessionId on patient form: {:?}", session_id);
        if session_id.is_none() {
            warn!("No sessionId found, redirecting to login");
            return Ok(PageLoad::Redirect(Page::Login));
        }

        let stored = ctx.store.patient_info()?;
        debug!("Autofilling patient form with: {:?}", stored);
        Ok(PageLoad::Ready(IntakePage {
            form: IntakeForm::autofill(stored.as_ref()),
        }))
    }

    /// A rejected form stays on the page with the values as typed.
    pub async fn submit(
        &mut self,
        ctx: &ClientContext,
        form: &IntakeForm,
    ) -> Result<IntakeOutcome, WellmateError> {
        let outcome = submit_patient_info(ctx, form).await?;
        if outcome == IntakeOutcome::Invalid {
            self.form = form.clone();
        }
        Ok(outcome)
    }
}
