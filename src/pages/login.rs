// src/pages/login.rs — Login page (guest entry only)

use crate::core::context::ClientContext;
use crate::core::navigation::Navigation;
use crate::core::session;
use crate::infra::errors::WellmateError;

pub struct LoginPage;

impl LoginPage {
    pub fn guest_login(ctx: &ClientContext) -> Result<Navigation, WellmateError> {
        let (_, nav) = session::guest_login(&ctx.store)?;
        Ok(nav)
    }
}
