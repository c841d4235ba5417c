// src/pages/profile.rs — Profile page

use std::fmt;

use tracing::debug;

use crate::core::context::ClientContext;
use crate::core::types::PatientInfo;
use crate::infra::errors::WellmateError;
use crate::pages::sidebar::Sidebar;

const NOT_AVAILABLE: &str = "N/A";

/// Read-only view of the stored patient info. No guard: the page renders
/// with placeholders when nothing is stored.
pub struct ProfilePage {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub language: String,
    pub phone: String,
    pub session: &'static str,
    pub sidebar: Sidebar,
}

fn or_na(value: &str) -> String {
    if value.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value.to_string()
    }
}

impl ProfilePage {
    pub fn load(ctx: &ClientContext) -> Result<ProfilePage, WellmateError> {
        let info = ctx.store.patient_info()?;
        debug!("Loading profile with: {:?}", info);
        let active = ctx.store.session_id()?.is_some();
        Ok(Self::from_parts(info.as_ref(), active))
    }

    pub fn from_parts(info: Option<&PatientInfo>, session_active: bool) -> Self {
        let session = if session_active {
            "Active Session"
        } else {
            "No Active Session"
        };
        match info {
            Some(p) => Self {
                name: or_na(&p.name),
                age: if p.age > 0 {
                    p.age.to_string()
                } else {
                    NOT_AVAILABLE.into()
                },
                gender: p.gender.to_string(),
                language: p.language.to_string(),
                phone: or_na(&p.phone),
                session,
                sidebar: Sidebar::default(),
            },
            None => Self {
                name: NOT_AVAILABLE.into(),
                age: NOT_AVAILABLE.into(),
                gender: NOT_AVAILABLE.into(),
                language: NOT_AVAILABLE.into(),
                phone: NOT_AVAILABLE.into(),
                session,
                sidebar: Sidebar::default(),
            },
        }
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar.toggle()
    }
}

impl fmt::Display for ProfilePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Name:     {}", self.name)?;
        writeln!(f, "  Age:      {}", self.age)?;
        writeln!(f, "  Gender:   {}", self.gender)?;
        writeln!(f, "  Language: {}", self.language)?;
        writeln!(f, "  Phone:    {}", self.phone)?;
        write!(f, "  Session:  {}", self.session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{context, FakeBackend};
    use crate::core::types::{Gender, Language, Session};
    use std::sync::Arc;

    #[test]
    fn test_empty_profile_shows_placeholders() {
        let (ctx, notifier) = context(Arc::new(FakeBackend::ok()));
        let page = ProfilePage::load(&ctx).unwrap();
        assert_eq!(page.name, "N/A");
        assert_eq!(page.phone, "N/A");
        assert_eq!(page.session, "No Active Session");
        assert!(notifier.alerts().is_empty());
    }

    #[test]
    fn test_profile_with_data() {
        let (ctx, _) = context(Arc::new(FakeBackend::ok()));
        ctx.store.save_session(&Session::guest(1)).unwrap();
        ctx.store
            .save_patient_info(&PatientInfo {
                name: "Ada".into(),
                age: 36,
                gender: Gender::Female,
                language: Language::Arabic,
                phone: String::new(),
            })
            .unwrap();

        let page = ProfilePage::load(&ctx).unwrap();
        assert_eq!(page.age, "36");
        assert_eq!(page.language, "Arabic");
        assert_eq!(page.phone, "N/A");
        assert_eq!(page.session, "Active Session");
        let shown = page.to_string();
        assert!(shown.contains("Name:     Ada"));
        assert!(shown.ends_with("Session:  Active Session"));
    }
}
