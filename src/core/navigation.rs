// src/core/navigation.rs — Page identities and transitions

use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Page {
    #[strum(serialize = "login")]
    Login,
    #[strum(serialize = "intake form")]
    IntakeForm,
    #[strum(serialize = "chat")]
    Chat,
    #[strum(serialize = "profile")]
    Profile,
}

/// What a page handler asks the router to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Remain on (re-enter) the current page
    Stay,
    Redirect(Page),
    Exit,
}

/// Result of entering a page: either it rendered, or its guard bounced.
pub enum PageLoad<P> {
    Ready(P),
    Redirect(Page),
}

