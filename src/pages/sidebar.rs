// src/pages/sidebar.rs — Sidebar toggle (presentational only)

use crate::core::navigation::{Navigation, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarItem {
    Chat,
    Profile,
    NewChat,
    Logout,
}

impl SidebarItem {
    pub const ALL: [SidebarItem; 4] = [
        SidebarItem::Chat,
        SidebarItem::Profile,
        SidebarItem::NewChat,
        SidebarItem::Logout,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SidebarItem::Chat => "Chat",
            SidebarItem::Profile => "Profile",
            SidebarItem::NewChat => "New chat",
            SidebarItem::Logout => "Logout",
        }
    }

    /// Chat command that triggers this item.
    pub fn command(self) -> &'static str {
        match self {
            SidebarItem::Chat => "/chat",
            SidebarItem::Profile => "/profile",
            SidebarItem::NewChat => "/new",
            SidebarItem::Logout => "/logout",
        }
    }

    /// Where the item leads. Logout has side effects and is handled by the
    /// caller through `core::session::logout`.
    pub fn target(self) -> Option<Navigation> {
        match self {
            SidebarItem::Chat => Some(Navigation::Redirect(Page::Chat)),
            SidebarItem::Profile => Some(Navigation::Redirect(Page::Profile)),
            SidebarItem::NewChat => Some(crate::core::session::new_chat()),
            SidebarItem::Logout => None,
        }
    }
}

impl std::fmt::Display for SidebarItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Default)]
pub struct Sidebar {
    open: bool,
}

impl Sidebar {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        tracing::debug!("Toggling sidebar");
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn items(&self) -> &'static [SidebarItem] {
        &SidebarItem::ALL
    }
}
