// src/pages/mod.rs — Per-page entry points
//
// Each page is entered explicitly by the caller. Guards run on load and may
// bounce to login instead of returning a ready page.

pub mod chat;
pub mod intake;
pub mod login;
pub mod profile;
pub mod sidebar;

pub use chat::{ChatPage, SendOutcome, UserInput};
pub use intake::IntakePage;
pub use login::LoginPage;
pub use profile::ProfilePage;
pub use sidebar::{Sidebar, SidebarItem};
