// src/render/mod.rs — Message rendering

pub mod markdown;
pub mod surface;

pub use surface::{MessageSurface, RenderedMessage, TeeSurface, TranscriptSurface};

use tracing::error;

use crate::core::types::Role;
use crate::infra::config::ChatConfig;

/// Appends role-tagged messages to an attached surface.
///
/// With no surface attached every call is logged and dropped, the same way
/// a page without a message container ignores render requests.
pub struct MessageRenderer {
    surface: Option<Box<dyn MessageSurface>>,
    user_avatar: String,
    assistant_avatar: String,
}

impl MessageRenderer {
    pub fn new(chat: &ChatConfig) -> Self {
        Self {
            surface: None,
            user_avatar: chat.user_avatar.clone(),
            assistant_avatar: chat.assistant_avatar.clone(),
        }
    }

    pub fn with_surface(mut self, surface: Box<dyn MessageSurface>) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn attach(&mut self, surface: Box<dyn MessageSurface>) {
        self.surface = Some(surface);
    }

    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    /// Number of rendered messages, or `None` without a surface.
    pub fn message_count(&self) -> Option<usize> {
        self.surface.as_ref().map(|s| s.message_count())
    }

    pub fn avatar_for(&self, role: Role) -> &str {
        match role {
            Role::User => &self.user_avatar,
            Role::Assistant => &self.assistant_avatar,
        }
    }

    pub fn add_message(&mut self, role: Role, content: &str) {
        let avatar = self.avatar_for(role).to_string();
        let Some(surface) = self.surface.as_mut() else {
            error!("Chat messages container not found");
            return;
        };

        let html = format!(
            r#"<img src="{avatar}" width="30" height="30"> <div>{}</div>"#,
            markdown::to_html(content)
        );
        surface.append(RenderedMessage {
            role,
            avatar,
            html,
            ansi: markdown::to_ansi(content),
        });
        surface.scroll_to_bottom();
    }
}
