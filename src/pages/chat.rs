// src/pages/chat.rs — Chat page: guard, greeting, send

use tracing::{debug, error, warn};

use crate::core::context::ClientContext;
use crate::core::navigation::{Page, PageLoad};
use crate::core::types::{PastConsultation, Role};
use crate::infra::errors::WellmateError;
use crate::pages::sidebar::Sidebar;
use crate::render::{MessageRenderer, MessageSurface};

/// The `user-input` field. Cleared once a message is accepted.
#[derive(Debug, Default, Clone)]
pub struct UserInput {
    value: String,
}

impl UserInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Empty input or no session: alerted, nothing rendered or sent
    Rejected,
    Replied(String),
    /// The user message stays rendered; the error was alerted
    Failed(String),
}

pub struct ChatPage {
    renderer: MessageRenderer,
    pub sidebar: Sidebar,
    past_consultations: Vec<PastConsultation>,
}

impl ChatPage {
    /// Bounce to login (with an alert) when there is no session.
    pub fn load(ctx: &ClientContext) -> Result<PageLoad<ChatPage>, WellmateError> {
        let session_id = ctx.store.session_id()?;
        debug!("Session ID on page load: {:?}", session_id);
        if session_id.is_none() {
            warn!("No sessionId found, redirecting to login");
            ctx.alert(&WellmateError::NoSession.to_string());
            return Ok(PageLoad::Redirect(Page::Login));
        }

        let past_consultations = ctx.store.past_consultations()?;
        debug!(
            "Loaded {} past consultation(s) (not displayed)",
            past_consultations.len()
        );

        Ok(PageLoad::Ready(ChatPage {
            renderer: MessageRenderer::new(&ctx.chat),
            sidebar: Sidebar::default(),
            past_consultations,
        }))
    }

    pub fn attach(&mut self, surface: Box<dyn MessageSurface>) {
        self.renderer.attach(surface);
    }

    pub fn past_consultations(&self) -> &[PastConsultation] {
        &self.past_consultations
    }

    pub fn renderer(&self) -> &MessageRenderer {
        &self.renderer
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar.toggle()
    }

    /// Readiness signal: the message surface is attached and may be seeded.
    /// Renders the greeting only while the surface is empty.
    pub fn on_ready(&mut self, ctx: &ClientContext) {
        let Some(count) = self.renderer.message_count() else {
            error!("Chat messages container not found");
            return;
        };
        debug!("Number of chat messages: {count}");
        if count == 0 {
            self.renderer.add_message(Role::Assistant, &ctx.chat.greeting);
        }
    }

    pub fn add_message(&mut self, role: Role, content: &str) {
        self.renderer.add_message(role, content);
    }

    /// Render the user's message immediately, then wait for the single reply.
    pub async fn send_chat_message(
        &mut self,
        ctx: &ClientContext,
        input: &mut UserInput,
    ) -> Result<SendOutcome, WellmateError> {
        let message = input.value().trim().to_string();
        let session_id = ctx.store.session_id()?;
        debug!("Sending message: {:?} with sessionId: {:?}", message, session_id);

        let session_id = match session_id {
            Some(id) if !message.is_empty() => id,
            _ => {
                warn!("Invalid input or sessionId");
                ctx.alert(&WellmateError::InvalidChatInput.to_string());
                return Ok(SendOutcome::Rejected);
            }
        };

        self.renderer.add_message(Role::User, &message);
        input.clear();

        match ctx.backend.chat(&session_id, &message).await {
            Ok(reply) => {
                debug!("Chat response data: {:?}", reply);
                self.renderer.add_message(Role::Assistant, &reply.response);
                Ok(SendOutcome::Replied(reply.response))
            }
            Err(e) => {
                error!("Error in sendChatMessage: {e}");
                ctx.alert(&format!("Failed to send message: {e}"));
                Ok(SendOutcome::Failed(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{context, Call, FakeBackend};
    use crate::core::types::Session;
    use crate::render::TranscriptSurface;
    use crate::store::session::PAST_CONSULTATIONS_KEY;
    use crate::store::KeyValueStore;
    use std::sync::Arc;

    fn ready(ctx: &ClientContext) -> ChatPage {
        match ChatPage::load(ctx).unwrap() {
            PageLoad::Ready(p) => p,
            PageLoad::Redirect(p) => panic!("unexpected redirect to {p}"),
        }
    }

    #[test]
    fn test_guard_alerts_and_redirects() {
        let (ctx, notifier) = context(Arc::new(FakeBackend::ok()));
        let load = ChatPage::load(&ctx).unwrap();
        assert!(matches!(load, PageLoad::Redirect(Page::Login)));
        assert_eq!(
            notifier.alerts(),
            vec!["No session found. Please log in or start as a guest."]
        );
    }

    #[test]
    fn test_load_reads_legacy_history() {
        let (ctx, _) = context(Arc::new(FakeBackend::ok()));
        ctx.store.save_session(&Session::guest(1)).unwrap();
        ctx.store
            .raw()
            .set(PAST_CONSULTATIONS_KEY, r#"[{"timestamp":3,"messages":[]}]"#)
            .unwrap();
        let page = ready(&ctx);
        assert_eq!(page.past_consultations().len(), 1);
    }

    #[test]
    fn test_greeting_seeded_once() {
        let (ctx, _) = context(Arc::new(FakeBackend::ok()));
        ctx.store.save_session(&Session::guest(1)).unwrap();
        let mut page = ready(&ctx);
        let transcript = TranscriptSurface::new();
        page.attach(Box::new(transcript.clone()));

        page.on_ready(&ctx);
        page.on_ready(&ctx);

        let msgs = transcript.messages();
        assert_eq!(msgs.len(), 1);
        assert_eq!(msgs[0].role, Role::Assistant);
        assert!(msgs[0].html.contains("Dr. Black"));
    }

    #[test]
    fn test_greeting_skipped_when_messages_exist() {
        let (ctx, _) = context(Arc::new(FakeBackend::ok()));
        ctx.store.save_session(&Session::guest(1)).unwrap();
        let mut page = ready(&ctx);
        let transcript = TranscriptSurface::new();
        page.attach(Box::new(transcript.clone()));
        page.add_message(Role::User, "already here");

        page.on_ready(&ctx);

        assert_eq!(transcript.message_count(), 1);
    }

    #[test]
    fn test_ready_without_surface_is_silent() {
        let (ctx, notifier) = context(Arc::new(FakeBackend::ok()));
        ctx.store.save_session(&Session::guest(1)).unwrap();
        let mut page = ready(&ctx);
        page.on_ready(&ctx);
        assert!(!page.renderer().is_attached());
        assert!(notifier.alerts().is_empty());
    }

    #[tokio::test]
    async fn test_send_renders_user_message_before_network() {
        let transcript = TranscriptSurface::new();
        let mut fake = FakeBackend::ok();
        fake.observe = Some(transcript.clone());
        let backend = Arc::new(fake);
        let (ctx, notifier) = context(backend.clone());
        ctx.store.save_session(&Session::guest(4)).unwrap();
        let mut page = ready(&ctx);
        page.attach(Box::new(transcript.clone()));

        let mut input = UserInput::new("  I have a headache  ");
        let outcome = page.send_chat_message(&ctx, &mut input).await.unwrap();

        assert_eq!(outcome, SendOutcome::Replied("How long have you had it?".into()));
        assert_eq!(*backend.seen_before_chat.lock().unwrap(), vec![1]);
        assert_eq!(input.value(), "");
        assert_eq!(
            backend.calls(),
            vec![Call::Chat {
                session_id: "guest-4".into(),
                message: "I have a headache".into(),
            }]
        );
        let msgs = transcript.messages();
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs[0].role, Role::User);
        assert!(msgs[0].html.contains("I have a headache"));
        assert_eq!(msgs[1].role, Role::Assistant);
        assert!(notifier.alerts().is_empty());
    }

    #[tokio::test]
    async fn test_empty_input_makes_no_call() {
        let backend = Arc::new(FakeBackend::ok());
        let (ctx, notifier) = context(backend.clone());
        ctx.store.save_session(&Session::guest(4)).unwrap();
        let mut page = ready(&ctx);
        let transcript = TranscriptSurface::new();
        page.attach(Box::new(transcript.clone()));

        let mut input = UserInput::new("   ");
        let outcome = page.send_chat_message(&ctx, &mut input).await.unwrap();

        assert_eq!(outcome, SendOutcome::Rejected);
        assert!(backend.calls().is_empty());
        assert_eq!(transcript.message_count(), 0);
        assert_eq!(
            notifier.alerts(),
            vec!["Please enter a message and ensure you are logged in."]
        );
    }

    #[tokio::test]
    async fn test_session_cleared_after_load_makes_no_call() {
        let backend = Arc::new(FakeBackend::ok());
        let (ctx, notifier) = context(backend.clone());
        ctx.store.save_session(&Session::guest(4)).unwrap();
        let mut page = ready(&ctx);
        ctx.store.clear_session().unwrap();

        let mut input = UserInput::new("hello");
        let outcome = page.send_chat_message(&ctx, &mut input).await.unwrap();

        assert_eq!(outcome, SendOutcome::Rejected);
        assert!(backend.calls().is_empty());
        assert_eq!(input.value(), "hello");
        assert_eq!(notifier.alerts().len(), 1);
    }

    #[tokio::test]
    async fn test_http_error_alerts_and_keeps_user_message() {
        let mut fake = FakeBackend::ok();
        fake.chat_reply = Err(500);
        let (ctx, notifier) = context(Arc::new(fake));
        ctx.store.save_session(&Session::guest(4)).unwrap();
        let mut page = ready(&ctx);
        let transcript = TranscriptSurface::new();
        page.attach(Box::new(transcript.clone()));

        let mut input = UserInput::new("hello");
        let outcome = page.send_chat_message(&ctx, &mut input).await.unwrap();

        assert_eq!(outcome, SendOutcome::Failed("HTTP error! status: 500".into()));
        assert_eq!(
            notifier.alerts(),
            vec!["Failed to send message: HTTP error! status: 500"]
        );
        assert_eq!(transcript.message_count(), 1);
    }
}
