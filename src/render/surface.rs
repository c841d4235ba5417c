// src/render/surface.rs — Message surfaces (where rendered messages land)

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::core::types::Role;
use crate::infra::errors::WellmateError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub role: Role,
    pub avatar: String,
    /// `<img ...> <div>...</div>` node body
    pub html: String,
    /// Terminal rendition of the content
    pub ansi: String,
}

/// A scrollable, append-only list of rendered messages.
pub trait MessageSurface {
    fn append(&mut self, message: RenderedMessage);
    fn scroll_to_bottom(&mut self);
    fn message_count(&self) -> usize;
}

#[derive(Default)]
struct Transcript {
    messages: Vec<RenderedMessage>,
    scroll: usize,
}

/// Buffering surface. Clones share one buffer, so a handle kept outside the
/// renderer observes every append.
#[derive(Clone, Default)]
pub struct TranscriptSurface {
    inner: Arc<Mutex<Transcript>>,
}

impl TranscriptSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Transcript> {
        self.inner.lock().unwrap_or_else(|p| p.into_inner())
    }

    pub fn messages(&self) -> Vec<RenderedMessage> {
        self.lock().messages.clone()
    }

    /// Index of the last message scrolled into view.
    pub fn scroll_position(&self) -> usize {
        self.lock().scroll
    }

    pub fn to_html_document(&self, title: &str) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>");
        out.push_str(title);
        out.push_str("</title></head>\n<body>\n<div id=\"chat-messages\">\n");
        for m in self.lock().messages.iter() {
            out.push_str(&format!(
                "<div class=\"chat-message {}\">{}</div>\n",
                m.role, m.html
            ));
        }
        out.push_str("</div>\n</body>\n</html>\n");
        out
    }

    pub fn write_html(&self, path: &Path, title: &str) -> Result<(), WellmateError> {
        std::fs::write(path, self.to_html_document(title))?;
        Ok(())
    }
}

impl MessageSurface for TranscriptSurface {
    fn append(&mut self, message: RenderedMessage) {
        self.lock().messages.push(message);
    }

    fn scroll_to_bottom(&mut self) {
        let mut t = self.lock();
        t.scroll = t.messages.len();
    }

    fn message_count(&self) -> usize {
        self.lock().messages.len()
    }
}

/// Forwards to several surfaces (e.g. terminal plus transcript).
pub struct TeeSurface {
    surfaces: Vec<Box<dyn MessageSurface>>,
}

impl TeeSurface {
    pub fn new(surfaces: Vec<Box<dyn MessageSurface>>) -> Self {
        Self { surfaces }
    }
}

impl MessageSurface for TeeSurface {
    fn append(&mut self, message: RenderedMessage) {
        for s in self.surfaces.iter_mut() {
            s.append(message.clone());
        }
    }

    fn scroll_to_bottom(&mut self) {
        for s in self.surfaces.iter_mut() {
            s.scroll_to_bottom();
        }
    }

    fn message_count(&self) -> usize {
        self.surfaces
            .first()
            .map(|s| s.message_count())
            .unwrap_or(0)
    }
}
