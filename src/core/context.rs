// src/core/context.rs — Per-process client context

use std::sync::Arc;

use crate::client::ChatBackend;
use crate::core::notify::Notifier;
use crate::infra::config::ChatConfig;
use crate::store::SessionStore;

/// Everything a page handler needs, built once and passed explicitly.
pub struct ClientContext {
    pub store: SessionStore,
    pub backend: Arc<dyn ChatBackend>,
    pub notifier: Arc<dyn Notifier>,
    pub chat: ChatConfig,
}

impl ClientContext {
    pub fn new(
        store: SessionStore,
        backend: Arc<dyn ChatBackend>,
        notifier: Arc<dyn Notifier>,
        chat: ChatConfig,
    ) -> Self {
        Self {
            store,
            backend,
            notifier,
            chat,
        }
    }

    pub fn alert(&self, message: &str) {
        self.notifier.alert(message);
    }
}
