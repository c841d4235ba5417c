// src/core/notify.rs — User-facing alerts

use std::sync::Mutex;

pub const SYNC_FAILED_ALERT: &str =
    "Failed to save patient info on server. Proceeding with local data.";

/// Blocking, user-visible notice. The only error channel users see.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Collects alerts in memory; handy for tests and scripted runs.
#[derive(Default)]
pub struct RecordingNotifier {
    alerts: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().map(|a| a.clone()).unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        if let Ok(mut a) = self.alerts.lock() {
            a.push(message.to_string());
        }
    }
}
