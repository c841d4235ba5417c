// src/cli/terminal.rs — Terminal notifier and message surface

use crossterm::style::Stylize;
use std::io::Write;

use crate::core::notify::Notifier;
use crate::core::types::Role;
use crate::render::{MessageSurface, RenderedMessage};

pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        eprintln!("{} {}", "!".yellow().bold(), message);
    }
}

/// Prints each message to stdout as it is appended.
pub struct TerminalSurface {
    assistant_name: String,
    count: usize,
}

impl TerminalSurface {
    pub fn new(assistant_name: &str) -> Self {
        Self {
            assistant_name: assistant_name.to_string(),
            count: 0,
        }
    }
}

impl MessageSurface for TerminalSurface {
    fn append(&mut self, message: RenderedMessage) {
        let label = match message.role {
            Role::User => "You".cyan().bold(),
            Role::Assistant => self.assistant_name.as_str().green().bold(),
        };
        println!("{label}: {}", message.ansi);
        self.count += 1;
    }

    fn scroll_to_bottom(&mut self) {
        std::io::stdout().flush().ok();
    }

    fn message_count(&self) -> usize {
        self.count
    }
}
