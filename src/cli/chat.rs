// src/cli/chat.rs — Interactive chat REPL

use std::path::PathBuf;

use crossterm::style::Stylize;

use crate::cli::terminal::TerminalSurface;
use crate::core::context::ClientContext;
use crate::core::navigation::{Navigation, PageLoad};
use crate::core::session;
use crate::pages::{ChatPage, SidebarItem, UserInput};
use crate::render::{MessageSurface, TeeSurface, TranscriptSurface};

/// A line typed at the chat prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    Menu,
    Go(SidebarItem),
    Quit,
    Message(String),
}

pub fn parse_command(line: &str) -> ChatCommand {
    let trimmed = line.trim();
    match trimmed {
        "/menu" => ChatCommand::Menu,
        "/quit" | "/exit" => ChatCommand::Quit,
        _ => SidebarItem::ALL
            .iter()
            .find(|item| item.command() == trimmed)
            .map(|item| ChatCommand::Go(*item))
            .unwrap_or_else(|| ChatCommand::Message(line.to_string())),
    }
}

/// Run the chat page until the user navigates away or input ends.
pub async fn run_chat(
    ctx: &ClientContext,
    transcript_path: Option<&PathBuf>,
) -> anyhow::Result<Navigation> {
    let mut page = match ChatPage::load(ctx)? {
        PageLoad::Ready(p) => p,
        PageLoad::Redirect(target) => return Ok(Navigation::Redirect(target)),
    };

    let transcript = TranscriptSurface::new();
    let terminal: Box<dyn MessageSurface> = Box::new(TerminalSurface::new(&ctx.chat.assistant_name));
    let surface: Box<dyn MessageSurface> = match transcript_path {
        Some(_) => {
            let copy: Box<dyn MessageSurface> = Box::new(transcript.clone());
            Box::new(TeeSurface::new(vec![terminal, copy]))
        }
        None => terminal,
    };

    eprintln!(
        "{} | type /menu for navigation, /quit to leave\n",
        format!("wellmate v{}", env!("CARGO_PKG_VERSION")).dim()
    );
    page.attach(surface);
    page.on_ready(ctx);

    let mut input = UserInput::default();
    let nav = loop {
        let Some(line) = read_input() else {
            break Navigation::Exit;
        };

        match parse_command(&line) {
            ChatCommand::Quit => break Navigation::Exit,
            ChatCommand::Menu => {
                if page.toggle_sidebar() {
                    print_sidebar();
                } else {
                    eprintln!("  (menu hidden)");
                }
            }
            ChatCommand::Go(SidebarItem::Chat) => {}
            ChatCommand::Go(SidebarItem::Logout) => break session::logout(&ctx.store)?,
            ChatCommand::Go(item) => {
                if let Some(nav) = item.target() {
                    break nav;
                }
            }
            ChatCommand::Message(text) => {
                input.set(text);
                page.send_chat_message(ctx, &mut input).await?;
            }
        }
    };

    if let Some(path) = transcript_path {
        transcript.write_html(path, "WellMate consultation")?;
        eprintln!("  Transcript written to {}", path.display());
    }
    Ok(nav)
}

pub fn print_sidebar() {
    for item in SidebarItem::ALL {
        eprintln!("  {:<10} {}", item.command(), item.label());
    }
}

fn read_input() -> Option<String> {
    use std::io::{self, BufRead, Write};

    print!("> ");
    io::stdout().flush().ok();

    let stdin = io::stdin();
    let mut line = String::new();
    match stdin.lock().read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        Err(_) => None,
    }
}
