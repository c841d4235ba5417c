// src/cli/app.rs — Context construction and page router

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use crate::cli::prompts::{self, LoginChoice};
use crate::cli::terminal::TerminalNotifier;
use crate::cli::{chat, Commands, IntakeArgs};
use crate::client::HttpBackend;
use crate::core::context::ClientContext;
use crate::core::navigation::{Navigation, Page, PageLoad};
use crate::core::session;
use crate::infra::config::Config;
use crate::pages::{IntakePage, LoginPage, ProfilePage, SidebarItem};
use crate::store::{MemoryStore, SessionStore, SqliteStore};

pub fn build_context(config: &Config, ephemeral: bool) -> anyhow::Result<ClientContext> {
    let store = if ephemeral {
        SessionStore::new(Box::new(MemoryStore::new()))
    } else {
        let path = config.store_path();
        debug!("Opening session store at {}", path.display());
        SessionStore::new(Box::new(SqliteStore::open(&path)?))
    };
    let backend = HttpBackend::new(&config.server)?;
    info!("Using API at {}", backend.base_url());

    Ok(ClientContext::new(
        store,
        Arc::new(backend),
        Arc::new(TerminalNotifier),
        config.chat.clone(),
    ))
}

#[derive(Default)]
pub struct RouterOptions {
    /// Scripted intake values, used for the first intake visit only
    pub intake: Option<IntakeArgs>,
    pub transcript: Option<PathBuf>,
}

/// What the binary does for a subcommand.
pub enum Entry {
    Route(Page, RouterOptions),
    Status,
    Done,
}

/// Map a subcommand to its start page. `logout` clears the session first
/// and then lands on the login page like any other redirect.
pub fn entry(ctx: &ClientContext, command: Option<Commands>) -> anyhow::Result<Entry> {
    let entry = match command {
        None | Some(Commands::Login) => Entry::Route(Page::Login, RouterOptions::default()),
        Some(Commands::Intake(args)) => Entry::Route(
            Page::IntakeForm,
            RouterOptions {
                intake: Some(args),
                ..Default::default()
            },
        ),
        Some(Commands::Chat { transcript }) => Entry::Route(
            Page::Chat,
            RouterOptions {
                transcript: transcript.map(PathBuf::from),
                ..Default::default()
            },
        ),
        Some(Commands::Profile) => Entry::Route(Page::Profile, RouterOptions::default()),
        Some(Commands::Logout) => match session::logout(&ctx.store)? {
            Navigation::Redirect(page) => {
                info!("Logged out");
                Entry::Route(page, RouterOptions::default())
            }
            Navigation::Stay | Navigation::Exit => Entry::Done,
        },
        Some(Commands::Status) => Entry::Status,
    };
    Ok(entry)
}

/// Enter `start` and follow navigations until a page asks to exit.
pub async fn run(ctx: &ClientContext, start: Page, mut opts: RouterOptions) -> anyhow::Result<()> {
    let mut page = start;
    loop {
        debug!("Entering {page} page");
        let nav = match page {
            Page::Login => login(ctx)?,
            Page::IntakeForm => intake(ctx, opts.intake.take()).await?,
            Page::Chat => chat::run_chat(ctx, opts.transcript.as_ref()).await?,
            Page::Profile => profile(ctx)?,
        };
        match nav {
            Navigation::Stay => continue,
            Navigation::Redirect(next) => page = next,
            Navigation::Exit => return Ok(()),
        }
    }
}

fn login(ctx: &ClientContext) -> anyhow::Result<Navigation> {
    match prompts::login_menu()? {
        LoginChoice::Guest => Ok(LoginPage::guest_login(ctx)?),
        LoginChoice::Quit => Ok(Navigation::Exit),
    }
}

async fn intake(ctx: &ClientContext, scripted: Option<IntakeArgs>) -> anyhow::Result<Navigation> {
    let mut page = match IntakePage::load(ctx)? {
        PageLoad::Ready(p) => p,
        PageLoad::Redirect(target) => return Ok(Navigation::Redirect(target)),
    };

    let mut scripted = scripted.filter(IntakeArgs::is_scripted);
    loop {
        let form = match scripted.take() {
            Some(args) => prompts::form_from_args(&args, &page.form),
            None => match prompts::intake_form(&page.form)? {
                Some(form) => form,
                None => return Ok(Navigation::Exit),
            },
        };

        // Invalid input re-prompts with what was typed
        match page.submit(ctx, &form).await?.navigation() {
            Navigation::Stay => continue,
            nav => return Ok(nav),
        }
    }
}

fn profile(ctx: &ClientContext) -> anyhow::Result<Navigation> {
    let mut page = ProfilePage::load(ctx)?;
    println!("{page}");
    println!();

    page.toggle_sidebar();
    let items = page.sidebar.items().to_vec();
    let choice = match inquire::Select::new("Menu:", items).prompt() {
        Ok(item) => item,
        Err(_) => return Ok(Navigation::Exit),
    };
    match choice {
        SidebarItem::Profile => Ok(Navigation::Stay),
        SidebarItem::Logout => Ok(session::logout(&ctx.store)?),
        item => Ok(item.target().unwrap_or(Navigation::Stay)),
    }
}
