// src/cli/mod.rs — CLI definition (clap derive)

pub mod app;
pub mod chat;
pub mod prompts;
pub mod status;
pub mod terminal;

use clap::{Parser, Subcommand};

use crate::core::types::{Gender, Language};

#[derive(Parser)]
#[command(name = "wellmate", about = "Patient intake and chat client", version)]
pub struct Cli {
    /// Config file path
    #[arg(long)]
    pub config: Option<String>,

    /// Keep session state in memory only (nothing written to disk)
    #[arg(long)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Login page (start a guest session)
    Login,
    /// Patient intake form
    Intake(IntakeArgs),
    /// Chat with the assistant
    Chat {
        /// Also write the conversation to this HTML file on exit
        #[arg(long)]
        transcript: Option<String>,
    },
    /// Show the stored patient profile
    Profile,
    /// Clear the local session and patient info
    Logout,
    /// Check the backend and show local session state
    Status,
}

/// Providing `--name` and `--age` submits the form without prompting.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct IntakeArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub age: Option<String>,
    #[arg(long)]
    pub gender: Option<Gender>,
    #[arg(long)]
    pub language: Option<Language>,
    #[arg(long)]
    pub phone: Option<String>,
}

impl IntakeArgs {
    pub fn is_scripted(&self) -> bool {
        self.name.is_some() && self.age.is_some()
    }
}
