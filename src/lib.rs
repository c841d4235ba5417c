// src/lib.rs — WellMate: patient intake and chat client

pub mod cli;
pub mod client;
pub mod core;
pub mod infra;
pub mod pages;
pub mod render;
pub mod store;
