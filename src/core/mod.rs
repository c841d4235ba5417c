// src/core/mod.rs — Client-side session, intake and navigation logic

pub mod context;
pub mod intake;
pub mod navigation;
pub mod notify;
pub mod session;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
