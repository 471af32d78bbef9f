//! Terminal UI for the Mythforge character builder.
//!
//! A single-screen ratatui interface: the summary form edits the character
//! draft, and two modal popups (the dice roller and the blessing wizard)
//! hand results back as values when they complete.

pub mod app;
pub mod shared;
pub mod terminal;
pub mod views;
