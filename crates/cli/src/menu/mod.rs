//! Interactive menu on the terminal.
//!
//! This module provides the crossterm side of the launcher: decoding keys,
//! drawing the action list, and the [`TerminalDriver`] that plugs both into
//! the core menu loop.
//!
//! # User Interface
//!
//! - Up arrow or `k` moves to the previous entry, wrapping to the last
//! - Down arrow or `j` moves to the next entry, wrapping to the first
//! - Enter runs the highlighted entry
//! - Ctrl-C leaves the menu, as does selecting "Quit"
//!
//! Every other key is ignored.

pub mod colors;
pub mod input;
pub mod terminal;
pub mod ui;

pub use input::{decode_key_event, read_key};
pub use terminal::TerminalDriver;
pub use ui::{menu_rows, render, MenuRow, ViewportState};

/// Character that moves the cursor to the previous entry
pub const PREVIOUS_KEY: char = 'k';
/// Character that moves the cursor to the next entry
pub const NEXT_KEY: char = 'j';
/// Prefix drawn in front of the highlighted entry
pub const SELECTED_MARKER: &str = "> ";
/// Shown after a tool exits
pub const ACKNOWLEDGE_PROMPT: &str = "Press any key to return to the menu...";
