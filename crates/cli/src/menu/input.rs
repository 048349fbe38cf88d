use std::io::Write;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::queue;
use media_menu_core::cursor::CycleDirection::{Down, Up};
use media_menu_core::error::Result;
use media_menu_core::menu::MenuInput;

use super::{ACKNOWLEDGE_PROMPT, NEXT_KEY, PREVIOUS_KEY};

/// Decodes a key event. Returns `None` for releases and repeats, which are
/// not keypresses of their own.
pub fn decode_key_event(key_event: KeyEvent) -> Option<MenuInput> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    Some(match key_event.code {
        KeyCode::Up | KeyCode::Char(PREVIOUS_KEY) => MenuInput::Move(Up),
        KeyCode::Down | KeyCode::Char(NEXT_KEY) => MenuInput::Move(Down),
        KeyCode::Enter => MenuInput::Confirm,
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            MenuInput::Interrupt
        }
        _ => MenuInput::Ignored,
    })
}

/// Blocks until a single keypress arrives. Raw mode must already be enabled.
pub fn read_key() -> Result<MenuInput> {
    loop {
        if let Event::Key(key_event) = event::read()? {
            if let Some(input) = decode_key_event(key_event) {
                return Ok(input);
            }
        }
    }
}

/// Prints the acknowledgment prompt to `out`.
pub fn print_acknowledge_prompt<W: Write>(out: &mut W) -> Result<()> {
    queue!(out, Print("\r\n"), Print(ACKNOWLEDGE_PROMPT))?;
    out.flush()?;
    Ok(())
}

/// Blocks for any keypress. Raw mode must already be enabled.
pub fn wait_for_acknowledgment() -> Result<()> {
    loop {
        if let Event::Key(key_event) = event::read()? {
            if key_event.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
