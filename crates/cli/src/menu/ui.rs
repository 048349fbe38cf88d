use std::fmt::Display;
use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Color::{DarkBlue, DarkGreen, Reset, Yellow};
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use media_menu_core::action_definitions::{Action, ActionTable};
use media_menu_core::error::Result;

use super::colors::ActionColor;
use super::{NEXT_KEY, PREVIOUS_KEY, SELECTED_MARKER};

/// Rows drawn above the entries
pub const HEADER_ROWS: u16 = 1;

/// The slice of entries that fits on screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ViewportState {
    pub offset: usize,
    pub height: u16,
}

impl ViewportState {
    /// Keeps the offset and fits the height to a terminal of `terminal_height` rows.
    #[must_use]
    pub fn resized(self, terminal_height: u16) -> Self {
        Self {
            offset: self.offset,
            height: terminal_height.saturating_sub(HEADER_ROWS).max(1),
        }
    }

    /// Scrolls just far enough for `cursor` to be visible, and never past
    /// the point where the last entry sits on the bottom row.
    #[must_use]
    pub fn scrolled_to(self, cursor: usize, count: usize) -> Self {
        let rows = self.height.max(1) as usize;
        let mut offset = self.offset;

        if cursor < offset {
            offset = cursor;
        } else if cursor >= offset + rows {
            offset = cursor + 1 - rows;
        }

        Self {
            offset: offset.min(count.saturating_sub(rows)),
            height: self.height,
        }
    }
}

/// One drawn line of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRow {
    pub content: String,
    pub is_selected: bool,
}

/// Pad a value to match the width of the largest value
fn pad_to_width_of<T: Display>(value: T, max_number: usize) -> String {
    let width = format!("{max_number}").len();
    format!("{:>width$}", value.to_string())
}

/// Builds the rows for `actions`, marking the one at `cursor`.
pub fn menu_rows(actions: &ActionTable, cursor: usize) -> Vec<MenuRow> {
    let count = actions.len();
    let blank_marker = " ".repeat(SELECTED_MARKER.len());

    actions
        .iter()
        .enumerate()
        .map(|(i, action)| {
            let is_selected = i == cursor;
            let marker = if is_selected {
                SELECTED_MARKER
            } else {
                blank_marker.as_str()
            };

            MenuRow {
                content: format!("{marker}[{}] {action}", pad_to_width_of(i + 1, count)),
                is_selected,
            }
        })
        .collect()
}

fn header_text(cursor: usize, count: usize) -> String {
    format!(
        "↑/{PREVIOUS_KEY}: Previous   |   ↓/{NEXT_KEY}: Next   |   <enter>: Run   |   {}/{}",
        pad_to_width_of(cursor + 1, count),
        count
    )
}

fn padding_for(content: &str, width: u16) -> String {
    let length = content.chars().count();
    " ".repeat((width as usize).saturating_sub(length))
}

fn print_header<W: Write>(out: &mut W, cursor: usize, count: usize, width: u16) -> Result<()> {
    let left_padding = "  ";
    let instructions = header_text(cursor, count);
    let right_padding = padding_for(&format!("{left_padding}{instructions}"), width);

    queue!(
        out,
        MoveTo(0, 0),
        SetBackgroundColor(DarkGreen),
        Print(left_padding),
        Print(instructions),
        Print(right_padding),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
    )?;

    Ok(())
}

fn write_row<W: Write>(
    out: &mut W,
    screen_row: u16,
    row: &MenuRow,
    action: &Action,
    width: u16,
) -> Result<()> {
    queue!(out, MoveTo(0, screen_row))?;

    if row.is_selected {
        queue!(
            out,
            SetAttribute(Attribute::Bold),
            SetBackgroundColor(DarkBlue),
            SetForegroundColor(Yellow),
        )?;
    } else {
        let background_color: Color = action.background_color()?.unwrap_or(Reset);
        let foreground_color: Color = action.foreground_color()?.unwrap_or(Reset);
        queue!(
            out,
            SetBackgroundColor(background_color),
            SetForegroundColor(foreground_color),
        )?;
    }

    queue!(
        out,
        Print(&row.content),
        Print(padding_for(&row.content, width)),
        SetAttribute(Attribute::Reset),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
    )?;

    Ok(())
}

/// Clears the screen and draws the header plus the entries inside `viewport`.
pub fn render<W: Write>(
    out: &mut W,
    actions: &ActionTable,
    cursor: usize,
    viewport: &ViewportState,
    width: u16,
) -> Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    print_header(out, cursor, actions.len(), width)?;

    let visible = menu_rows(actions, cursor)
        .into_iter()
        .zip(actions)
        .skip(viewport.offset)
        .take(viewport.height as usize);

    for (i, (row, action)) in visible.enumerate() {
        write_row(out, HEADER_ROWS + i as u16, &row, action, width)?;
    }

    out.flush()?;
    Ok(())
}
