use std::io::{stdout, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, ExecutableCommand};
use media_menu_core::action_definitions::{ActionTable, ProgramInvocation};
use media_menu_core::error::Result;
use media_menu_core::execution::dispatch_program;
use media_menu_core::menu::{MenuDriver, MenuInput};

use super::input::{print_acknowledge_prompt, read_key, wait_for_acknowledgment};
use super::ui::{render, ViewportState};

/// Size used when the terminal size cannot be queried
const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Drives the menu on the real terminal.
///
/// The menu is drawn on the alternate screen in raw mode. Both are dropped
/// while a tool runs so the tool gets a normal interactive terminal, and
/// restored when the user acknowledges its completion.
pub struct TerminalDriver<W: Write = Stdout> {
    out: W,
    is_active: bool,
    viewport: ViewportState,
}

impl TerminalDriver<Stdout> {
    /// Enters the alternate screen and raw mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be switched.
    pub fn new() -> Result<Self> {
        let mut driver = Self::with_writer(stdout());
        driver.activate()?;
        Ok(driver)
    }
}

impl<W: Write> TerminalDriver<W> {
    fn with_writer(out: W) -> Self {
        Self {
            out,
            is_active: false,
            viewport: ViewportState::default(),
        }
    }

    fn activate(&mut self) -> Result<()> {
        if !self.is_active {
            execute!(self.out, EnterAlternateScreen, Hide)?;
            // Set before raw mode so a failure below still leaves the alternate screen on drop
            self.is_active = true;
            enable_raw_mode()?;
        }
        Ok(())
    }

    fn suspend(&mut self) -> Result<()> {
        if self.is_active {
            execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
            disable_raw_mode()?;
            execute!(self.out, Show, LeaveAlternateScreen)?;
            self.is_active = false;
        }
        Ok(())
    }

    /// Best-effort return to the normal screen, used on drop.
    fn restore(&mut self) {
        if self.is_active {
            let _ = disable_raw_mode();
            let _ = self.out.execute(Show);
            let _ = self.out.execute(LeaveAlternateScreen);
            self.is_active = false;
        }
    }
}

impl<W: Write> Drop for TerminalDriver<W> {
    fn drop(&mut self) {
        self.restore();
    }
}

impl<W: Write> MenuDriver for TerminalDriver<W> {
    fn render(&mut self, actions: &ActionTable, cursor: usize) -> Result<()> {
        self.activate()?;
        let (width, height) = terminal::size().unwrap_or(FALLBACK_SIZE);
        self.viewport = self
            .viewport
            .resized(height)
            .scrolled_to(cursor, actions.len());
        render(&mut self.out, actions, cursor, &self.viewport, width)
    }

    fn read_input(&mut self) -> Result<MenuInput> {
        read_key()
    }

    fn dispatch(&mut self, invocation: &ProgramInvocation) -> Result<()> {
        self.suspend()?;
        dispatch_program(invocation);
        self.out.flush()?;
        Ok(())
    }

    fn acknowledge(&mut self) -> Result<()> {
        print_acknowledge_prompt(&mut self.out)?;
        enable_raw_mode()?;
        let acknowledged = wait_for_acknowledgment();
        disable_raw_mode()?;
        acknowledged?;
        self.activate()
    }
}
