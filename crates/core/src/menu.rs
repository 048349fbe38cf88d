//! The interactive menu state machine.
//!
//! [`Menu`] holds the cursor and the current [`MenuState`]; it knows nothing
//! about terminals or processes. [`run`] drives it through a [`MenuDriver`],
//! which supplies drawing, key reading and dispatching. The loop returns
//! once the menu reaches [`MenuState::Exiting`].

use log::{debug, info};

use crate::action_definitions::{ActionTable, Handler, ProgramInvocation};
use crate::cursor::{advance, CycleDirection};
use crate::error::Result;

/// A decoded keypress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuInput {
    Move(CycleDirection),
    Confirm,
    /// Ctrl-C while in raw mode.
    Interrupt,
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuState {
    Rendering,
    AwaitingKey,
    Dispatching(usize),
    Exiting,
}

#[derive(Debug)]
pub struct Menu<'a> {
    actions: &'a ActionTable,
    cursor: usize,
    state: MenuState,
}

impl<'a> Menu<'a> {
    #[must_use]
    pub fn new(actions: &'a ActionTable) -> Self {
        Self {
            actions,
            cursor: 0,
            state: MenuState::Rendering,
        }
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Rendering -> AwaitingKey.
    pub fn rendered(&mut self) {
        if self.state == MenuState::Rendering {
            self.state = MenuState::AwaitingKey;
        }
    }

    /// Applies a keypress while awaiting one. Input in any other state is dropped.
    pub fn handle_input(&mut self, input: MenuInput) -> MenuState {
        if self.state != MenuState::AwaitingKey {
            return self.state;
        }

        self.state = match input {
            MenuInput::Move(direction) => {
                self.cursor = advance(self.cursor, direction.delta(), self.actions.len());
                MenuState::Rendering
            }
            MenuInput::Confirm => match self.actions.get(self.cursor) {
                Some(action) if action.is_quit() => MenuState::Exiting,
                Some(_) => MenuState::Dispatching(self.cursor),
                None => MenuState::Rendering,
            },
            MenuInput::Interrupt => MenuState::Exiting,
            MenuInput::Ignored => MenuState::Rendering,
        };

        self.state
    }

    /// Dispatching -> Rendering, once the child and the acknowledgment are done.
    pub fn dispatched(&mut self) {
        if matches!(self.state, MenuState::Dispatching(_)) {
            self.state = MenuState::Rendering;
        }
    }
}

/// The side effects the menu loop needs.
pub trait MenuDriver {
    /// Clears the surface and draws every label, marking the one at `cursor`.
    fn render(&mut self, actions: &ActionTable, cursor: usize) -> Result<()>;

    /// Blocks for exactly one keypress.
    fn read_input(&mut self) -> Result<MenuInput>;

    /// Runs the program to completion. Failures of the program itself are
    /// not errors here; only failures of the driver's own I/O are.
    fn dispatch(&mut self, invocation: &ProgramInvocation) -> Result<()>;

    /// Prompts and blocks for a single acknowledgment keypress.
    fn acknowledge(&mut self) -> Result<()>;
}

/// Runs the menu until the user quits.
///
/// # Errors
///
/// Returns an error only when the driver fails; delegated programs never
/// end the loop.
pub fn run<D: MenuDriver>(actions: &ActionTable, driver: &mut D) -> Result<()> {
    let mut menu = Menu::new(actions);

    loop {
        match menu.state() {
            MenuState::Rendering => {
                driver.render(actions, menu.cursor())?;
                menu.rendered();
            }
            MenuState::AwaitingKey => {
                let input = driver.read_input()?;
                debug!("Menu input: {:?}", input);
                menu.handle_input(input);
            }
            MenuState::Dispatching(index) => {
                if let Some(action) = actions.get(index) {
                    if let Handler::Program(invocation) = &action.handler {
                        info!("Dispatching `{}`: {}", action.label, invocation);
                        driver.dispatch(invocation)?;
                        driver.acknowledge()?;
                    }
                }
                menu.dispatched();
            }
            MenuState::Exiting => {
                info!("Quit selected, leaving the menu");
                return Ok(());
            }
        }
    }
}
