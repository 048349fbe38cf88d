//! Plain-text listing of the action table, for `mm --list`.

use std::io::Write;

use itertools::Itertools;
use media_menu_core::action_definitions::{ActionTable, Handler};
use media_menu_core::error::Result;

/// Writes one numbered line per action, followed by any working directory
/// and extra environment the action runs with.
pub fn write_action_table<W: Write>(out: &mut W, actions: &ActionTable) -> Result<()> {
    let width = actions.len().to_string().len();

    for (i, action) in actions.iter().enumerate() {
        match &action.handler {
            Handler::Program(invocation) => {
                writeln!(out, "[{:>width$}] {}: {}", i + 1, action.label, invocation)?;

                if let Some(working_directory) = &invocation.working_directory {
                    writeln!(out, "\tIn directory: {working_directory}")?;
                }

                if let Some(environment) = &invocation.environment {
                    writeln!(out, "\tWith environment:")?;
                    for (key, value) in environment.iter().sorted() {
                        writeln!(out, "\t\t\"{key}\": \"{value}\"")?;
                    }
                }
            }
            Handler::Quit => writeln!(out, "[{:>width$}] {}", i + 1, action.label)?,
        }
    }

    Ok(())
}
