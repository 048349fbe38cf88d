use std::process::{Command, ExitStatus, Stdio};
use std::sync::OnceLock;

use log::{debug, info, warn};

use crate::action_definitions::ProgramInvocation;
use crate::config::expand_working_directory;
use crate::error::{Error, Result};

/// Whether the launcher's own SIGINT handler is in place.
static INTERRUPT_HANDLER: OnceLock<bool> = OnceLock::new();

/// Stops Ctrl-C from ending the launcher while a tool has the terminal.
///
/// The terminal sends SIGINT to the whole foreground process group, so the
/// tool still receives it and decides for itself whether to stop. Outside of
/// a dispatch the menu runs in raw mode, where Ctrl-C arrives as a key.
fn absorb_interrupts() -> bool {
    *INTERRUPT_HANDLER.get_or_init(|| {
        match ctrlc::set_handler(|| debug!("Interrupt left to the running tool")) {
            Ok(()) => true,
            Err(e) => {
                warn!("Could not install interrupt handler: {e}");
                false
            }
        }
    })
}

/// Builds the [`Command`] for an invocation with inherited standard streams.
pub fn build_command(invocation: &ProgramInvocation) -> Command {
    let mut command = Command::new(&invocation.program);
    command
        .args(&invocation.arguments)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    if let Some(working_directory) = expand_working_directory(&invocation.working_directory) {
        command.current_dir(working_directory);
    }

    if let Some(environment) = &invocation.environment {
        info!("Executing with environment variables: {:?}", environment);
        command.envs(environment);
    }

    command
}

/// Runs an invocation and waits for it to exit.
///
/// The exit status is returned as-is; a non-zero status is not an error.
///
/// # Errors
///
/// Returns [`Error::Spawn`] if the program could not be started or waited on,
/// e.g. because the executable does not exist.
pub fn run_program(invocation: &ProgramInvocation) -> Result<ExitStatus> {
    absorb_interrupts();

    let mut command = build_command(invocation);

    let mut child = command
        .spawn()
        .map_err(|e| Error::spawn_error(invocation.program.clone(), e))?;

    child
        .wait()
        .map_err(|e| Error::spawn_error(invocation.program.clone(), e))
}

/// Runs an invocation for the menu and reports how it went.
///
/// Nothing here is an error for the caller: a program that cannot be started
/// gets one line on stderr, and any exit status is only logged. Returns the
/// exit status when the program ran.
pub fn dispatch_program(invocation: &ProgramInvocation) -> Option<ExitStatus> {
    match run_program(invocation) {
        Ok(status) => {
            info!("`{}` exited with {}", invocation, status);
            Some(status)
        }
        Err(e) => {
            warn!("{e}");
            eprintln!("{e}");
            None
        }
    }
}
