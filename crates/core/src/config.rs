//! Configuration path utilities for media-menu.
//!
//! This module resolves the action table file, the tools directory and the
//! interpreter used by the built-in entries, expanding `~` where needed.

use std::path::Path;

/// Default path for the action table file
const DEFAULT_CONFIG_PATH: &str = "~/.media-menu/actions.yml";
/// Default directory holding the tool scripts
const DEFAULT_TOOLS_DIR: &str = "~/.media-menu/tools";

/// Default interpreter for the built-in tool scripts
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Where the action table comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionSource {
    /// A YAML file, either given explicitly or found at the default path.
    File(String),
    /// The table compiled into the binary.
    BuiltIn,
}

/// Resolves where to load the action table from.
///
/// An explicit path is always used, even if it does not exist, so that a
/// typo surfaces as an error. Otherwise the default path is used when a
/// file is present there, and the built-in table when it is not.
///
/// # Examples
///
/// ```
/// use media_menu_core::config::{get_action_source, ActionSource};
///
/// let source = get_action_source(&Some("/etc/media-menu.yml".to_string()));
/// assert_eq!(source, ActionSource::File("/etc/media-menu.yml".to_string()));
/// ```
pub fn get_action_source(config_path_arg: &Option<String>) -> ActionSource {
    if let Some(config_path) = config_path_arg {
        return ActionSource::File(shellexpand::tilde(config_path).to_string());
    }

    let default_path = shellexpand::tilde(DEFAULT_CONFIG_PATH).to_string();
    if Path::new(&default_path).exists() {
        ActionSource::File(default_path)
    } else {
        ActionSource::BuiltIn
    }
}

/// Resolves the tools directory, falling back to the default.
pub fn get_tools_dir(tools_dir_arg: &Option<String>) -> String {
    let tools_dir = match tools_dir_arg {
        Some(tools_dir) => tools_dir,
        None => DEFAULT_TOOLS_DIR,
    };

    shellexpand::tilde(tools_dir)
        .trim_end_matches('/')
        .to_string()
}

/// Resolves the interpreter, falling back to [`DEFAULT_INTERPRETER`].
pub fn get_interpreter(interpreter_arg: &Option<String>) -> String {
    match interpreter_arg {
        Some(interpreter) if !interpreter.trim().is_empty() => interpreter.clone(),
        _ => DEFAULT_INTERPRETER.to_string(),
    }
}

/// Expands shell variables like `~` in a path-like value.
pub fn expand_path(value: &str) -> String {
    shellexpand::tilde(value).to_string()
}

/// Expands shell variables in a working directory path.
///
/// # Examples
///
/// ```
/// use media_menu_core::config::expand_working_directory;
///
/// let expanded = expand_working_directory(&Some("~/music".to_string()));
/// assert!(expanded.is_some());
///
/// assert!(expand_working_directory(&None).is_none());
/// ```
pub fn expand_working_directory(working_directory: &Option<String>) -> Option<String> {
    working_directory.as_deref().map(expand_path)
}
