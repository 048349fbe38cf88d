use leon::{ParseError, RenderError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not start `{}`: {}", .program, .original)]
    Spawn {
        program: String,
        original: std::io::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("For a color, only one of `rgb`, `ansi` or `name` should be defined.")]
    MultipleColorTypes,

    #[error("Unknown color name: \"{}\"", _0)]
    UnknownColorName(String),

    #[error("No actions were found in the action definition YAML. Is `{}` empty?", .path)]
    EmptyActionDefinition { path: String },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error parsing placeholder string: {}", .0)]
    Parse(#[from] ParseError),

    #[error("Error placeholder template string: {}", .0)]
    Render(#[from] RenderError),

    #[error("Terminal error: {}", .0)]
    Terminal(#[from] std::io::Error),

    #[error("Action {} has an empty label", .0)]
    EmptyLabel(usize),

    #[error("Action `{}` must define exactly one of `command` or `quit: true`", .0)]
    AmbiguousHandler(String),

    #[error("Action `{}` has an empty command", .0)]
    EmptyCommand(String),

    #[error("No quit action was defined; add an entry with `quit: true`")]
    MissingQuitAction,

    #[error("The action table is empty")]
    EmptyActionTable,
}

impl Error {
    pub fn empty_action_definition(path: String) -> Self {
        Self::EmptyActionDefinition { path }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn spawn_error(program: String, original: std::io::Error) -> Self {
        Self::Spawn { program, original }
    }
}
