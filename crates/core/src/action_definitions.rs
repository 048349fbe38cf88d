use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ColorDefinition {
    pub rgb: Option<(u8, u8, u8)>,
    pub ansi: Option<u8>,
    pub name: Option<String>,
}

/// Colors that can be given by name in action metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Black,
    DarkGrey,
    Red,
    DarkRed,
    Green,
    DarkGreen,
    Yellow,
    DarkYellow,
    Blue,
    DarkBlue,
    Magenta,
    DarkMagenta,
    Cyan,
    DarkCyan,
    White,
    Grey,
}

const NAMED_COLORS: &[(&str, NamedColor)] = &[
    ("black", NamedColor::Black),
    ("darkgrey", NamedColor::DarkGrey),
    ("red", NamedColor::Red),
    ("darkred", NamedColor::DarkRed),
    ("green", NamedColor::Green),
    ("darkgreen", NamedColor::DarkGreen),
    ("yellow", NamedColor::Yellow),
    ("darkyellow", NamedColor::DarkYellow),
    ("blue", NamedColor::Blue),
    ("darkblue", NamedColor::DarkBlue),
    ("magenta", NamedColor::Magenta),
    ("darkmagenta", NamedColor::DarkMagenta),
    ("cyan", NamedColor::Cyan),
    ("darkcyan", NamedColor::DarkCyan),
    ("white", NamedColor::White),
    ("grey", NamedColor::Grey),
];

impl NamedColor {
    /// Looks up a color name, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, color)| *color)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ActionMetadata {
    pub foreground_color: Option<ColorDefinition>,
    pub background_color: Option<ColorDefinition>,
}

/// One entry of the action YAML file.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ActionDefinition {
    pub label: String,
    pub command: Option<Vec<String>>,
    #[serde(default)]
    pub quit: bool,
    pub working_directory: Option<String>,
    pub environment: Option<HashMap<String, String>>,
    pub metadata: Option<ActionMetadata>,
}

impl ActionDefinition {
    pub fn quit(label: &str) -> Self {
        Self {
            label: label.to_string(),
            command: None,
            quit: true,
            working_directory: None,
            environment: None,
            metadata: None,
        }
    }

    pub fn program(label: &str, command: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            command: Some(command.iter().map(ToString::to_string).collect()),
            quit: false,
            working_directory: None,
            environment: None,
            metadata: None,
        }
    }
}

impl Display for ActionDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match (&self.command, self.quit) {
            (Some(command), false) => write!(formatter, "{} ({})", self.label, command.join(" ")),
            _ => formatter.write_str(&self.label),
        }
    }
}

/// A fully rendered external program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramInvocation {
    pub program: String,
    pub arguments: Vec<String>,
    pub working_directory: Option<String>,
    pub environment: Option<HashMap<String, String>>,
}

impl Display for ProgramInvocation {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.program)?;
        for argument in &self.arguments {
            write!(formatter, " {argument}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handler {
    Program(ProgramInvocation),
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub label: String,
    pub handler: Handler,
    pub metadata: Option<ActionMetadata>,
}

impl Action {
    #[must_use]
    pub fn is_quit(&self) -> bool {
        matches!(self.handler, Handler::Quit)
    }
}

impl Display for Action {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.label)
    }
}

/// The ordered, immutable list of menu entries.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionTable {
    actions: Vec<Action>,
}

impl ActionTable {
    /// # Errors
    ///
    /// Returns [`Error::EmptyActionTable`] when `actions` is empty, as the
    /// cursor needs at least one entry to point at.
    pub fn new(actions: Vec<Action>) -> Result<Self> {
        if actions.is_empty() {
            return Err(Error::EmptyActionTable);
        }

        Ok(Self { actions })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Action> {
        self.actions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }
}

impl<'a> IntoIterator for &'a ActionTable {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_color_lookup() {
        assert_eq!(NamedColor::from_name("DarkCyan"), Some(NamedColor::DarkCyan));
        assert_eq!(NamedColor::from_name("grey"), Some(NamedColor::Grey));
        assert_eq!(NamedColor::from_name("gray"), None);
        assert_eq!(NAMED_COLORS.len(), 16);
    }

    fn create_test_action(label: &str) -> Action {
        Action {
            label: label.to_string(),
            handler: Handler::Program(ProgramInvocation {
                program: "echo".to_string(),
                arguments: vec!["hello".to_string()],
                working_directory: None,
                environment: None,
            }),
            metadata: None,
        }
    }

    #[test]
    fn test_action_definition_display_with_command() {
        let definition = ActionDefinition::program("Greet", &["echo", "hi"]);
        assert_eq!(format!("{definition}"), "Greet (echo hi)");
    }

    #[test]
    fn test_action_definition_display_quit() {
        let definition = ActionDefinition::quit("Quit");
        assert_eq!(format!("{definition}"), "Quit");
    }

    #[test]
    fn test_program_invocation_display() {
        let invocation = ProgramInvocation {
            program: "python3".to_string(),
            arguments: vec!["/tools/change-volume.py".to_string()],
            working_directory: None,
            environment: None,
        };
        assert_eq!(format!("{invocation}"), "python3 /tools/change-volume.py");
    }

    #[test]
    fn test_action_is_quit() {
        let quit = Action {
            label: "Quit".to_string(),
            handler: Handler::Quit,
            metadata: None,
        };
        assert!(quit.is_quit());
        assert!(!create_test_action("Greet").is_quit());
    }

    #[test]
    fn test_action_table_rejects_empty() {
        assert!(matches!(
            ActionTable::new(Vec::new()),
            Err(Error::EmptyActionTable)
        ));
    }

    #[test]
    fn test_action_table_preserves_order() {
        let table = ActionTable::new(vec![
            create_test_action("First"),
            create_test_action("Second"),
            create_test_action("Second"),
        ])
        .unwrap();

        let labels: Vec<&str> = table.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["First", "Second", "Second"]);
        assert_eq!(table.len(), 3);
        assert!(table.get(3).is_none());
    }
}
