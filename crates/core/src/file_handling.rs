//! File handling and validation for media-menu configuration.
//!
//! This module reads action definitions from YAML, validates them, and turns
//! them into the [`ActionTable`] the menu runs on.

use std::fs::File;

use log::debug;

use crate::action_definitions::{
    Action, ActionDefinition, ActionTable, ColorDefinition, Handler, NamedColor,
    ProgramInvocation,
};
use crate::config::{expand_path, ActionSource};
use crate::default_actions::default_action_definitions;
use crate::error::Error::{
    AmbiguousHandler, EmptyCommand, EmptyLabel, MissingQuitAction, MultipleColorTypes,
    UnknownColorName,
};
use crate::error::{Error, Result};
use crate::interpolation::{get_templates, interpolate_command, interpolate_value, TemplateContext};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

fn validate_color(color: &Option<ColorDefinition>) -> Result<()> {
    let Some(color) = color else {
        return Ok(());
    };

    let defined_count = [color.rgb.is_some(), color.ansi.is_some(), color.name.is_some()]
        .iter()
        .filter(|&&x| x)
        .count();

    if defined_count > 1 {
        return Err(MultipleColorTypes);
    }

    if let Some(name) = &color.name {
        if NamedColor::from_name(name).is_none() {
            return Err(UnknownColorName(name.to_string()));
        }
    }

    Ok(())
}

fn validate_action(index: usize, definition: &ActionDefinition) -> Result<()> {
    if definition.label.trim().is_empty() {
        return Err(EmptyLabel(index + 1));
    }

    match (&definition.command, definition.quit) {
        (Some(command), false) => {
            if command.is_empty() || command[0].trim().is_empty() {
                return Err(EmptyCommand(definition.label.clone()));
            }
        }
        (None, true) => {}
        _ => return Err(AmbiguousHandler(definition.label.clone())),
    }

    if let Some(metadata) = &definition.metadata {
        validate_color(&metadata.foreground_color)?;
        validate_color(&metadata.background_color)?;
    }

    Ok(())
}

/// Validates every definition and requires at least one quit entry.
///
/// # Errors
///
/// Returns the first validation error found, in table order.
pub fn validate_action_definitions(definitions: &[ActionDefinition]) -> Result<()> {
    for (index, definition) in definitions.iter().enumerate() {
        validate_action(index, definition)?;
    }

    if !definitions.iter().any(|d| d.quit) {
        return Err(MissingQuitAction);
    }

    Ok(())
}

/// Loads and validates action definitions from a YAML file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The YAML is malformed or doesn't match the expected structure
/// - The file contains no actions
/// - Any action fails validation, or no quit action is present
///
/// # Examples
///
/// ```no_run
/// use media_menu_core::file_handling::get_action_definitions;
///
/// let actions = get_action_definitions("/home/me/.media-menu/actions.yml")?;
/// println!("Loaded {} actions", actions.len());
/// # Ok::<(), media_menu_core::error::Error>(())
/// ```
pub fn get_action_definitions(config_path: &str) -> Result<Vec<ActionDefinition>> {
    let config_reader = get_reader("actions", config_path)?;

    let parsed_action_defs: Vec<ActionDefinition> = serde_yaml::from_reader(config_reader)
        .map_err(|e| {
            Error::yaml_error(
                "reading".to_string(),
                "actions".to_string(),
                config_path.to_string(),
                e,
            )
        })?;

    if parsed_action_defs.is_empty() {
        return Err(Error::empty_action_definition(config_path.to_string()));
    }

    validate_action_definitions(&parsed_action_defs)?;

    Ok(parsed_action_defs)
}

fn build_action(definition: &ActionDefinition, context: &TemplateContext) -> Result<Action> {
    let handler = match &definition.command {
        Some(command) if !definition.quit => {
            let templates = get_templates(command)?;
            let mut rendered = interpolate_command(context, &templates)?
                .into_iter()
                .map(|argument| expand_path(&argument));

            let program = rendered
                .next()
                .ok_or_else(|| EmptyCommand(definition.label.clone()))?;

            let working_directory = match &definition.working_directory {
                Some(working_directory) => Some(interpolate_value(context, working_directory)?),
                None => None,
            };

            Handler::Program(ProgramInvocation {
                program,
                arguments: rendered.collect(),
                working_directory,
                environment: definition.environment.clone(),
            })
        }
        _ => Handler::Quit,
    };

    Ok(Action {
        label: definition.label.clone(),
        handler,
        metadata: definition.metadata.clone(),
    })
}

/// Renders templates and builds the immutable action table.
///
/// # Errors
///
/// Returns an error if a command uses an unknown placeholder or has
/// malformed template syntax.
pub fn build_action_table(
    definitions: &[ActionDefinition],
    context: &TemplateContext,
) -> Result<ActionTable> {
    let actions = definitions
        .iter()
        .map(|definition| build_action(definition, context))
        .collect::<Result<Vec<Action>>>()?;

    ActionTable::new(actions)
}

/// Loads the action table from its resolved source.
///
/// # Errors
///
/// Returns any error from reading, validating or rendering the definitions.
pub fn load_action_table(source: &ActionSource, context: &TemplateContext) -> Result<ActionTable> {
    let definitions = match source {
        ActionSource::File(path) => {
            debug!("Loading actions from `{}`", path);
            get_action_definitions(path)?
        }
        ActionSource::BuiltIn => {
            debug!("Using the built-in action table");
            default_action_definitions()
        }
    };

    build_action_table(&definitions, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolation::build_template_context;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_yaml(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{content}").unwrap();
        temp_file
    }

    fn color(rgb: Option<(u8, u8, u8)>, ansi: Option<u8>, name: Option<&str>) -> ColorDefinition {
        ColorDefinition {
            rgb,
            ansi,
            name: name.map(ToString::to_string),
        }
    }

    #[test]
    fn test_validate_action_empty_label() {
        let definition = ActionDefinition::program("  ", &["ls"]);
        assert!(matches!(validate_action(0, &definition), Err(EmptyLabel(1))));
    }

    #[test]
    fn test_validate_action_with_command_and_quit() {
        let mut definition = ActionDefinition::program("Both", &["ls"]);
        definition.quit = true;
        assert!(matches!(
            validate_action(0, &definition),
            Err(AmbiguousHandler(_))
        ));
    }

    #[test]
    fn test_validate_action_with_neither() {
        let mut definition = ActionDefinition::quit("Neither");
        definition.quit = false;
        assert!(matches!(
            validate_action(0, &definition),
            Err(AmbiguousHandler(_))
        ));
    }

    #[test]
    fn test_validate_action_empty_command() {
        let definition = ActionDefinition::program("Nothing", &[]);
        assert!(matches!(
            validate_action(0, &definition),
            Err(EmptyCommand(_))
        ));
    }

    #[test]
    fn test_validate_color() {
        assert!(validate_color(&None).is_ok());
        assert!(validate_color(&Some(color(Some((1, 2, 3)), None, None))).is_ok());
        assert!(validate_color(&Some(color(None, None, Some("DarkBlue")))).is_ok());
        assert!(matches!(
            validate_color(&Some(color(Some((1, 2, 3)), Some(4), None))),
            Err(MultipleColorTypes)
        ));
        assert!(matches!(
            validate_color(&Some(color(None, None, Some("mauve")))),
            Err(UnknownColorName(_))
        ));
    }

    #[test]
    fn test_validate_definitions_requires_quit() {
        let definitions = vec![ActionDefinition::program("Only", &["ls"])];
        assert!(matches!(
            validate_action_definitions(&definitions),
            Err(MissingQuitAction)
        ));
    }

    #[test]
    fn test_get_action_definitions_valid_yaml() {
        let temp_file = write_yaml(
            r#"
- label: "Sort by Artist"
  command: ["python3", "/tools/sort-by-artist.py"]
- label: "Quit"
  quit: true
"#,
        );

        let result = get_action_definitions(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].label, "Sort by Artist");
        assert!(!result[0].quit);
        assert!(result[1].quit);
    }

    #[test]
    fn test_get_action_definitions_empty_file() {
        let temp_file = write_yaml("[]");
        let result = get_action_definitions(temp_file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::EmptyActionDefinition { .. })));
    }

    #[test]
    fn test_get_action_definitions_invalid_yaml() {
        let temp_file = write_yaml("- label: [unclosed");
        let result = get_action_definitions(temp_file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::Yaml { .. })));
    }

    #[test]
    fn test_get_action_definitions_file_not_found() {
        let result = get_action_definitions("/nonexistent/actions.yml");
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_build_action_table_renders_templates() {
        let definitions = vec![
            ActionDefinition::program("Volume", &["{interpreter}", "{tools_dir}/change-volume.py"]),
            ActionDefinition::quit("Quit"),
        ];
        let context = build_template_context("/opt/tools", "python3");

        let table = build_action_table(&definitions, &context).unwrap();
        assert_eq!(table.len(), 2);

        match &table.get(0).unwrap().handler {
            Handler::Program(invocation) => {
                assert_eq!(invocation.program, "python3");
                assert_eq!(invocation.arguments, vec!["/opt/tools/change-volume.py"]);
            }
            Handler::Quit => panic!("Expected a program handler"),
        }
        assert!(table.get(1).unwrap().is_quit());
    }

    #[test]
    fn test_build_action_table_expands_tilde() {
        let definitions = vec![ActionDefinition::program("Home", &["~/bin/tool"])];
        let table = build_action_table(&definitions, &TemplateContext::new()).unwrap();

        match &table.get(0).unwrap().handler {
            Handler::Program(invocation) => assert!(!invocation.program.starts_with('~')),
            Handler::Quit => panic!("Expected a program handler"),
        }
    }

    #[test]
    fn test_load_action_table_built_in() {
        let context = build_template_context("/opt/tools", "python3");
        let table = load_action_table(&ActionSource::BuiltIn, &context).unwrap();
        assert_eq!(table.len(), 17);
        assert!(table.get(16).unwrap().is_quit());
    }
}
