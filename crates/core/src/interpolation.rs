use std::collections::HashMap;

use leon::Template;

use crate::error::Result;

/// Placeholder holding the tools directory.
pub const TOOLS_DIR_KEY: &str = "tools_dir";
/// Placeholder holding the interpreter for the tool scripts.
pub const INTERPRETER_KEY: &str = "interpreter";

pub type TemplateContext = HashMap<String, String>;

pub fn build_template_context(tools_dir: &str, interpreter: &str) -> TemplateContext {
    let mut context = TemplateContext::new();
    context.insert(TOOLS_DIR_KEY.to_string(), tools_dir.to_string());
    context.insert(INTERPRETER_KEY.to_string(), interpreter.to_string());
    context
}

pub fn get_templates(command: &[String]) -> Result<Vec<Template<'_>>> {
    let mut templates: Vec<Template> = Vec::new();

    for argument in command {
        templates.push(Template::parse(argument.as_ref())?);
    }

    Ok(templates)
}

pub fn interpolate_command(context: &TemplateContext, templates: &[Template]) -> Result<Vec<String>> {
    let mut interpolated_arguments: Vec<String> = Vec::new();

    for template in templates {
        interpolated_arguments.push(template.render(&context)?);
    }

    Ok(interpolated_arguments)
}

/// Renders a single templated value, e.g. a working directory.
pub fn interpolate_value(context: &TemplateContext, value: &str) -> Result<String> {
    Ok(Template::parse(value)?.render(&context)?)
}
