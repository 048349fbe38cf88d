use crossterm::style::Color;
use media_menu_core::action_definitions::{Action, ColorDefinition, NamedColor};
use media_menu_core::error::{Error, Result};

fn named_color(color: NamedColor) -> Color {
    match color {
        NamedColor::Black => Color::Black,
        NamedColor::DarkGrey => Color::DarkGrey,
        NamedColor::Red => Color::Red,
        NamedColor::DarkRed => Color::DarkRed,
        NamedColor::Green => Color::Green,
        NamedColor::DarkGreen => Color::DarkGreen,
        NamedColor::Yellow => Color::Yellow,
        NamedColor::DarkYellow => Color::DarkYellow,
        NamedColor::Blue => Color::Blue,
        NamedColor::DarkBlue => Color::DarkBlue,
        NamedColor::Magenta => Color::Magenta,
        NamedColor::DarkMagenta => Color::DarkMagenta,
        NamedColor::Cyan => Color::Cyan,
        NamedColor::DarkCyan => Color::DarkCyan,
        NamedColor::White => Color::White,
        NamedColor::Grey => Color::Grey,
    }
}

/// Trait for converting color definitions to terminal colors
pub trait AsTermColor {
    fn as_crossterm_color(&self) -> Result<Option<Color>>;
}

impl AsTermColor for ColorDefinition {
    fn as_crossterm_color(&self) -> Result<Option<Color>> {
        Ok(match (self.rgb, self.ansi, &self.name) {
            (Some((r, g, b)), None, None) => Some(Color::Rgb { r, g, b }),
            (None, Some(ansi), None) => Some(Color::AnsiValue(ansi)),
            (None, None, Some(name)) => {
                let named = NamedColor::from_name(name)
                    .ok_or_else(|| Error::UnknownColorName(name.to_string()))?;
                Some(named_color(named))
            }
            (None, None, None) => None,
            _ => return Err(Error::MultipleColorTypes),
        })
    }
}

fn color_from_metadata_attribute(color_definition: &Option<ColorDefinition>) -> Result<Option<Color>> {
    match color_definition {
        None => Ok(None),
        Some(color_definition) => color_definition.as_crossterm_color(),
    }
}

/// Trait for accessing the colors of an [`Action`]
pub trait ActionColor {
    fn foreground_color(&self) -> Result<Option<Color>>;
    fn background_color(&self) -> Result<Option<Color>>;
}

impl ActionColor for Action {
    fn foreground_color(&self) -> Result<Option<Color>> {
        match &self.metadata {
            Some(metadata) => color_from_metadata_attribute(&metadata.foreground_color),
            None => Ok(None),
        }
    }

    fn background_color(&self) -> Result<Option<Color>> {
        match &self.metadata {
            Some(metadata) => color_from_metadata_attribute(&metadata.background_color),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use media_menu_core::action_definitions::{ActionMetadata, Handler};

    fn color(rgb: Option<(u8, u8, u8)>, ansi: Option<u8>, name: Option<&str>) -> ColorDefinition {
        ColorDefinition {
            rgb,
            ansi,
            name: name.map(ToString::to_string),
        }
    }

    #[test]
    fn test_rgb_color() {
        let result = color(Some((10, 20, 30)), None, None).as_crossterm_color().unwrap();
        assert_eq!(result, Some(Color::Rgb { r: 10, g: 20, b: 30 }));
    }

    #[test]
    fn test_named_color_is_case_insensitive() {
        let result = color(None, None, Some("DarkCyan")).as_crossterm_color().unwrap();
        assert_eq!(result, Some(Color::DarkCyan));
    }

    #[test]
    fn test_unknown_color_name_error() {
        let result = color(None, None, Some("mauve")).as_crossterm_color();
        assert!(matches!(result, Err(Error::UnknownColorName(name)) if name == "mauve"));
    }

    #[test]
    fn test_multiple_color_types_error() {
        let result = color(None, Some(3), Some("red")).as_crossterm_color();
        assert!(matches!(result, Err(Error::MultipleColorTypes)));
    }

    #[test]
    fn test_action_colors() {
        let action = Action {
            label: "Quit".to_string(),
            handler: Handler::Quit,
            metadata: Some(ActionMetadata {
                foreground_color: Some(color(None, Some(196), None)),
                background_color: None,
            }),
        };

        assert_eq!(action.foreground_color().unwrap(), Some(Color::AnsiValue(196)));
        assert_eq!(action.background_color().unwrap(), None);
    }
}
