//! Command-line argument parsing.
//!
//! Every option is optional: run with no arguments, `mm` shows the built-in
//! menu (or the one at the default config path, if present).

use clap::Parser;

/// Command-line arguments for the `mm` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use media_menu_cli::cli_args::Args;
///
/// let args = Args::parse_from(["mm", "--tools-dir", "/opt/media-tools"]);
/// assert_eq!(args.tools_dir, Some("/opt/media-tools".to_string()));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the action table YAML.
    ///
    /// If not provided, `~/.media-menu/actions.yml` is used when it exists,
    /// otherwise the built-in table.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Directory holding the tool scripts, substituted for `{tools_dir}`.
    ///
    /// Defaults to `~/.media-menu/tools`.
    #[arg(long, short = 't', env = "MEDIA_MENU_TOOLS_DIR")]
    pub tools_dir: Option<String>,

    /// Interpreter for the tool scripts, substituted for `{interpreter}`.
    ///
    /// Defaults to `python3`.
    #[arg(long, short = 'i', env = "MEDIA_MENU_INTERPRETER")]
    pub interpreter: Option<String>,

    /// Print the numbered action table and exit without showing the menu.
    #[arg(long, action)]
    pub list: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["mm"]);

        assert!(args.config_path.is_none());
        assert!(!args.list);
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from([
            "mm",
            "-c",
            "/custom/actions.yml",
            "-t",
            "/custom/tools",
            "-i",
            "pypy3",
        ]);

        assert_eq!(args.config_path, Some("/custom/actions.yml".to_string()));
        assert_eq!(args.tools_dir, Some("/custom/tools".to_string()));
        assert_eq!(args.interpreter, Some("pypy3".to_string()));
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from([
            "mm",
            "--config-path",
            "/custom/actions.yml",
            "--tools-dir",
            "/custom/tools",
            "--interpreter",
            "pypy3",
            "--list",
        ]);

        assert_eq!(args.config_path, Some("/custom/actions.yml".to_string()));
        assert_eq!(args.tools_dir, Some("/custom/tools".to_string()));
        assert_eq!(args.interpreter, Some("pypy3".to_string()));
        assert!(args.list);
    }

    #[test]
    fn test_args_reject_positional_arguments() {
        assert!(Args::try_parse_from(["mm", "convert"]).is_err());
    }
}
