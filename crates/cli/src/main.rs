use std::io::stdout;
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use media_menu_cli::cli_args::Args;
use media_menu_cli::listing::write_action_table;
use media_menu_cli::menu::TerminalDriver;
use media_menu_core::action_definitions::ActionTable;
use media_menu_core::error::Result;
use media_menu_core::interpolation::build_template_context;
use media_menu_core::{config, file_handling, menu};

/// Resolve paths and load the action table
fn initialize_actions(args: &Args) -> Result<ActionTable> {
    let tools_dir = config::get_tools_dir(&args.tools_dir);
    let interpreter = config::get_interpreter(&args.interpreter);
    debug!("Tools directory: `{}`, interpreter: `{}`", tools_dir, interpreter);

    let source = config::get_action_source(&args.config_path);
    debug!("Action source: {:?}", source);

    let context = build_template_context(&tools_dir, &interpreter);
    file_handling::load_action_table(&source, &context)
}

fn execute() -> Result<()> {
    let args = Args::parse();

    let actions = initialize_actions(&args)?;

    if args.list {
        return write_action_table(&mut stdout(), &actions);
    }

    // Restores the terminal when dropped, including on error
    let mut driver = TerminalDriver::new()?;
    menu::run(&actions, &mut driver)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
