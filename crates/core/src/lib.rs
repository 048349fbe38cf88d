//! Media Menu Core Library
//!
//! This crate provides the core functionality for media-menu, a terminal
//! launcher that presents a fixed list of media tools and runs the selected
//! one as a subprocess.
//!
//! # Key Features
//!
//! - **Action Definitions**: Parse and validate YAML-based action tables
//! - **Built-in Table**: A default table of media tool scripts
//! - **Templating**: `{tools_dir}` and `{interpreter}` placeholders in commands
//! - **Menu State Machine**: Cursor wrapping and the render/await/dispatch loop
//! - **Execution**: Synchronous subprocess dispatch with inherited stdio
//!
//! # Examples
//!
//! Building the built-in action table:
//!
//! ```
//! use media_menu_core::config::ActionSource;
//! use media_menu_core::file_handling::load_action_table;
//! use media_menu_core::interpolation::build_template_context;
//!
//! let context = build_template_context("/opt/media-tools", "python3");
//! let table = load_action_table(&ActionSource::BuiltIn, &context)?;
//! for action in &table {
//!     println!("{}", action);
//! }
//! # Ok::<(), media_menu_core::error::Error>(())
//! ```

pub mod action_definitions;
pub mod config;
pub mod cursor;
pub mod default_actions;
pub mod error;
pub mod execution;
pub mod file_handling;
pub mod interpolation;
pub mod menu;
