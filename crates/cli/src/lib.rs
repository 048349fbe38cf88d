//! Media Menu CLI Library
//!
//! This crate provides the terminal front end for media-menu: argument
//! parsing, the interactive menu on top of crossterm, and the `--list`
//! output.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`menu`]: Key decoding, drawing, and the terminal driver for the core menu loop
//! - [`listing`]: Plain-text dump of the action table
//!
//! # Examples
//!
//! ```bash
//! # Show the menu
//! mm
//!
//! # Use scripts from another directory
//! mm --tools-dir /opt/media-tools
//!
//! # Check a custom action file without entering the menu
//! mm --config-path ./actions.yml --list
//! ```

pub mod cli_args;
pub mod listing;
pub mod menu;
