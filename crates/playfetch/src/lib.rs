//! Command-line front end for playfetch.
//!
//! Wires configuration, the HTTP metadata provider and the featured catalog
//! into a set of subcommands. Side effects that a browser would perform
//! (history navigation, downloads, clipboard, redirects) are reported on
//! stdout by [`navigator::TerminalNavigator`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod navigator;

pub use cli::{Cli, Command};
pub use config::FinderConfig;
pub use error::{CliError, Result};
