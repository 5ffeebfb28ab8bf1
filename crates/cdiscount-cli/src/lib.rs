//! Command line front end for the Cdiscount Marketplace API
//!
//! Commands print the decoded result records as JSON on stdout; logs go to
//! stderr.

pub mod cli;
pub mod command;
pub mod settings;
pub mod startup;

pub use cli::{Cli, Command};
pub use settings::Settings;
