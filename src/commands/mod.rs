//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod inspect_command;
pub mod extract_command;
pub mod batch_command;

pub use command_traits::{Command, CommandFactory};
pub use inspect_command::InspectCommand;
pub use extract_command::ExtractCommand;
pub use batch_command::BatchCommand;

use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::extractor::errors::ExtractResult;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct CropkitCommandFactory;

impl CropkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        CropkitCommandFactory
    }
}

impl Default for CropkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for CropkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> ExtractResult<Box<dyn Command + 'a>> {
        // Determine which command to run based on args
        if args.get_flag("batch") {
            Ok(Box::new(BatchCommand::new(args, logger)?))
        } else if args.get_flag("extract") {
            Ok(Box::new(ExtractCommand::new(args, logger)?))
        } else {
            // Default to inspect command
            Ok(Box::new(InspectCommand::new(args, logger)?))
        }
    }
}
