//! CLI module for coreconst
//!
//! This module provides the command-line interface over the global constant registry.
//!
//! ## Commands
//!
//! - `list` - Print every constant (or one enum group) as a table or JSON
//! - `get <NAME>` - Print the value of one constant
//! - `groups` - Print enum groups with member counts
//! - `check` - Validate name uniqueness and report aliases
//! - `reference` - Render the Markdown constant reference
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.
//! The registry is initialized once per invocation and torn down before returning.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use miette::Diagnostic;
use thiserror::Error;

use coreconst_core::{ConstantRegistry, RegistryConfig, RegistryError};

use crate::version::CORECONST_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message, an optional hint, and an exit code. The CLI entry point
/// catches these errors, renders them through miette, and exits with the code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(coreconst::cli))]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Optional follow-up hint
    #[help]
    pub help: Option<String>,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            help: None,
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Attach a hint shown below the message.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl From<RegistryError> for CliError {
    fn from(err: RegistryError) -> Self {
        let help = match &err {
            RegistryError::DuplicateName { .. } => Some("rename one of the constants in the tables"),
            RegistryError::AlreadyInitialized { .. } => Some("call teardown() before initializing again"),
            RegistryError::OutOfRange { .. } => None,
        };
        let cli = CliError::failure(err.to_string());
        match help {
            Some(h) => cli.with_help(h),
            None => cli,
        }
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Inspect the global constant registry
#[derive(Parser, Debug)]
#[command(name = "coreconst")]
#[command(version = CORECONST_VERSION)]
#[command(about = "Inspect the global constant registry", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Build the registry without enum groups or doc-hide flags
    #[arg(long = "no-doc-metadata", global = true)]
    pub no_doc_metadata: bool,

    /// Reject duplicate constant names while initializing
    #[arg(long = "validate-names", global = true)]
    pub validate_names: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print constants in registration order
    List {
        /// Only list members of this enum group (e.g. `KeyList`, `Variant.Type`)
        #[arg(short, long, value_name = "GROUP")]
        group: Option<String>,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the value of a named constant
    Get {
        /// Constant name, e.g. `KEY_ESCAPE`
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Print enum groups with their member counts
    Groups,

    /// Validate constant names and report aliases
    Check,

    /// Render the Markdown constant reference
    Reference {
        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// Registry config implied by the global flags.
    pub fn registry_config(&self) -> RegistryConfig {
        let config = RegistryConfig::new().with_doc_metadata(!self.no_doc_metadata);
        if self.validate_names {
            config.with_name_validation(true)
        } else {
            config
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            let code = e.exit_code.0;
            eprintln!("{:?}", miette::Report::new(e));
            process::exit(code);
        }
    }
}

/// Execute the CLI command and return result.
///
/// Owns the registry for the duration of the command: initialize, dispatch, teardown.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let mut registry = ConstantRegistry::with_config(cli.registry_config());
    registry.initialize()?;
    tracing::debug!(count = registry.count(), "constant registry ready");

    let result = dispatch(&cli.command, &registry);

    registry.teardown();
    result
}

fn dispatch(command: &Command, registry: &ConstantRegistry) -> CliResult<ExitCode> {
    match command {
        Command::List { group, json } => {
            let out = commands::list(registry, group.as_deref(), *json)?;
            print!("{out}");
            Ok(ExitCode::SUCCESS)
        }
        Command::Get { name } => {
            let value = commands::get(registry, name)?;
            println!("{value}");
            Ok(ExitCode::SUCCESS)
        }
        Command::Groups => {
            print!("{}", commands::groups(registry));
            Ok(ExitCode::SUCCESS)
        }
        Command::Check => {
            let report = commands::check(registry)?;
            print!("{report}");
            Ok(ExitCode::SUCCESS)
        }
        Command::Reference { output } => commands::reference(registry, output.as_deref()),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_list() {
        let cli = Cli::try_parse_from(["coreconst", "list", "--group", "KeyList", "--json"]).unwrap();
        if let Command::List { group, json } = cli.command {
            assert_eq!(group.as_deref(), Some("KeyList"));
            assert!(json);
        } else {
            panic!("Expected List command");
        }
    }

    #[test]
    fn test_cli_parse_get() {
        let cli = Cli::try_parse_from(["coreconst", "get", "KEY_ESCAPE"]).unwrap();
        assert!(matches!(cli.command, Command::Get { ref name } if name == "KEY_ESCAPE"));
    }

    #[test]
    fn test_cli_parse_reference_output() {
        let cli = Cli::try_parse_from(["coreconst", "reference", "-o", "docs/constants.md"]).unwrap();
        if let Command::Reference { output } = cli.command {
            assert_eq!(output, Some(PathBuf::from("docs/constants.md")));
        } else {
            panic!("Expected Reference command");
        }
    }

    #[test]
    fn test_global_flags_map_to_config() {
        let cli = Cli::try_parse_from(["coreconst", "groups", "--no-doc-metadata", "--validate-names"]).unwrap();
        let config = cli.registry_config();
        assert!(!config.include_doc_metadata);
        assert!(config.validate_names);
    }

    #[test]
    fn test_default_flags_keep_metadata() {
        let cli = Cli::try_parse_from(["coreconst", "check"]).unwrap();
        assert!(cli.registry_config().include_doc_metadata);
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["coreconst"]).is_err());
    }

    #[test]
    fn test_registry_error_conversion_keeps_message() {
        let err: CliError = RegistryError::AlreadyInitialized { count: 3 }.into();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("already initialized"));
        assert!(err.help.is_some());
    }
}
