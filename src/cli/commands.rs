//! CLI command definitions using clap.
//!
//! Without a subcommand the board opens in the terminal UI; `add` runs one
//! submission against a fresh board and prints the result.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// projectboard - track active and finished projects
#[derive(Parser, Debug)]
#[command(name = "projectboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit one project and print the resulting lists
    Add {
        /// Project title
        #[arg(short, long, default_value = "")]
        title: String,

        /// Project description (at least 5 characters)
        #[arg(short, long, default_value = "")]
        description: String,

        /// Number of people assigned (1-5)
        #[arg(short, long, default_value = "")]
        people: String,

        /// Print the store contents as JSON instead of lists
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_no_args() {
        // No args should result in None command (TUI mode)
        let cli = Cli::try_parse_from(["projectboard"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["projectboard", "-v"]).unwrap();
        assert!(cli.is_verbose());
    }

    #[test]
    fn test_cli_config_option() {
        let cli = Cli::try_parse_from(["projectboard", "-c", "/path/to/projectboard.yml"]).unwrap();
        assert_eq!(cli.config.as_ref(), Some(&PathBuf::from("/path/to/projectboard.yml")));
    }

    #[test]
    fn test_add_command() {
        let cli = Cli::try_parse_from([
            "projectboard",
            "add",
            "--title",
            "Build API",
            "--description",
            "Design and build the REST API",
            "--people",
            "3",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Add {
                title,
                description,
                people,
                json,
            }) => {
                assert_eq!(title, "Build API");
                assert_eq!(description, "Design and build the REST API");
                assert_eq!(people, "3");
                assert!(!json);
            }
            _ => panic!("Expected add command"),
        }
    }

    #[test]
    fn test_add_short_flags_and_json() {
        let cli = Cli::try_parse_from(["projectboard", "add", "-t", "T", "-d", "long enough", "-p", "1", "--json"])
            .unwrap();
        match cli.command {
            Some(Commands::Add { people, json, .. }) => {
                assert_eq!(people, "1");
                assert!(json);
            }
            _ => panic!("Expected add command"),
        }
    }

    #[test]
    fn test_add_missing_fields_default_empty() {
        // Left to the form rules to reject
        let cli = Cli::try_parse_from(["projectboard", "add"]).unwrap();
        match cli.command {
            Some(Commands::Add { title, people, .. }) => {
                assert!(title.is_empty());
                assert!(people.is_empty());
            }
            _ => panic!("Expected add command"),
        }
    }

    #[test]
    fn test_help_works() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version_flag() {
        let result = Cli::try_parse_from(["projectboard", "--version"]);
        // Version flag causes early exit with error (expected)
        assert!(result.is_err());
    }
}
