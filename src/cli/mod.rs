//! CLI module for projectboard - command-line interface and subcommands.
//!
//! Provides the main entry point: TUI launch by default, plus a one-shot
//! `add` command for scripted use.

pub mod commands;

pub use commands::Cli;
