//! CLI command definitions for the `rforge` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod build;
pub mod catalog;
pub mod demo;
pub mod playstyle;
pub mod suggest;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Character build advisor: stat growth by playstyle and weapon suggestions.
#[derive(Parser)]
#[command(name = "rforge", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Only log errors. Command output is still printed.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Read the catalogs from DIR/classes.json and DIR/weapons.json instead
    /// of the API.
    #[arg(long, global = true, value_name = "DIR")]
    pub offline: Option<PathBuf>,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the character classes in the catalog.
    Classes,

    /// List available playstyles with their stat weights.
    Playstyles,

    /// Build a character and grow its stats under a playstyle.
    Build {
        /// Character name.
        #[arg(short, long)]
        name: String,

        /// Character level (at least 1).
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        level: u32,

        /// Starting class, matched exactly (e.g. "Hero").
        #[arg(short, long = "class")]
        class_name: String,

        /// Playstyle slug (see `rforge playstyles`).
        #[arg(short, long, default_value = "dexterity")]
        playstyle: String,

        /// Also suggest weapons for the playstyle's scaling stat.
        #[arg(long)]
        suggest: bool,
    },

    /// Suggest weapons for a playstyle or a raw scaling token.
    Suggest {
        /// Playstyle slug whose scaling stat drives the search.
        #[arg(required_unless_present = "token")]
        playstyle: Option<String>,

        /// Scaling token to match directly (e.g. "Str", "Dex", "Int").
        #[arg(long, conflicts_with = "playstyle")]
        token: Option<String>,
    },

    /// Run the sample session: a level 20 Hero on the dexterity playstyle,
    /// then weapon suggestions for the strength and dexterity playstyles.
    Demo,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
