//! CLI argument definitions for the scout file checker.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use dvw_model::FileType;

#[derive(Parser)]
#[command(
    name = "dvw-check",
    version,
    about = "Check volleyball scout files for internal consistency",
    long_about = "Check a parsed volleyball scout file for scouting errors.\n\n\
                  Reads the play-by-play table (CSV), an optional roster and the raw\n\
                  scout text, and reports inconsistencies in skill chains, court\n\
                  positions, point attribution, scores and rotations."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a play log and print its diagnostics.
    Validate(ValidateArgs),

    /// List the validation rules.
    Rules,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Play-by-play table exported by the scout file parser.
    #[arg(long = "plays", value_name = "CSV")]
    pub plays: PathBuf,

    /// Team rosters (team, player_id, number, name, role, special_role).
    #[arg(long = "roster", value_name = "CSV")]
    pub roster: Option<PathBuf>,

    /// Raw scout file, used to quote lines and read video times.
    #[arg(long = "source", value_name = "DVW")]
    pub source: Option<PathBuf>,

    /// Validation level: 0 off, 1 major only, 2 major and moderate, 3 everything.
    #[arg(
        long = "level",
        default_value_t = 2,
        value_parser = clap::value_parser!(u8).range(0..=3)
    )]
    pub level: u8,

    /// Indoor or beach scouting.
    #[arg(long = "file-type", value_enum, default_value = "indoor")]
    pub file_type: FileTypeArg,

    /// Options file (JSON).
    #[arg(long = "options", value_name = "JSON")]
    pub options: Option<PathBuf>,

    /// Attack code exempt from the back-row attack check (repeatable).
    ///
    /// Replaces the codes from the options file when given.
    #[arg(long = "setter-tip-code", value_name = "CODE")]
    pub setter_tip_codes: Vec<String>,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FileTypeArg {
    Indoor,
    Beach,
}

impl From<FileTypeArg> for FileType {
    fn from(arg: FileTypeArg) -> Self {
        match arg {
            FileTypeArg::Indoor => FileType::Indoor,
            FileTypeArg::Beach => FileType::Beach,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
