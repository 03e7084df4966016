//! Command-line arguments for the desktop application.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use ums_model::SelectionPolicy;

#[derive(Parser)]
#[command(
    name = "user-management-studio",
    version,
    about = "User Management Studio - add, edit and delete user records",
    long_about = "A single-window form for managing user records.\n\n\
                  Records live in memory only and are discarded when the window closes."
)]
pub struct Cli {
    /// Name greeted at the top of the dashboard.
    #[arg(long, short = 'n', value_name = "NAME", value_parser = parse_display_name)]
    pub name: String,

    /// Settings file to use instead of the platform config location.
    #[arg(long = "settings", value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Force the dark theme for this run.
    #[arg(long, conflicts_with = "light")]
    pub dark: bool,

    /// Force the light theme for this run.
    #[arg(long)]
    pub light: bool,

    /// Override what happens to the edit selection when another row is deleted.
    #[arg(long = "selection-policy", value_enum)]
    pub selection_policy: Option<SelectionPolicyArg>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Include user names, emails and phone numbers in log output.
    #[arg(long = "log-data")]
    pub log_data: bool,
}

impl Cli {
    /// Theme override from `--dark` / `--light`, if any.
    pub fn dark_mode_override(&self) -> Option<bool> {
        match (self.dark, self.light) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

fn parse_display_name(raw: &str) -> Result<String, String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err("display name must not be empty".to_string());
    }
    Ok(name.to_string())
}

/// CLI selection policy choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum SelectionPolicyArg {
    KeepIndex,
    FollowRecord,
}

impl From<SelectionPolicyArg> for SelectionPolicy {
    fn from(arg: SelectionPolicyArg) -> Self {
        match arg {
            SelectionPolicyArg::KeepIndex => Self::KeepIndex,
            SelectionPolicyArg::FollowRecord => Self::FollowRecord,
        }
    }
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
