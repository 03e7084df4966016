//! User Management Studio - Desktop GUI Application
//!
//! A single-window form for adding, editing and deleting user records.

use std::io::{self, IsTerminal};

use anyhow::{Context, anyhow};
use clap::{ColorChoice, Parser};
use eframe::egui;
use tracing::level_filters::LevelFilter;
use ums_gui::app::UmsApp;
use ums_gui::cli::{Cli, LogFormatArg, LogLevelArg};
use ums_gui::logging::{LogConfig, LogFormat, init_logging};
use ums_gui::settings::{DisplaySettings, load_settings_from, settings_path};
use ums_gui::state::{AppState, RunOverrides};

const APP_TITLE: &str = "User Management Studio";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.write_global();
    init_logging(&log_config_from_cli(&cli)).context("failed to initialize logging")?;

    let path = cli.settings.clone().or_else(settings_path);
    let settings = match &path {
        Some(path) => load_settings_from(path),
        None => {
            tracing::warn!("no config directory available, using default settings");
            Default::default()
        }
    };
    let overrides = RunOverrides {
        dark_mode: cli.dark_mode_override(),
        selection_policy: cli.selection_policy.map(Into::into),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size(settings.display.window_size())
            .with_min_inner_size([DisplaySettings::MIN_WIDTH, DisplaySettings::MIN_HEIGHT]),
        ..Default::default()
    };

    let state = AppState::new(cli.name, settings, path).with_overrides(overrides);
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(UmsApp::new(cc, state)))),
    )
    .map_err(|e| anyhow!("failed to run the dashboard window: {e}"))
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let mut config = LogConfig::default()
        .with_level(level_filter)
        .with_format(format)
        .with_log_file(cli.log_file.clone())
        .with_log_data(cli.log_data);
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
