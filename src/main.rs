//! wrap-shell CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wrap_shell::cli::{is_informational, parse_error_message, Cli, CommandDispatcher};
use wrap_shell::config::{load_config, WrapShellConfig};
use wrap_shell::ui;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--verbose` flag (or `verbose: true` in the config) sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Escape codes are only written when stderr may be styled.
fn init_tracing(verbose: bool, ansi: bool) {
    let filter = if verbose {
        EnvFilter::new("wrap_shell=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wrap_shell=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(ansi)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if is_informational(&err) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            ui::error(&parse_error_message(&err));
            return ExitCode::from(1);
        }
    };

    if cli.no_color {
        ui::disable_colors();
    }

    // Completions never read the config
    let config = if cli.completions.is_some() {
        WrapShellConfig::default()
    } else {
        match load_config(cli.config.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                ui::error(&e.to_string());
                return ExitCode::from(1);
            }
        }
    };

    init_tracing(cli.verbose || config.verbose, ui::colors_enabled());
    tracing::debug!("wrap-shell starting with args: {:?}", cli);

    let dispatcher = CommandDispatcher::new(config);
    match dispatcher.dispatch(&cli) {
        Ok(result) => result.into(),
        Err(e) => {
            ui::error(&e.to_string());
            ExitCode::from(1)
        }
    }
}
