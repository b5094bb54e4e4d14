//! `notifi-history` -- render notification history records for display.
//!
//! Reads records as a JSON array or newline-delimited JSON from the file
//! given as the only argument (or stdin) and writes one display object per
//! line to stdout. Clock times are rendered in the host's local zone unless
//! `HISTORY_UTC_OFFSET_MINUTES` is set. Logs go to stderr.
//!
//! # Environment variables
//!
//! | Variable                     | Required | Default | Description                              |
//! |------------------------------|----------|---------|------------------------------------------|
//! | `HISTORY_LOCALE_PATH`        | no       | --      | Locale JSON with `notifi.*` strings      |
//! | `HISTORY_UTC_OFFSET_MINUTES` | no       | local   | Fixed offset for rendered clock times    |
//! | `HISTORY_NOW`                | no       | --      | RFC 3339 instant used instead of the system clock |

use std::io::Read;

use anyhow::Context;
use clap::Parser;
use notifi_history_cli::args::Args;
use notifi_history_cli::config::CliConfig;
use notifi_history_cli::{input, locale, output};
use notifi_history_core::HistoryPresenter;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notifi_history=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = CliConfig::from_env().context("Invalid configuration")?;
    let catalog = locale::load_catalog(config.locale_path.as_deref())?;

    let raw = match &args.path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read records from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read records from stdin")?;
            buf
        }
    };

    let records = input::parse_records(&raw)?;
    let source = match &args.path {
        Some(path) => path.display().to_string(),
        None => "<stdin>".to_string(),
    };
    tracing::info!(
        source = %source,
        records = records.len(),
        zone = ?config.zone,
        fixed_now = config.fixed_now.is_some(),
        "Presenting history records",
    );

    let presenter = HistoryPresenter::new(config.clock(), catalog).with_zone(config.zone);

    let stdout = std::io::stdout();
    let mut writer = std::io::BufWriter::new(stdout.lock());
    let written = output::write_records(&mut writer, &records, &presenter)
        .context("Failed to write display fields")?;

    tracing::debug!(written, "Done");
    Ok(())
}
