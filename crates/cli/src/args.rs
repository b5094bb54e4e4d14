use std::path::PathBuf;

use clap::{Parser, ValueHint};

/// Render notification history records for display.
#[derive(Debug, Parser)]
#[command(name = "notifi-history", version)]
pub struct Args {
    /// Records file, a JSON array or one JSON record per line (defaults to stdin)
    #[arg(value_hint = ValueHint::FilePath)]
    pub path: Option<PathBuf>,
}
