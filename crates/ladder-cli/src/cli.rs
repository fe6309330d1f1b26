//! Command-line argument surface.

use clap::Parser;
use std::path::PathBuf;

/// Compute the top-k highest cumulative-return bond-laddering strategies
/// over a CSV return grid.
///
/// Any argument left unset falls back to an interactive prompt (see
/// `crate::prompt`), so scripted and interactive invocations share the same
/// underlying `ladder_algo`/`ladder_io` calls.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Set the logging level.
    #[arg(long, default_value = "info")]
    pub log_level: tracing::Level,

    /// Path to the return-grid CSV. Prompted for interactively if omitted.
    pub csv_path: Option<PathBuf>,

    /// Number of top sequences to compute. Prompted for interactively if omitted.
    #[arg(long)]
    pub k: Option<i64>,

    /// Directory to write the results CSV into. Prompted for interactively if omitted.
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Render actions in verbose form (`Month 0: buy 6-month bond`) instead
    /// of short form (`b6`) in the results CSV.
    #[arg(long, default_value_t = false)]
    pub verbose_actions: bool,
}
