//! Audit history CLI command

use clap::Args;

use crate::audit::AuditLogger;
use crate::config::paths::TrackerPaths;
use crate::error::TrackerResult;

/// Arguments for `history`
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of entries to show
    #[arg(short, long, default_value = "10")]
    pub limit: usize,
}

/// Handle `history`
///
/// Reads only the audit log, so it works even when the store is unreadable.
pub fn handle_history_command(paths: &TrackerPaths, args: HistoryArgs) -> TrackerResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_recent(args.limit)?;

    if entries.is_empty() {
        println!("No audit entries found in {}", logger.path().display());
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry);
    }

    Ok(())
}
