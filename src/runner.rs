use anyhow::{Context, Result};
use std::io::Write;
use tracing::info;

use crate::aggregator;
use crate::model::{MarkerKey, RunOutcome};
use crate::slack::Notifier;
use crate::trello::BoardService;

/// Printed in debug mode instead of touching the board.
pub const DEBUG_MESSAGE: &str = "debug mode: board inspection is not implemented yet, no requests were made";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Debug,
    Live,
}

/// Everything a live run needs, fixed for the whole run.
pub struct Job<'a> {
    pub board: &'a dyn BoardService,
    pub notifier: &'a dyn Notifier,
    pub board_id: &'a str,
    pub target: &'a MarkerKey,
}

/// Run once in `mode`, writing operator-facing lines to `out`.
pub async fn execute<W: Write>(mode: Mode, job: Job<'_>, out: &mut W) -> Result<()> {
    if mode == Mode::Debug {
        writeln!(out, "{}", DEBUG_MESSAGE)?;
        return Ok(());
    }

    match aggregator::run(job.board, job.board_id, job.target).await {
        RunOutcome::NoCards => {
            writeln!(out, "no cards on board {}", job.board_id)?;
        }
        RunOutcome::Collected(records) => {
            let sent = job
                .notifier
                .notify(&records)
                .await
                .context("failed to deliver notification")?;
            info!(records = records.len(), sent, "run finished");
        }
    }
    Ok(())
}
