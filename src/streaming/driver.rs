use futures::{FutureExt, Stream, StreamExt};
use tokio::sync::watch;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use super::error::ErrorPolicy;
use crate::engine::{Aggregator, EngineError, RunSummary};
use crate::io::IoError;

/// Lines per batch unless configured otherwise
pub const DEFAULT_BATCH_SIZE: usize = 1_000_000;

/// Upper bound on the up-front allocation for a batch buffer
const MAX_PREALLOCATED_LINES: usize = 1 << 16;

/// Progress snapshot published after every batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    /// Lines pulled from the source so far
    pub lines: u64,
    /// Batches handed to aggregation so far
    pub batches: u64,
}

/// Pulls lines from a source and aggregates them batch by batch
///
/// Batches only bound how much synchronous work happens between yields to the
/// runtime. The final table does not depend on the batch size or on the number
/// of workers.
pub struct StreamingDriver<P>
where
    P: ErrorPolicy + Clone + 'static,
{
    error_policy: P,
    batch_size: usize,
    workers: usize,
    cancellation: CancellationToken,
    progress: Option<watch::Sender<Progress>>,
}

impl<P> StreamingDriver<P>
where
    P: ErrorPolicy + Clone + 'static,
{
    /// Create a new driver with the default batch size and a single worker
    ///
    /// # Example
    /// ```rust,ignore
    /// let lines = LineSource::from_file("data/measurements.txt").await?;
    /// let summary = StreamingDriver::new(SilentSkip).run(lines).await?;
    /// ```
    pub fn new(error_policy: P) -> Self {
        Self {
            error_policy,
            batch_size: DEFAULT_BATCH_SIZE,
            workers: 1,
            cancellation: CancellationToken::new(),
            progress: None,
        }
    }

    /// Set the number of lines per batch (at least 1)
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.max(1);
        self
    }

    /// Set the number of batches aggregated in parallel (defaults to 1)
    ///
    /// With more than one worker, each full batch is aggregated into a private
    /// partial table on the blocking pool and merged back when it finishes.
    ///
    /// # Example
    /// ```rust,ignore
    /// // Aggregate up to 4 batches at once
    /// driver.with_workers(4)
    /// ```
    pub fn with_workers(mut self, num: usize) -> Self {
        self.workers = num.max(1);
        self
    }

    /// Abort the run cleanly once the token is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Publish a progress snapshot after every batch
    pub fn with_progress(mut self, sender: watch::Sender<Progress>) -> Self {
        self.progress = Some(sender);
        self
    }

    /// Run the stream to completion
    ///
    /// Returns the final table once the source is exhausted. A source failure,
    /// a line rejected under an aborting policy, or cancellation ends the run
    /// with an error instead; no partial table is returned in those cases.
    pub async fn run<S>(self, lines: S) -> Result<RunSummary, EngineError>
    where
        S: Stream<Item = Result<String, IoError>>,
    {
        let StreamingDriver {
            error_policy,
            batch_size,
            workers,
            cancellation,
            progress,
        } = self;

        let mut lines = std::pin::pin!(lines);

        let mut aggregator = Aggregator::new();
        let mut in_flight = JoinSet::new();
        let mut batch = Vec::with_capacity(batch_size.min(MAX_PREALLOCATED_LINES));
        let mut progress_state = Progress::default();

        debug!(batch_size, workers, "Starting aggregation run");

        loop {
            if cancellation.is_cancelled() {
                return Err(cancelled(progress_state.lines));
            }

            // Only race the token when the source has nothing ready
            let ready = lines.next().now_or_never();
            let next = match ready {
                Some(next) => next,
                None => tokio::select! {
                    biased;
                    _ = cancellation.cancelled() => return Err(cancelled(progress_state.lines)),
                    next = lines.next() => next,
                },
            };

            match next {
                Some(Ok(line)) => {
                    batch.push(line);
                    progress_state.lines += 1;
                }
                Some(Err(source)) => {
                    error!(lines = progress_state.lines, error = %source, "Line source failed");
                    return Err(EngineError::Source {
                        lines: progress_state.lines,
                        source,
                    });
                }
                None => break,
            }

            if batch.len() == batch_size {
                let first_line = progress_state.lines - batch.len() as u64 + 1;
                if workers > 1 {
                    while in_flight.len() >= workers {
                        merge_or_cancel(
                            &mut in_flight,
                            &mut aggregator,
                            &cancellation,
                            progress_state.lines,
                        )
                        .await?;
                    }
                    let full = std::mem::replace(
                        &mut batch,
                        Vec::with_capacity(batch_size.min(MAX_PREALLOCATED_LINES)),
                    );
                    spawn_batch(&mut in_flight, full, first_line, error_policy.clone());
                } else {
                    aggregate_batch(&mut aggregator, &batch, first_line, &error_policy)?;
                    batch.clear();
                }

                progress_state.batches += 1;
                publish(&progress, progress_state);
                info!(
                    lines = progress_state.lines,
                    stations = aggregator.table().len(),
                    "Processed {} lines...",
                    progress_state.lines
                );

                tokio::task::yield_now().await;
            }
        }

        // Flush the partial final batch through the same path
        if !batch.is_empty() {
            let first_line = progress_state.lines - batch.len() as u64 + 1;
            aggregate_batch(&mut aggregator, &batch, first_line, &error_policy)?;
            progress_state.batches += 1;
        }
        drop(batch);

        while !in_flight.is_empty() {
            merge_or_cancel(&mut in_flight, &mut aggregator, &cancellation, progress_state.lines)
                .await?;
        }

        publish(&progress, progress_state);

        let summary = aggregator.into_summary();
        info!(
            lines = summary.lines_processed,
            rejected = summary.lines_rejected,
            stations = summary.table.len(),
            batches = progress_state.batches,
            "File processing complete"
        );

        Ok(summary)
    }
}

/// Aggregate one batch, consulting the policy for each rejected line
fn aggregate_batch<P: ErrorPolicy>(
    aggregator: &mut Aggregator,
    batch: &[String],
    first_line: u64,
    policy: &P,
) -> Result<(), EngineError> {
    for (offset, line) in batch.iter().enumerate() {
        if let Err(error) = aggregator.process_line(line) {
            let line_number = first_line + offset as u64;
            if !policy.handle_line_error(line_number, &error) {
                return Err(EngineError::Rejected {
                    line: line_number,
                    source: error,
                });
            }
        }
    }

    Ok(())
}

/// Aggregate a batch into a private partial table on the blocking pool
fn spawn_batch<P>(
    in_flight: &mut JoinSet<Result<Aggregator, EngineError>>,
    batch: Vec<String>,
    first_line: u64,
    policy: P,
) where
    P: ErrorPolicy + Clone + 'static,
{
    in_flight.spawn_blocking(move || {
        let mut partial = Aggregator::new();
        aggregate_batch(&mut partial, &batch, first_line, &policy)?;
        Ok(partial)
    });
}

/// Wait for the next finished worker and merge its partial table
async fn merge_next(
    in_flight: &mut JoinSet<Result<Aggregator, EngineError>>,
    aggregator: &mut Aggregator,
) -> Result<(), EngineError> {
    if let Some(joined) = in_flight.join_next().await {
        let partial = joined??;
        debug!(
            lines = partial.lines_processed(),
            stations = partial.table().len(),
            "Merging partial table"
        );
        aggregator.merge(partial);
    }

    Ok(())
}

/// Merge the next finished worker unless the token fires first
async fn merge_or_cancel(
    in_flight: &mut JoinSet<Result<Aggregator, EngineError>>,
    aggregator: &mut Aggregator,
    cancellation: &CancellationToken,
    lines: u64,
) -> Result<(), EngineError> {
    tokio::select! {
        biased;
        _ = cancellation.cancelled() => Err(cancelled(lines)),
        merged = merge_next(in_flight, aggregator) => merged,
    }
}

fn cancelled(lines: u64) -> EngineError {
    warn!(lines, "Aggregation run cancelled");
    EngineError::Cancelled { lines }
}

fn publish(progress: &Option<watch::Sender<Progress>>, state: Progress) {
    if let Some(sender) = progress {
        sender.send_replace(state);
    }
}
