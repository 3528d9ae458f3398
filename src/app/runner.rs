use futures::Stream;
use tokio::io::AsyncWrite;
use tokio_util::sync::CancellationToken;

use super::config::{Config, ErrorMode};
use super::error::AppError;
use crate::engine::{EngineError, RunSummary};
use crate::io::{IoError, LineSource};
use crate::streaming::{AbortOnError, ErrorPolicy, SilentSkip, SkipErrors, StreamingDriver};

/// Aggregate the configured input and write the report
///
/// The report is only written when the run completes; a failed or cancelled
/// run writes nothing.
pub async fn run_aggregation<W>(
    config: &Config,
    writer: W,
    token: CancellationToken,
) -> Result<RunSummary, AppError>
where
    W: AsyncWrite + Unpin + Send,
{
    let summary = if config.reads_stdin() {
        aggregate(config, LineSource::stdin(), token).await?
    } else {
        let lines = LineSource::from_file(&config.input).await?;
        aggregate(config, lines, token).await?
    };

    config.format.write(&summary, writer).await?;
    Ok(summary)
}

/// Run a line stream through a driver configured from `config`
pub async fn aggregate<S>(
    config: &Config,
    lines: S,
    token: CancellationToken,
) -> Result<RunSummary, EngineError>
where
    S: Stream<Item = Result<String, IoError>>,
{
    match config.on_error {
        ErrorMode::Silent => driver(config, SilentSkip, token).run(lines).await,
        ErrorMode::Warn => driver(config, SkipErrors, token).run(lines).await,
        ErrorMode::Abort => driver(config, AbortOnError, token).run(lines).await,
    }
}

fn driver<P>(config: &Config, policy: P, token: CancellationToken) -> StreamingDriver<P>
where
    P: ErrorPolicy + Clone + 'static,
{
    StreamingDriver::new(policy)
        .with_batch_size(config.batch_size.get())
        .with_workers(config.workers.get())
        .with_cancellation(token)
}
