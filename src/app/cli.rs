use std::future::Future;

use tokio::io::{BufWriter, Stdout};
use tokio_util::sync::CancellationToken;
use tracing::{error, warn};

use super::error::AppError;

/// Reusable CLI application runner that handles:
/// - Signal handling (SIGINT, SIGTERM, SIGHUP) by cancelling the run
/// - Stdout buffering
/// - Exit codes (0 = success, 1 = error, 130 = SIGINT, 143 = SIGTERM, 129 = SIGHUP)
pub struct CliApp {
    name: String,
}

impl CliApp {
    /// Create a new CLI application runner
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// Run the CLI application and exit the process with its exit code
    ///
    /// The main function receives a buffered stdout writer and a cancellation
    /// token. A signal cancels the token and the runner keeps waiting, so the
    /// main function can abort cleanly instead of being torn down mid-write.
    pub async fn run<F, Fut>(self, main_fn: F) -> !
    where
        F: FnOnce(BufWriter<Stdout>, CancellationToken) -> Fut,
        Fut: Future<Output = Result<(), AppError>>,
    {
        let writer = BufWriter::new(tokio::io::stdout());
        let token = CancellationToken::new();

        let code = self
            .run_until_complete(main_fn(writer, token.clone()), token)
            .await;
        std::process::exit(code);
    }

    async fn run_until_complete<Fut>(&self, main_fut: Fut, token: CancellationToken) -> i32
    where
        Fut: Future<Output = Result<(), AppError>>,
    {
        let mut main_fut = std::pin::pin!(main_fut);
        let mut signal_fut = std::pin::pin!(wait_for_signal());
        let mut signal_code = None;

        let result = loop {
            tokio::select! {
                result = &mut main_fut => break result,
                code = &mut signal_fut, if signal_code.is_none() => {
                    token.cancel();
                    signal_code = Some(code);
                }
            }
        };

        if let Err(e) = &result {
            error!(app = %self.name, error = %e, "Run failed");
            eprintln!("Error: {}", e);
        }

        exit_code(&result, signal_code)
    }
}

/// Map the outcome to a process exit code
fn exit_code(result: &Result<(), AppError>, signal_code: Option<i32>) -> i32 {
    match (result, signal_code) {
        (Ok(()), _) => 0,
        (Err(_), Some(code)) => code,
        (Err(_), None) => 1,
    }
}

/// Wait for any Unix signal (SIGINT, SIGTERM, SIGHUP) or Ctrl+C
/// Returns the exit code to use (130 for SIGINT, 143 for SIGTERM, etc.)
///
/// Never resolves if the handlers cannot be installed.
async fn wait_for_signal() -> i32 {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let handlers = (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
            signal(SignalKind::hangup()),
        );
        let (mut sigterm, mut sigint, mut sighup) = match handlers {
            (Ok(term), Ok(int), Ok(hup)) => (term, int, hup),
            (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
                warn!(error = %e, "Failed to install signal handlers");
                return std::future::pending().await;
            }
        };

        tokio::select! {
            _ = sigterm.recv() => {
                warn!("Received SIGTERM");
                143 // 128 + 15
            }
            _ = sigint.recv() => {
                warn!("Received SIGINT");
                130 // 128 + 2
            }
            _ = sighup.recv() => {
                warn!("Received SIGHUP");
                129 // 128 + 1
            }
        }
    }

    #[cfg(not(unix))]
    {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                warn!("Received Ctrl+C");
                130
            }
            Err(e) => {
                warn!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending().await
            }
        }
    }
}
