use std::path::Path;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

use futures::Stream;
use pin_project_lite::pin_project;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines, Stdin};

use super::error::IoError;

/// Read buffer size for file and stdin sources
const READ_BUFFER_SIZE: usize = 1 << 20;

const BYTE_ORDER_MARK: char = '\u{feff}';

pin_project! {
    /// Lazy, forward-only stream of raw lines from an async reader
    ///
    /// Yields `Ok(line)` without its `\n` or `\r\n` terminator, a single `Err` on
    /// a read failure (including invalid UTF-8), and then ends. A UTF-8 byte order
    /// mark at the start of the input is dropped.
    pub struct LineSource<R> {
        #[pin]
        lines: Lines<BufReader<R>>,
        at_start: bool,
        failed: bool,
    }
}

impl<R> LineSource<R>
where
    R: AsyncRead,
{
    /// Create a new line source from an async reader
    pub fn new(reader: R) -> Self {
        Self {
            lines: BufReader::with_capacity(READ_BUFFER_SIZE, reader).lines(),
            at_start: true,
            failed: false,
        }
    }
}

impl LineSource<File> {
    /// Open a file as a line source
    ///
    /// # Example
    /// ```rust,ignore
    /// let lines = LineSource::from_file("data/measurements.txt").await?;
    /// ```
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let path = path.as_ref();
        let file = File::open(path).await.map_err(|source| IoError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(file))
    }
}

impl LineSource<Stdin> {
    /// Read lines from standard input
    pub fn stdin() -> Self {
        Self::new(tokio::io::stdin())
    }
}

impl<R> Stream for LineSource<R>
where
    R: AsyncRead,
{
    type Item = Result<String, IoError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        if *this.failed {
            return Poll::Ready(None);
        }

        match ready!(this.lines.poll_next_line(cx)) {
            Ok(Some(line)) if *this.at_start => {
                *this.at_start = false;
                let line = if line.starts_with(BYTE_ORDER_MARK) {
                    line[BYTE_ORDER_MARK.len_utf8()..].to_string()
                } else {
                    line
                };
                Poll::Ready(Some(Ok(line)))
            }
            Ok(line) => Poll::Ready(line.map(Ok)),
            Err(e) => {
                *this.failed = true;
                Poll::Ready(Some(Err(IoError::from(e))))
            }
        }
    }
}
