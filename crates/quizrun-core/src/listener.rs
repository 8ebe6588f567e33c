//! Background answer listener.
//!
//! A single task reads the answer stream line by line and hands each line to
//! the quiz loop over a one-slot channel. Read failures and end of stream are
//! published as values so the run's caller decides what to do with them.
//! Dropping the [`InputListener`] stops the task.
//!
//! Lines are decoded lossily: bytes that are not UTF-8 become U+FFFD, so a
//! stray non-UTF-8 keystroke is just a wrong answer. A final line without a
//! terminator is still published before end of stream is reported.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::QuizError;

/// Handle to the listener task and the receiving end of its channel.
pub struct InputListener {
    lines: mpsc::Receiver<Result<String, QuizError>>,
    task: JoinHandle<()>,
}

impl InputListener {
    /// Start reading `reader` in a background task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<R>(reader: R) -> Self
    where
        R: AsyncBufRead + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(1);
        let task = tokio::spawn(read_lines(reader, tx));
        Self { lines: rx, task }
    }

    /// Listen on the process's standard input.
    pub fn stdin() -> Self {
        Self::spawn(tokio::io::BufReader::new(tokio::io::stdin()))
    }

    /// Wait for the next published line.
    ///
    /// Cancel safe: if the future is dropped before completing, no line is
    /// lost.
    pub async fn next_line(&mut self) -> Result<String, QuizError> {
        match self.lines.recv().await {
            Some(line) => line,
            // The task only exits after publishing a failure, so a closed
            // channel means that failure was already consumed.
            None => Err(QuizError::InputClosed),
        }
    }
}

impl Drop for InputListener {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn read_lines<R>(mut reader: R, tx: mpsc::Sender<Result<String, QuizError>>)
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let item = match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => {
                tracing::debug!("answer stream reached end of input");
                Err(QuizError::InputClosed)
            }
            Ok(_) => Ok(decode_line(&buf)),
            Err(e) => {
                tracing::warn!("answer stream read failed: {e}");
                Err(QuizError::InputStream(e))
            }
        };

        let failed = item.is_err();
        if tx.send(item).await.is_err() || failed {
            return;
        }
    }
}

/// Strip the `\n` or `\r\n` terminator and decode the rest.
fn decode_line(raw: &[u8]) -> String {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}
