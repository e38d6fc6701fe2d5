//! Line driver over async byte streams.
//!
//! Reads newline-terminated commands while waiting on the engine's debounce
//! deadline, so a pending departure never blocks input and a line never
//! blocks a due commit. Each directive group is written with a single write
//! and flushed before the next input is read.

use std::time::Instant;

use smartlight_app::{Driver, Input};
use smartlight_proto::{Directive, directive};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt},
    time::sleep_until,
};
use tracing::{debug, warn};

use crate::error::DaemonError;

/// [`Driver`] reading lines from `R` and writing directives to `W`.
///
/// Time comes from tokio's clock so a paused test runtime controls it.
#[derive(Debug)]
pub struct StdioDriver<R, W> {
    reader: R,
    writer: W,
    /// Bytes of the line being read. Survives a deadline interrupting the
    /// read.
    buf: Vec<u8>,
    eof: bool,
}

impl<R, W> StdioDriver<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    /// Create a driver over a reader and a writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer, buf: Vec::new(), eof: false }
    }

    /// Tear down the driver, returning the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Turn the buffered bytes into a line, or `None` if they are not UTF-8.
    fn take_line(&mut self) -> Option<String> {
        let mut bytes = std::mem::take(&mut self.buf);
        if bytes.last() == Some(&b'\n') {
            bytes.pop();
        }
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }

        match String::from_utf8(bytes) {
            Ok(line) => Some(line),
            Err(error) => {
                warn!(%error, "skipping line that is not valid UTF-8");
                None
            },
        }
    }
}

impl<R, W> Driver for StdioDriver<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    type Error = DaemonError;

    async fn next_input(&mut self, deadline: Option<Instant>) -> Result<Input, Self::Error> {
        loop {
            if self.eof {
                return match deadline {
                    Some(deadline) => {
                        debug!("input closed, waiting for pending commit");
                        sleep_until(deadline.into()).await;
                        Ok(Input::Deadline)
                    },
                    None => Ok(Input::Closed),
                };
            }

            // `read_until` keeps partial input in `buf` if the deadline wins.
            let read = match deadline {
                Some(deadline) => tokio::select! {
                    biased;
                    () = sleep_until(deadline.into()) => return Ok(Input::Deadline),
                    read = self.reader.read_until(b'\n', &mut self.buf) => read,
                },
                None => self.reader.read_until(b'\n', &mut self.buf).await,
            };

            if read.map_err(DaemonError::Read)? == 0 {
                self.eof = true;
                if self.buf.is_empty() {
                    continue;
                }
            }

            if let Some(line) = self.take_line() {
                return Ok(Input::Line(line));
            }
        }
    }

    async fn emit(&mut self, directives: &[Directive]) -> Result<(), Self::Error> {
        let group = directive::render(directives);
        self.writer.write_all(group.as_bytes()).await.map_err(DaemonError::Write)?;
        self.writer.flush().await.map_err(DaemonError::Write)
    }

    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }
}
