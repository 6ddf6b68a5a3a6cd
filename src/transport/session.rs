//! Child-process console session
//!
//! stdout and stderr are drained by reader threads into one channel, so output
//! arrives in the order a terminal would show it and the child can never block
//! on a full pipe. `await_prompt` waits on that channel with a deadline.

use super::{Console, GameCommand, PROMPT_MARKER, RawEvent, StopPoint};
use crate::core::ErrorKind;
use std::io::{Read, Write};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};

/// Bytes of game output kept per turn; older bytes are dropped first
const OUTPUT_LIMIT: usize = 64 * 1024;

enum Chunk {
    Data(Vec<u8>),
    Closed,
}

/// Output received since the last prompt, scanned for the marker as it grows
struct OutputBuffer {
    bytes: Vec<u8>,
    scanned: usize,
    truncated: usize,
    limit: usize,
}

impl OutputBuffer {
    const fn new(limit: usize) -> Self {
        Self {
            bytes: Vec::new(),
            scanned: 0,
            truncated: 0,
            limit,
        }
    }

    /// Append a chunk, dropping the oldest bytes once over the limit
    ///
    /// The newest bytes hold the revealed word and a partly received marker,
    /// so the head of the buffer is what gets discarded.
    fn push(&mut self, chunk: &[u8]) {
        self.bytes.extend_from_slice(chunk);
        if self.bytes.len() > self.limit {
            let excess = self.bytes.len() - self.limit;
            self.bytes.drain(..excess);
            self.scanned = self.scanned.saturating_sub(excess);
            self.truncated += excess;
        }
    }

    /// Split around the first marker, keeping what follows it for the next turn
    fn take_prompt(&mut self) -> Option<RawEvent> {
        // A marker may straddle the previous scan boundary
        let from = self.scanned.saturating_sub(PROMPT_MARKER.len() - 1);
        let Some(offset) = find_marker(&self.bytes[from..]) else {
            self.scanned = self.bytes.len();
            return None;
        };
        let start = from + offset;
        let rest = self.bytes.split_off(start + PROMPT_MARKER.len());
        let mut before = std::mem::replace(&mut self.bytes, rest);
        let marker = before.split_off(start);
        self.scanned = 0;
        self.report_truncation();
        Some(RawEvent {
            before,
            after: StopPoint::Marker(marker),
        })
    }

    /// Everything received, for an end-of-stream stop
    fn take_all(&mut self) -> Vec<u8> {
        self.scanned = 0;
        self.report_truncation();
        std::mem::take(&mut self.bytes)
    }

    fn report_truncation(&mut self) {
        if self.truncated > 0 {
            warn!(truncated = self.truncated, "game output truncated");
            self.truncated = 0;
        }
    }

    fn len(&self) -> usize {
        self.bytes.len()
    }
}

/// A running game and its captured output
pub struct Session {
    child: Option<Child>,
    stdin: Option<ChildStdin>,
    output: Receiver<Chunk>,
    buffer: OutputBuffer,
    open_streams: usize,
}

impl Session {
    /// Launch the game with piped console I/O
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::SpawnError` if the process cannot be started.
    #[instrument(skip_all, fields(command = %command))]
    pub fn spawn(command: &GameCommand) -> Result<Self, ErrorKind> {
        let mut cmd = Command::new(command.program());
        cmd.args(command.args())
            .env("PYTHONUNBUFFERED", "1")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        debug!("spawning game process");
        let mut child = match cmd.spawn() {
            Ok(c) => c,
            Err(e) => {
                warn!(err = %e, "failed to spawn game");
                return Err(ErrorKind::SpawnError);
            }
        };

        let (Some(stdin), Some(stdout), Some(stderr)) =
            (child.stdin.take(), child.stdout.take(), child.stderr.take())
        else {
            warn!("game pipes were not captured");
            let _ = child.kill();
            let _ = child.wait();
            return Err(ErrorKind::SpawnError);
        };

        let (tx, output) = mpsc::channel();
        let stderr_tx = tx.clone();
        thread::spawn(move || pump(stdout, &tx));
        thread::spawn(move || pump(stderr, &stderr_tx));

        Ok(Self {
            child: Some(child),
            stdin: Some(stdin),
            output,
            buffer: OutputBuffer::new(OUTPUT_LIMIT),
            open_streams: 2,
        })
    }
}

impl Console for Session {
    fn await_prompt(&mut self, timeout: Duration) -> Result<RawEvent, ErrorKind> {
        let deadline = Instant::now() + timeout;

        loop {
            if let Some(event) = self.buffer.take_prompt() {
                return Ok(event);
            }
            if self.open_streams == 0 {
                return Ok(RawEvent {
                    before: self.buffer.take_all(),
                    after: StopPoint::Eof,
                });
            }

            // Queued output must not extend the wait
            let remaining = deadline.saturating_duration_since(Instant::now());
            let received = if remaining.is_zero() {
                Err(RecvTimeoutError::Timeout)
            } else {
                self.output.recv_timeout(remaining)
            };
            match received {
                Ok(Chunk::Data(bytes)) => self.buffer.push(&bytes),
                Ok(Chunk::Closed) => self.open_streams = self.open_streams.saturating_sub(1),
                Err(RecvTimeoutError::Disconnected) => self.open_streams = 0,
                Err(RecvTimeoutError::Timeout) => {
                    debug!(
                        buffered = self.buffer.len(),
                        timeout_ms = timeout.as_millis(),
                        "timed out waiting for prompt"
                    );
                    return Err(ErrorKind::ExpectError);
                }
            }
        }
    }

    fn send_guess(&mut self, letter: char) {
        let Some(stdin) = self.stdin.as_mut() else {
            warn!(%letter, "guess sent after close");
            return;
        };
        let line = format!("{letter}\n");
        if let Err(e) = stdin.write_all(line.as_bytes()).and_then(|()| stdin.flush()) {
            warn!(err = %e, %letter, "failed to write guess");
        }
    }

    fn close(&mut self) {
        drop(self.stdin.take());
        let Some(mut child) = self.child.take() else {
            return;
        };
        if let Err(e) = child.kill() {
            debug!(err = %e, "game already exited");
        }
        match child.wait() {
            Ok(status) => debug!(exit_code = ?status.code(), "game closed"),
            Err(e) => warn!(err = %e, "failed to reap game process"),
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.close();
    }
}

fn find_marker(buffer: &[u8]) -> Option<usize> {
    buffer
        .windows(PROMPT_MARKER.len())
        .position(|window| window.eq_ignore_ascii_case(PROMPT_MARKER))
}

/// Forward a pipe into the channel until it closes or the session is gone
fn pump<R: Read>(mut reader: R, tx: &Sender<Chunk>) {
    let mut chunk = [0u8; 4096];
    loop {
        match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => {
                if tx.send(Chunk::Data(chunk[..n].to_vec())).is_err() {
                    return;
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
            Err(e) => {
                debug!(err = %e, "game output read failed");
                break;
            }
        }
    }
    let _ = tx.send(Chunk::Closed);
}
