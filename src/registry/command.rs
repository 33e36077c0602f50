use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use super::CodeRegistry;
use crate::error::{BcsError, Result};

pub const DEFAULT_PROGRAM: &str = "bcs";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Registry backed by the external `bcs` program
/// (`bcs codes`, `bcs decode <CODE>`).
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

struct ProcessOutput {
    status: ExitStatus,
    stdout: String,
    stderr: String,
}

impl CommandRegistry {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Arguments placed before the `codes`/`decode` subcommand.
    #[must_use]
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn run(&self, subcommand: &[&str]) -> Result<ProcessOutput> {
        debug!(program = %self.program, ?subcommand, "running registry command");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .args(subcommand)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                BcsError::RegistryUnavailable(format!("cannot run {}: {e}", self.program))
            })?;

        // Drain pipes on their own threads so a chatty child cannot block on a full pipe.
        let stdout = child.stdout.take().map(spawn_reader);
        let stderr = child.stderr.take().map(spawn_reader);

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) if Instant::now() >= deadline => {
                    let _ = child.kill();
                    let _ = child.wait();
                    debug!(program = %self.program, "registry command timed out");
                    return Err(self.timed_out());
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(e) => {
                    let _ = child.kill();
                    return Err(BcsError::RegistryUnavailable(format!(
                        "failed waiting for {}: {e}",
                        self.program
                    )));
                }
            }
        };

        debug!(program = %self.program, %status, "registry command finished");
        Ok(ProcessOutput {
            status,
            stdout: self.collect(stdout, deadline)?,
            stderr: self.collect(stderr, deadline)?,
        })
    }

    /// Pipe contents, waiting no later than `deadline`.
    ///
    /// A background process holding the pipe open keeps the reader busy
    /// after the child exits.
    fn collect(&self, reader: Option<Receiver<String>>, deadline: Instant) -> Result<String> {
        let Some(reader) = reader else {
            return Ok(String::new());
        };
        match reader.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
            Ok(output) => Ok(output),
            Err(RecvTimeoutError::Disconnected) => Ok(String::new()),
            Err(RecvTimeoutError::Timeout) => {
                debug!(program = %self.program, "registry output still open at deadline");
                Err(self.timed_out())
            }
        }
    }

    fn timed_out(&self) -> BcsError {
        BcsError::RegistryUnavailable(format!(
            "{} timed out after {:.1}s",
            self.program,
            self.timeout.as_secs_f64()
        ))
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl CodeRegistry for CommandRegistry {
    fn decode(&self, code: &str) -> Result<PathBuf> {
        let output = self.run(&["decode", code])?;
        if !output.status.success() {
            return Err(BcsError::CodeNotFound(code.to_string()));
        }

        output
            .stdout
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| BcsError::CodeNotFound(code.to_string()))
    }

    fn list_codes(&self) -> Result<Vec<String>> {
        let output = self.run(&["codes"])?;
        if !output.status.success() {
            let detail = output.stderr.lines().next().unwrap_or_default().trim();
            return Err(BcsError::RegistryUnavailable(format!(
                "{} codes exited with {}{}",
                self.program,
                output.status,
                if detail.is_empty() {
                    String::new()
                } else {
                    format!(": {detail}")
                }
            )));
        }

        Ok(parse_code_listing(&output.stdout))
    }
}

/// First whitespace-separated token of each non-empty line.
fn parse_code_listing(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(ToString::to_string)
        .collect()
}

fn spawn_reader<R: Read + Send + 'static>(mut reader: R) -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = reader.read_to_end(&mut buf);
        let _ = tx.send(String::from_utf8_lossy(&buf).into_owned());
    });
    rx
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
