use std::{
    ffi::OsString,
    io,
    path::{Path, PathBuf},
    process::Stdio,
    time::Duration,
};

use tokio::{io::AsyncWriteExt as _, process::Command, time::Instant};

use super::{error::*, result::*};

/// Runs a candidate program once per input, feeding the input on stdin.
#[derive(Debug, Clone)]
pub struct TestRunner {
    program: PathBuf,
    args: Vec<OsString>,
    time_limit: Option<Duration>,
}

impl TestRunner {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            time_limit: None,
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn time_limit(mut self, limit: Option<Duration>) -> Self {
        self.time_limit = limit;
        self
    }

    pub fn get_program(&self) -> &Path {
        &self.program
    }

    pub fn get_time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_os_str())
            .chain(self.args.iter().map(OsString::as_os_str))
            .map(|s| s.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Blocks until the process exits (or the time limit, if any, expires)
    /// and returns everything it wrote.
    pub async fn run(&self, input: &[u8]) -> Result<RunOutcome> {
        self.run_within(input, self.time_limit).await
    }

    /// Same as [`TestRunner::run`] with `time_limit` in place of the runner's own limit.
    pub async fn run_within(&self, input: &[u8], time_limit: Option<Duration>) -> Result<RunOutcome> {
        let mut proc = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| Error::Spawn {
                program: self.program.clone(),
                source: e,
            })?;
        let mut stdin = proc.stdin.take().ok_or(Error::PipeUnavailable("stdin"))?;

        let start_at = Instant::now();

        // stdin is fed while stdout is drained, otherwise a chatty process deadlocks on a full pipe
        let feed = async move {
            let res = stdin.write_all(input).await;
            drop(stdin); // EOF
            match res {
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
                res => res,
            }
        };
        let communicate = async move { tokio::try_join!(feed, proc.wait_with_output()) };

        let res = match time_limit {
            None => Some(communicate.await),
            Some(limit) => tokio::time::timeout(limit, communicate).await.ok(),
        };
        let execution_time = Instant::now().duration_since(start_at);

        let output = match res {
            None => {
                log::warn!(
                    "Killed '{}': time limit {}ms exceeded",
                    self.command_line(),
                    time_limit.unwrap_or_default().as_millis()
                );
                None
            }
            Some(Err(e)) => return Err(Error::Communicate(e)),
            Some(Ok(((), out))) => Some(ProcessOutput {
                status: out.status.code(),
                stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
            }),
        };

        Ok(RunOutcome {
            output,
            execution_time,
        })
    }
}
