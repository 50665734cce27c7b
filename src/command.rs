use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::{diagnostic_tail, exit_description, Error};

/// What a finished tool process left behind.
#[derive(Debug, Clone, Default)]
pub struct ToolOutput {
    /// `None` when the process was killed by a signal.
    pub code: Option<i32>,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs the transcoder with an argument list and waits for it to exit.
pub trait ToolRunner {
    fn program(&self) -> &Path;

    fn run(&self, args: &[OsString]) -> io::Result<ToolOutput>;
}

/// The ffmpeg binary at a fixed path.
#[derive(Debug, Clone)]
pub struct Ffmpeg {
    path: PathBuf,
}

impl Ffmpeg {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Ffmpeg { path: path.into() }
    }
}

impl ToolRunner for Ffmpeg {
    fn program(&self) -> &Path {
        &self.path
    }

    fn run(&self, args: &[OsString]) -> io::Result<ToolOutput> {
        let output = Command::new(&self.path).args(args).output()?;
        Ok(ToolOutput {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Runs one tool invocation, turning spawn failures and non-zero exits into
/// `Error::ToolExecution`.
pub fn run_tool<R: ToolRunner + ?Sized>(runner: &R, args: &[OsString]) -> Result<(), Error> {
    let tool = runner.program().display().to_string();
    debug!(tool = %tool, ?args, "running tool");

    let output = runner.run(args).map_err(|err| Error::ToolExecution {
        tool: tool.clone(),
        reason: format!("could not start: {}", err),
    })?;

    if !output.success() {
        let status = exit_description(output.code);
        let diagnostic = diagnostic_tail(&output.stderr);
        let reason = if diagnostic.is_empty() {
            status
        } else {
            format!("{}\n{}", status, diagnostic)
        };
        return Err(Error::ToolExecution { tool, reason });
    }

    Ok(())
}
