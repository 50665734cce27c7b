//! Fakes for the two external collaborators.

use std::cell::{Cell, RefCell};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use crate::command::{ToolOutput, ToolRunner};
use crate::download::Fetch;
use crate::error::Error;

/// Writes an executable `#!/bin/sh` script standing in for an external tool.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Records every argument list and answers with a canned exit.
pub struct RecordingRunner {
    program: PathBuf,
    output: ToolOutput,
    fail_on_call: Option<usize>,
    calls: RefCell<Vec<Vec<OsString>>>,
}

impl RecordingRunner {
    pub fn succeeding() -> Self {
        RecordingRunner {
            program: PathBuf::from("ffmpeg"),
            output: ToolOutput {
                code: Some(0),
                stderr: String::new(),
            },
            fail_on_call: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(code: i32, stderr: &str) -> Self {
        RecordingRunner {
            output: ToolOutput {
                code: Some(code),
                stderr: stderr.to_string(),
            },
            ..RecordingRunner::succeeding()
        }
    }

    /// Succeeds except for the `n`th call (zero based), which exits with 1.
    pub fn failing_on(n: usize) -> Self {
        RecordingRunner {
            fail_on_call: Some(n),
            ..RecordingRunner::succeeding()
        }
    }

    pub fn calls(&self) -> Vec<Vec<OsString>> {
        self.calls.borrow().clone()
    }
}

impl ToolRunner for RecordingRunner {
    fn program(&self) -> &Path {
        &self.program
    }

    fn run(&self, args: &[OsString]) -> io::Result<ToolOutput> {
        let mut calls = self.calls.borrow_mut();
        let index = calls.len();
        calls.push(args.to_vec());
        if self.fail_on_call == Some(index) {
            return Ok(ToolOutput {
                code: Some(1),
                stderr: "Invalid data found when processing input".to_string(),
            });
        }
        Ok(self.output.clone())
    }
}

/// Hands back a fixed path, or a download error when none is set.
pub struct FakeFetch {
    path: Option<PathBuf>,
    urls: RefCell<Vec<String>>,
    count: Cell<usize>,
}

impl FakeFetch {
    pub fn returning(path: impl Into<PathBuf>) -> Self {
        FakeFetch {
            path: Some(path.into()),
            urls: RefCell::new(Vec::new()),
            count: Cell::new(0),
        }
    }

    pub fn failing() -> Self {
        FakeFetch {
            path: None,
            urls: RefCell::new(Vec::new()),
            count: Cell::new(0),
        }
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.borrow().clone()
    }
}

impl Fetch for FakeFetch {
    fn fetch(&self, url: &str) -> Result<PathBuf, Error> {
        self.count.set(self.count.get() + 1);
        self.urls.borrow_mut().push(url.to_string());
        self.path.clone().ok_or_else(|| Error::Download {
            url: url.to_string(),
            reason: "Video unavailable".to_string(),
        })
    }
}
