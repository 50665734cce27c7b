use std::io;

use failure::Fail;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "invalid time offset {:?}: {}", input, reason)]
    Format { input: String, reason: String },

    #[fail(display = "unsupported operating system: {}", os)]
    UnsupportedPlatform { os: String },

    #[fail(display = "failed to download {}: {}", url, reason)]
    Download { url: String, reason: String },

    #[fail(display = "{} failed: {}", tool, reason)]
    ToolExecution { tool: String, reason: String },

    #[fail(display = "{}", _0)]
    Io(#[cause] io::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

/// `exited with code N`, or `terminated by signal` when there is no code.
pub(crate) fn exit_description(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with code {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// Last few non-empty lines of a tool's stderr, enough to show why it failed.
pub(crate) fn diagnostic_tail(stderr: &str) -> String {
    let lines: Vec<&str> = stderr
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let start = lines.len().saturating_sub(5);
    lines[start..].join("\n")
}
