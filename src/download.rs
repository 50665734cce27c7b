use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, info};

use crate::error::{diagnostic_tail, exit_description, Error};

/// Fetches a remote video to local disk and returns where it landed.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<PathBuf, Error>;
}

/// Downloads through the `yt-dlp` executable into the current directory.
#[derive(Debug, Clone)]
pub struct YtDlp {
    program: PathBuf,
}

impl YtDlp {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        YtDlp {
            program: program.into(),
        }
    }

    fn args(url: &str) -> Vec<&str> {
        vec![
            // best single file (audio + video) in an mp4 container
            "-f",
            "b[ext=mp4]",
            "--no-playlist",
            "--no-progress",
            "-o",
            "%(title)s.%(ext)s",
            "--print",
            "after_move:filepath",
            "--no-simulate",
            "--",
            url,
        ]
    }
}

impl Default for YtDlp {
    fn default() -> Self {
        YtDlp::new("yt-dlp")
    }
}

impl Fetch for YtDlp {
    fn fetch(&self, url: &str) -> Result<PathBuf, Error> {
        let fail = |reason: String| Error::Download {
            url: url.to_string(),
            reason,
        };

        let args = YtDlp::args(url);
        debug!(program = %self.program.display(), ?args, "starting download");

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|err| fail(format!("could not start {}: {}", self.program.display(), err)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(fail(format!(
                "{} {}\n{}",
                self.program.display(),
                exit_description(output.status.code()),
                diagnostic_tail(&stderr)
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let path = printed_path(&stdout)
            .ok_or_else(|| fail("downloader did not report a file".to_string()))?;
        info!(path = %path.display(), "downloaded");
        Ok(path)
    }
}

/// The downloader prints the final file path as its last line.
fn printed_path(stdout: &str) -> Option<PathBuf> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .last()
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(unix)]
    use crate::testing::write_script;

    #[test]
    fn takes_last_printed_line() {
        let stdout = "WARNING: something\n/home/me/Some Video.mp4\n\n";
        assert_eq!(
            printed_path(stdout),
            Some(PathBuf::from("/home/me/Some Video.mp4"))
        );
    }

    #[test]
    fn empty_output_has_no_path() {
        assert_eq!(printed_path(""), None);
        assert_eq!(printed_path("\n  \n"), None);
    }

    #[test]
    fn url_is_passed_after_separator() {
        let args = YtDlp::args("https://example.com/watch?v=abc");
        assert_eq!(args[args.len() - 2], "--");
        assert_eq!(args.last(), Some(&"https://example.com/watch?v=abc"));
        assert!(args.windows(2).any(|w| w == ["-f", "b[ext=mp4]"]));
    }

    #[test]
    fn missing_downloader_is_a_download_error() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = YtDlp::new(dir.path().join("no-such-yt-dlp"));
        match fetcher.fetch("https://NOT_A_REAL_URL") {
            Err(Error::Download { url, .. }) => assert_eq!(url, "https://NOT_A_REAL_URL"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn failed_download_reports_exit_and_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(
            dir.path(),
            "yt-dlp",
            "echo 'ERROR: Video unavailable' >&2\nexit 1",
        );

        match YtDlp::new(&script).fetch("https://example.com/v") {
            Err(Error::Download { url, reason }) => {
                assert_eq!(url, "https://example.com/v");
                assert!(reason.contains("exited with code 1"));
                assert!(reason.ends_with("ERROR: Video unavailable"));
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn silent_download_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(dir.path(), "yt-dlp", "exit 0");

        match YtDlp::new(&script).fetch("https://example.com/v") {
            Err(Error::Download { reason, .. }) => {
                assert_eq!(reason, "downloader did not report a file")
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn returns_printed_path() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(dir.path(), "yt-dlp", "echo '/x/My Video.mp4'");

        let path = YtDlp::new(&script).fetch("https://example.com/v").unwrap();
        assert_eq!(path, PathBuf::from("/x/My Video.mp4"));
    }
}
