use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::command::{run_tool, ToolRunner};
use crate::error::Error;

pub const GIF_EXTENSION: &str = "gif";

/// Frame sampling and size limit for the GIF encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    pub fps: u32,
    /// Upper bound on output width; narrower sources keep their width.
    pub max_width: u32,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            fps: 10,
            max_width: 640,
        }
    }
}

impl ConvertOptions {
    /// `-1` keeps the aspect ratio for the height.
    pub fn filter(&self) -> String {
        format!("fps={},scale='min({},iw)':-1", self.fps, self.max_width)
    }
}

pub fn gif_path(input: &Path) -> PathBuf {
    input.with_extension(GIF_EXTENSION)
}

/// Re-encodes `input` into an animated GIF next to it.
pub fn convert<R: ToolRunner + ?Sized>(
    runner: &R,
    input: &Path,
    options: &ConvertOptions,
) -> Result<PathBuf, Error> {
    let output = gif_path(input);
    info!(input = %input.display(), output = %output.display(), "converting to gif");

    let args: Vec<OsString> = vec![
        "-y".into(),
        "-i".into(),
        input.into(),
        "-vf".into(),
        options.filter().into(),
        output.as_os_str().into(),
    ];
    run_tool(runner, &args)?;

    Ok(output)
}
