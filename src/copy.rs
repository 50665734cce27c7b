use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::command::{run_tool, ToolRunner};
use crate::error::Error;
use crate::time::TimeOffset;

/// `dir/name.ext` -> `dir/name_sliced.ext`
pub fn sliced_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_else(|| OsStr::new("video"));
    let ext = input.extension().unwrap_or_else(|| OsStr::new("mp4"));

    let mut name = OsString::from(stem);
    name.push("_sliced.");
    name.push(ext);
    input.with_file_name(name)
}

/// Copies `[start, end]` of `input` without re-encoding.
///
/// Offsets are `mm:ss` strings. An end before the start is handed to
/// ffmpeg unchanged.
pub fn slice<R: ToolRunner + ?Sized>(
    runner: &R,
    input: &Path,
    start: &str,
    end: &str,
) -> Result<PathBuf, Error> {
    let start = TimeOffset::parse(start)?;
    let end = TimeOffset::parse(end)?;
    slice_offsets(runner, input, start, end)
}

pub fn slice_offsets<R: ToolRunner + ?Sized>(
    runner: &R,
    input: &Path,
    start: TimeOffset,
    end: TimeOffset,
) -> Result<PathBuf, Error> {
    let output = sliced_path(input);
    info!(
        input = %input.display(),
        output = %output.display(),
        start = start.as_secs(),
        end = end.as_secs(),
        "slicing segment"
    );

    let args: Vec<OsString> = vec![
        "-y".into(), // overwrite output without asking
        "-i".into(),
        input.into(),
        "-ss".into(),
        start.to_string().into(),
        "-to".into(),
        end.to_string().into(),
        "-c".into(),
        "copy".into(), // no re-encode
        output.as_os_str().into(),
    ];
    run_tool(runner, &args)?;

    Ok(output)
}
