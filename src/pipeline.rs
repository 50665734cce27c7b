use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::command::ToolRunner;
use crate::convert::{convert, ConvertOptions};
use crate::copy::slice_offsets;
use crate::download::Fetch;
use crate::error::Error;
use crate::time::TimeOffset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Downloaded,
    Sliced,
    Converted,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Downloaded => "downloaded",
            Stage::Sliced => "sliced",
            Stage::Converted => "converted",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    pub convert: ConvertOptions,
    /// Remove the download and the sliced clip once the GIF exists.
    pub clean: bool,
}

/// download -> slice -> convert, stopping at the first failure.
pub struct Pipeline<F, R> {
    fetcher: F,
    runner: R,
    options: PipelineOptions,
}

impl<F: Fetch, R: ToolRunner> Pipeline<F, R> {
    pub fn new(fetcher: F, runner: R, options: PipelineOptions) -> Self {
        Pipeline {
            fetcher,
            runner,
            options,
        }
    }

    /// Returns the path of the finished GIF.
    ///
    /// Offsets are checked before anything is downloaded. Intermediate files
    /// are left in place on failure.
    pub fn run(&self, url: &str, start: &str, end: &str) -> Result<PathBuf, Error> {
        let start = TimeOffset::parse(start)?;
        let end = TimeOffset::parse(end)?;

        let source = self.fetcher.fetch(url)?;
        info!(stage = %Stage::Downloaded, path = %source.display());

        let sliced = slice_offsets(&self.runner, &source, start, end)?;
        info!(stage = %Stage::Sliced, path = %sliced.display());

        let gif = convert(&self.runner, &sliced, &self.options.convert)?;
        info!(stage = %Stage::Converted, path = %gif.display());

        if self.options.clean {
            remove_intermediate(&source);
            remove_intermediate(&sliced);
        }

        Ok(gif)
    }
}

fn remove_intermediate(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => info!(path = %path.display(), "removed intermediate file"),
        Err(err) => warn!(path = %path.display(), error = %err, "could not remove intermediate file"),
    }
}
