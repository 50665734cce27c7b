//! Download a video, cut a segment out of it and turn that segment into an
//! animated GIF using a bundled ffmpeg.

pub mod command;
pub mod convert;
pub mod copy;
pub mod download;
pub mod error;
pub mod locate;
pub mod pipeline;
#[cfg(feature = "probe")]
pub mod probe;
pub mod time;

#[cfg(test)]
mod testing;

pub use command::{Ffmpeg, ToolOutput, ToolRunner};
pub use convert::{convert, ConvertOptions};
pub use copy::{slice, slice_offsets};
pub use download::{Fetch, YtDlp};
pub use error::Error;
pub use locate::{app_root, locate, locate_host, Platform};
pub use pipeline::{Pipeline, PipelineOptions, Stage};
pub use time::TimeOffset;
