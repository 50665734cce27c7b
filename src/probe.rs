use std::fmt;
use std::path::Path;

use ffmpeg_next::{self as ffmpeg, format, media::Type, Error};

/// Container, size and frame count of a produced artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactInfo {
    pub format: String,
    pub width: u32,
    pub height: u32,
    pub frames: usize,
}

impl fmt::Display for ArtifactInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}x{}, {} frames",
            self.format, self.width, self.height, self.frames
        )
    }
}

pub fn probe(path: &Path) -> Result<ArtifactInfo, Error> {
    ffmpeg::init()?;
    let mut ictx = format::input(&path)?;
    let format = ictx.format().name().to_string();

    let (stream_index, width, height) = {
        let stream = ictx
            .streams()
            .best(Type::Video)
            .ok_or(Error::StreamNotFound)?;
        let context = ffmpeg::codec::context::Context::from_parameters(stream.parameters())?;
        let decoder = context.decoder().video()?;
        (stream.index(), decoder.width(), decoder.height())
    };

    // one packet per frame for gif
    let frames = ictx
        .packets()
        .filter(|(stream, _)| stream.index() == stream_index)
        .count();

    Ok(ArtifactInfo {
        format,
        width,
        height,
        frames,
    })
}
