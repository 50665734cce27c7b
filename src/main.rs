use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use yt2gif::{locate, ConvertOptions, Ffmpeg, Pipeline, PipelineOptions, YtDlp};

/// Download a segment of a video and turn it into a GIF with the bundled ffmpeg.
#[derive(Parser, Debug)]
#[command(name = "yt2gif", version, about)]
struct Cli {
    /// Video URL
    url: String,

    /// Segment start as mm:ss, e.g. 1:25
    start: String,

    /// Segment end as mm:ss
    end: String,

    /// Installation root holding bin/<platform>/ffmpeg
    #[arg(long, env = "YT2GIF_ROOT")]
    root: Option<PathBuf>,

    /// Downloader executable
    #[arg(long, env = "YT2GIF_DOWNLOADER", default_value = "yt-dlp")]
    downloader: PathBuf,

    /// GIF frame rate
    #[arg(long, default_value_t = 10)]
    fps: u32,

    /// Maximum GIF width in pixels
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Delete the downloaded video and sliced clip after a successful run
    #[arg(long)]
    clean: bool,

    /// Log filter, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("{}", report(&err));
        process::exit(1);
    }
}

/// `error: <message>` followed by one `caused by:` line per underlying cause.
fn report(err: &failure::Error) -> String {
    let mut out = format!("error: {}", err);
    for cause in err.iter_causes() {
        out.push_str(&format!("\ncaused by: {}", cause));
    }
    out
}

/// Logs the artifact's format, size and frame count without failing the run.
#[cfg(feature = "probe")]
fn log_artifact(gif: &std::path::Path) {
    use tracing::warn;

    match yt2gif::probe::probe(gif) {
        Ok(info) => info!(%info, "artifact"),
        Err(err) => warn!(path = %gif.display(), error = %err, "could not inspect artifact"),
    }
}

fn run(cli: Cli) -> Result<(), failure::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let root = cli.root.clone().unwrap_or_else(locate::app_root);
    let ffmpeg = locate::locate_host(&root)?;
    info!(ffmpeg = %ffmpeg.display(), "using bundled ffmpeg");

    let options = PipelineOptions {
        convert: ConvertOptions {
            fps: cli.fps,
            max_width: cli.width,
        },
        clean: cli.clean,
    };
    let pipeline = Pipeline::new(YtDlp::new(&cli.downloader), Ffmpeg::new(ffmpeg), options);
    let gif = pipeline.run(&cli.url, &cli.start, &cli.end)?;

    #[cfg(feature = "probe")]
    log_artifact(&gif);

    println!("{}", gif.display());
    Ok(())
}
