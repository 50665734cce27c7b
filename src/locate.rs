use std::env;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Host platforms that ship a bundled ffmpeg under `bin/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
}

impl Platform {
    /// Prefix match on the lower-cased OS identifier (`windows`, `linux`, ...).
    pub fn from_os(os: &str) -> Result<Self, Error> {
        let os_lower = os.to_lowercase();
        if os_lower.starts_with("win") {
            Ok(Platform::Windows)
        } else if os_lower.starts_with("linux") {
            Ok(Platform::Linux)
        } else {
            Err(Error::UnsupportedPlatform { os: os.to_string() })
        }
    }

    fn dir(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Linux => "linux",
        }
    }

    fn binary(self) -> &'static str {
        match self {
            Platform::Windows => "ffmpeg.exe",
            Platform::Linux => "ffmpeg",
        }
    }
}

/// Path of the bundled ffmpeg for `os` below the installation `root`.
pub fn locate(os: &str, root: &Path) -> Result<PathBuf, Error> {
    let platform = Platform::from_os(os)?;
    Ok(root.join("bin").join(platform.dir()).join(platform.binary()))
}

pub fn locate_host(root: &Path) -> Result<PathBuf, Error> {
    locate(env::consts::OS, root)
}

/// Installation root: two directories above the one holding the executable,
/// i.e. `<root>/target/<profile>/yt2gif`.
pub fn app_root() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.ancestors().nth(3).map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
