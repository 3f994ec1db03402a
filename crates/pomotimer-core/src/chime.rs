//! Notification sound played on every phase change.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::PlaybackError;

pub trait Chime: Send + Sync {
    fn play(&self) -> Result<(), PlaybackError>;
}

/// Plays a sound file through the platform's command-line player.
///
/// The player is spawned and reaped on a helper thread; `play` never waits
/// for the sound to finish.
#[derive(Debug, Clone)]
pub struct SystemChime {
    asset: PathBuf,
}

impl SystemChime {
    pub fn new(asset: impl Into<PathBuf>) -> Self {
        Self {
            asset: asset.into(),
        }
    }
}

impl Chime for SystemChime {
    fn play(&self) -> Result<(), PlaybackError> {
        if !self.asset.is_file() {
            return Err(PlaybackError::AssetMissing(self.asset.clone()));
        }

        for (player, args) in players(&self.asset) {
            let spawned = Command::new(player)
                .args(args)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();
            match spawned {
                Ok(mut child) => {
                    debug!(player, asset = %self.asset.display(), "playing chime");
                    std::thread::spawn(move || {
                        if let Err(e) = child.wait() {
                            debug!(player, error = %e, "failed to reap chime player");
                        }
                    });
                    return Ok(());
                }
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(source) => {
                    return Err(PlaybackError::Spawn {
                        player: player.to_string(),
                        source,
                    })
                }
            }
        }
        Err(PlaybackError::NoPlayer(self.asset.clone()))
    }
}

/// Candidate players in order of preference.
fn players(asset: &Path) -> Vec<(&'static str, Vec<OsString>)> {
    let path = asset.as_os_str().to_os_string();
    if cfg!(target_os = "macos") {
        vec![("afplay", vec![path])]
    } else if cfg!(windows) {
        let script = format!(
            "(New-Object Media.SoundPlayer '{}').PlaySync()",
            asset.display().to_string().replace('\'', "''")
        );
        vec![(
            "powershell",
            vec!["-NoProfile".into(), "-Command".into(), script.into()],
        )]
    } else {
        vec![
            ("paplay", vec![path.clone()]),
            ("aplay", vec!["-q".into(), path]),
        ]
    }
}

/// Chime that never makes a sound.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentChime;

impl Chime for SilentChime {
    fn play(&self) -> Result<(), PlaybackError> {
        Ok(())
    }
}
