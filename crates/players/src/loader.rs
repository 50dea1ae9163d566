use crate::CallStation;
use crate::Fish;
use crate::Rock;
use crate::Script;
use bmb_gameroom::Player;
use std::path::Path;
use std::path::PathBuf;

/// What to do when an uploaded strategy cannot be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Refuse to open the room.
    #[default]
    Reject,
    /// Seat a [`Rock`] in its place and play on.
    Rock,
}

/// Resolves uploaded strategy files into seated players.
///
/// Strategies are named by file stem relative to the loader's directory;
/// absolute paths pass through untouched. Spawning happens eagerly so a
/// broken upload is caught at load time, not mid-hand.
#[derive(Debug, Clone)]
pub struct Loader {
    dir: PathBuf,
    fallback: FallbackPolicy,
}

impl Loader {
    pub fn new(dir: impl Into<PathBuf>, fallback: FallbackPolicy) -> Self {
        Self {
            dir: dir.into(),
            fallback,
        }
    }
    pub fn dir(&self) -> &Path {
        &self.dir
    }
    fn resolve(&self, name: &str) -> PathBuf {
        let path = Path::new(name);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.dir.join(name)
        }
    }
    /// Loads one strategy by name, applying the fallback policy on failure.
    /// The built-in names fill seats without an upload.
    pub fn load(&self, name: &str) -> anyhow::Result<Box<dyn Player>> {
        match name {
            "fish" => return Ok(Box::new(Fish)),
            "rock" => return Ok(Box::new(Rock)),
            "station" => return Ok(Box::new(CallStation)),
            _ => {}
        }
        let path = self.resolve(name);
        match Script::spawn(&path) {
            Ok(script) => Ok(Box::new(script)),
            Err(e) => match self.fallback {
                FallbackPolicy::Reject => {
                    Err(e.context(format!("cannot load strategy {:?}", name)))
                }
                FallbackPolicy::Rock => {
                    log::warn!("[loader] {:#}; seating a rock for {:?}", e, name);
                    Ok(Box::new(Rock))
                }
            },
        }
    }
}
