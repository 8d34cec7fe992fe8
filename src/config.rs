use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::session::SessionConfig;

/// Persistence for the intro screen choices between runs
pub trait ConfigStore {
    fn try_load(&self) -> Result<Option<SessionConfig>>;
    fn save(&self, cfg: &SessionConfig) -> Result<()>;

    /// Saved config, falling back to defaults when missing or unusable
    fn load(&self) -> SessionConfig {
        match self.try_load() {
            Ok(Some(cfg)) => match cfg.validate() {
                Ok(()) => cfg,
                Err(e) => {
                    tracing::warn!(error = %e, "ignoring saved config");
                    SessionConfig::default()
                }
            },
            Ok(None) => SessionConfig::default(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read saved config");
                SessionConfig::default()
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "intuit") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("intuit_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn try_load(&self) -> Result<Option<SessionConfig>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_slice::<SessionConfig>(&bytes)?))
    }

    fn save(&self, cfg: &SessionConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

/// Store that keeps nothing, for headless runs
#[derive(Debug, Default, Clone, Copy)]
pub struct NullConfigStore;

impl ConfigStore for NullConfigStore {
    fn try_load(&self) -> Result<Option<SessionConfig>> {
        Ok(None)
    }

    fn save(&self, _cfg: &SessionConfig) -> Result<()> {
        Ok(())
    }
}
