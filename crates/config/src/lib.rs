//! Configuration loading and validation.
//!
//! Configuration is layered with [`figment`], later layers winning:
//!
//! 1. Built-in defaults (no modules).
//! 2. The configuration file, parsed according to its extension (`.toml`,
//!    `.yaml`/`.yml` or `.json`). Without an explicit path, `config.toml` in
//!    the platform configuration directory is used if it exists; platforms
//!    without one skip this layer.
//! 3. Environment variables prefixed `REEL_`, with `__` separating nested
//!    keys.
//!
//! ```toml
//! [[modules]]
//! repo = "https://modules.example/repo.json"
//! module = "gogo"
//!
//! [[modules]]
//! repo = "https://modules.example/repo.json"
//! module = "zoro"
//! enabled = false
//! ```

pub mod error;

use crate::error::{ErrorKind, Result};
use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use reel_models::{ModuleId, RepoId, RepoModuleId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

const ENV_PREFIX: &str = "REEL_";
const FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Resolution modules known to the host, in priority of declaration.
    pub modules: Vec<ModuleEntry>,
}

/// One module published by one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleEntry {
    pub repo: RepoId,
    pub module: ModuleId,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}
impl ModuleEntry {
    pub fn new(repo: impl Into<RepoId>, module: impl Into<ModuleId>) -> Self {
        Self {
            repo: repo.into(),
            module: module.into(),
            enabled: true,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn id(&self) -> RepoModuleId {
        RepoModuleId::create(self.repo.clone(), self.module.clone())
    }
}

fn enabled_by_default() -> bool {
    true
}

impl Config {
    /// Load, merge and validate configuration. See the [crate docs](crate).
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = Self::from_figment(&Self::figment(path)?)?;
        debug!(modules = config.modules.len(), "configuration loaded");
        Ok(config)
    }

    /// Build the layered provider without extracting it.
    ///
    /// Without an explicit path, a platform with no configuration directory
    /// is treated like a missing file.
    pub fn figment(path: Option<&Path>) -> Result<Figment> {
        let fallback = match path {
            Some(_) => None,
            None => Self::default_path().ok(),
        };
        layered(path, fallback.as_deref())
    }

    /// Extract and validate configuration from an arbitrary provider.
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        let config: Self = match figment.extract() {
            Ok(config) => config,
            Err(err) => exn::bail!(ErrorKind::Load(err.to_string())),
        };
        config.validate()?;
        Ok(config)
    }

    /// Location of the configuration file when none is specified.
    pub fn default_path() -> Result<PathBuf> {
        let Some(dirs) = ProjectDirs::from("", "", "reel") else {
            exn::bail!(ErrorKind::NoConfigDirectory);
        };
        Ok(dirs.config_dir().join(FILE_NAME))
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for entry in &self.modules {
            let id = entry.id();
            if !seen.insert(id.clone()) {
                exn::bail!(ErrorKind::DuplicateModule(id));
            }
        }
        Ok(())
    }

    /// Keys of every enabled module, in declaration order.
    pub fn enabled_modules(&self) -> impl Iterator<Item = RepoModuleId> + '_ {
        self.modules.iter().filter(|entry| entry.enabled).map(ModuleEntry::id)
    }
}

fn layered(path: Option<&Path>, fallback: Option<&Path>) -> Result<Figment> {
    let figment = Figment::from(Serialized::defaults(Config::default()));
    let figment = match (path, fallback) {
        (Some(path), _) if !path.exists() => {
            exn::bail!(ErrorKind::Load(format!("file not found: {}", path.display())))
        },
        (Some(path), _) => with_file(figment, path)?,
        (None, Some(default)) if default.exists() => with_file(figment, default)?,
        (None, Some(default)) => {
            debug!(path = %default.display(), "no configuration file, using defaults");
            figment
        },
        (None, None) => {
            debug!("no configuration directory, using defaults");
            figment
        },
    };
    Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
}

fn with_file(figment: Figment, path: &Path) -> Result<Figment> {
    Ok(match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => figment.merge(Toml::file_exact(path)),
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path)),
        Some("json") => figment.merge(Json::file_exact(path)),
        _ => exn::bail!(ErrorKind::UnsupportedFormat(path.to_path_buf())),
    })
}
