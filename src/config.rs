//! Launcher configuration.
//!
//! The optional `config.json` lives in the user config directory next to the
//! user's static hiverc. Environment variables win over the file.
use crate::search;
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";
/// Full command used to start Hive, split with shell quoting rules.
pub const HIVE_BIN_ENV: &str = "HADUPILS_HIVE_BIN";
pub const HIVE_HOME_ENV: &str = "HIVE_HOME";
const DEFAULT_HIVE_PROGRAM: &str = "hive";

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
    pub hive_bin: Option<String>,
}

impl LauncherConfig {
    /// Load `config.json` from the user config directory, if there is one.
    pub fn load() -> Result<Self> {
        let dir = search::user_config()?;
        Self::load_from(&dir.join(CONFIG_FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
        let config = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse launcher config {}", path.display()))?;
        Ok(config)
    }

    /// Resolve the Hive command from the environment and this config.
    pub fn hive_command(&self) -> Result<Vec<String>> {
        let explicit = env::var(HIVE_BIN_ENV).ok().filter(|v| !v.trim().is_empty());
        let hive_home = env::var_os(HIVE_HOME_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        self.resolve_hive_command(explicit.as_deref(), hive_home.as_deref())
    }

    /// Precedence: explicit override, config file, `$HIVE_HOME/bin/hive`,
    /// `hive` on `PATH`, then bare `hive`.
    pub fn resolve_hive_command(
        &self,
        explicit: Option<&str>,
        hive_home: Option<&Path>,
    ) -> Result<Vec<String>> {
        if let Some(raw) = explicit.or(self.hive_bin.as_deref()) {
            let parts = shell_words::split(raw)
                .with_context(|| format!("parse hive command {raw:?}"))?;
            if parts.is_empty() {
                return Err(anyhow!("hive command is empty"));
            }
            return Ok(parts);
        }
        let program = match hive_home {
            Some(home) => home.join("bin").join(DEFAULT_HIVE_PROGRAM),
            None => which::which(DEFAULT_HIVE_PROGRAM)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_HIVE_PROGRAM)),
        };
        Ok(vec![program.display().to_string()])
    }
}
