use super::Extension;
use crate::error::{LaunchError, Result};
use crate::hiverc::Hiverc;
use std::fs;
use std::path::PathBuf;

/// A single hiverc file applied verbatim when present.
#[derive(Debug, Clone)]
pub struct Static {
    hivercs: Vec<Hiverc>,
}

impl Static {
    /// Read `path` if it is a file. A missing file yields no hivercs.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut hivercs = Vec::new();
        if path.is_file() {
            let content = fs::read(&path).map_err(|source| LaunchError::ReadHiverc {
                path: path.clone(),
                source,
            })?;
            tracing::debug!(path = %path.display(), bytes = content.len(), "static hiverc");
            hivercs.push(Hiverc::Static { path, content });
        }
        Ok(Self { hivercs })
    }
}

impl Extension for Static {
    fn hivercs(&self) -> &[Hiverc] {
        &self.hivercs
    }
}
