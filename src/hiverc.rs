//! Hiverc scripts and the parameter list handed to the runner.
//!
//! Script content is kept as raw bytes. Hive reads the files itself, so
//! nothing here assumes an encoding.
use crate::assets::Asset;
use std::path::{Path, PathBuf};

/// One initialization script, passed to Hive with a single `-i` flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hiverc {
    /// Verbatim contents of a hiverc file found on disk.
    Static { path: PathBuf, content: Vec<u8> },
    /// Script text generated from discovered assets.
    Dynamic { content: Vec<u8> },
}

impl Hiverc {
    /// Build a dynamic hiverc with one `ADD` line per asset.
    ///
    /// Returns `None` for an empty asset list so callers never emit an empty script.
    pub fn from_assets(assets: &[Asset]) -> Option<Self> {
        if assets.is_empty() {
            return None;
        }
        let mut content = Vec::new();
        for asset in assets {
            content.extend_from_slice(&asset.hiverc_command());
            content.push(b'\n');
        }
        Some(Hiverc::Dynamic { content })
    }

    pub fn content(&self) -> &[u8] {
        match self {
            Hiverc::Static { content, .. } | Hiverc::Dynamic { content } => content,
        }
    }

    pub fn source(&self) -> Option<&Path> {
        match self {
            Hiverc::Static { path, .. } => Some(path),
            Hiverc::Dynamic { .. } => None,
        }
    }
}

/// An element of the combined hiverc-then-arguments sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HiveParam {
    Hiverc(Hiverc),
    Arg(String),
}

impl From<Hiverc> for HiveParam {
    fn from(hiverc: Hiverc) -> Self {
        HiveParam::Hiverc(hiverc)
    }
}

impl From<String> for HiveParam {
    fn from(arg: String) -> Self {
        HiveParam::Arg(arg)
    }
}
