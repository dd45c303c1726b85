//! Classification and discovery of Hive assets.
//!
//! An asset is any top-level filesystem entry that a hiverc can pull into a
//! Hive session with an `ADD` statement. The kind is decided purely from the
//! trailing characters of the path so discovery never has to open a file.
use crate::error::{LaunchError, Result};
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

const ARCHIVE_SUFFIX: &[u8] = b".tar.gz";
const JAR_SUFFIX: &[u8] = b".jar";
const SKIP_NAMES: [&str; 2] = [".", ".."];

/// The Hive resource type an asset is added as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    File,
    Jar,
    Archive,
}

impl AssetKind {
    /// Keyword used in `ADD <KEYWORD> <path>;`.
    pub fn keyword(self) -> &'static str {
        match self {
            AssetKind::File => "FILE",
            AssetKind::Jar => "JAR",
            AssetKind::Archive => "ARCHIVE",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    name: String,
    path: PathBuf,
    kind: AssetKind,
}

impl Asset {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    /// Dotfiles are reported by discovery; strategies decide whether to skip them.
    pub fn hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// The hiverc statement that adds this asset to a session.
    ///
    /// The path is written as its raw bytes.
    pub fn hiverc_command(&self) -> Vec<u8> {
        let mut command = format!("ADD {} ", self.kind).into_bytes();
        command.extend_from_slice(self.path.as_os_str().as_encoded_bytes());
        command.push(b';');
        command
    }
}

/// Classify `path` by suffix. `.tar.gz` is checked before `.jar`.
pub fn asset_for(path: impl Into<PathBuf>) -> Asset {
    let path = path.into();
    let bytes = path.as_os_str().as_encoded_bytes();
    let kind = if bytes.ends_with(ARCHIVE_SUFFIX) {
        AssetKind::Archive
    } else if bytes.ends_with(JAR_SUFFIX) {
        AssetKind::Jar
    } else {
        AssetKind::File
    };
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Asset { name, path, kind }
}

/// List the top-level entries of `directory`, sorted by name, as assets.
pub fn assets_in(directory: &Path) -> Result<Vec<Asset>> {
    let path = absolute(directory)?;
    let mut names = entry_names(&path)?;
    names.sort();
    tracing::debug!(directory = %path.display(), entries = names.len(), "scanned assets");
    let assets: Vec<Asset> = names
        .into_iter()
        .map(|name| asset_for(path.join(name)))
        .collect();
    for asset in &assets {
        tracing::trace!(name = asset.name(), kind = %asset.kind(), "asset");
    }
    Ok(assets)
}

/// Like [`assets_in`], but a missing directory is an empty result.
pub fn assets_in_optional(directory: &Path) -> Result<Vec<Asset>> {
    if !directory.exists() {
        tracing::debug!(directory = %directory.display(), "no asset directory");
        return Ok(Vec::new());
    }
    assets_in(directory)
}

fn entry_names(path: &Path) -> Result<Vec<OsString>> {
    let scan_error = |source| LaunchError::DirectoryScan {
        path: path.to_path_buf(),
        source,
    };
    let mut names = Vec::new();
    for entry in fs::read_dir(path).map_err(scan_error)? {
        let name = entry.map_err(scan_error)?.file_name();
        if SKIP_NAMES.iter().any(|skip| name == *skip) {
            continue;
        }
        names.push(name);
    }
    Ok(names)
}

pub(crate) fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(LaunchError::CurrentDir)?;
    Ok(cwd.join(path))
}
