use super::{Extension, Flat, Static, AUX_JARS_DIR, HIVERC_NAME};
use crate::assets::{assets_in, assets_in_optional};
use crate::error::Result;
use crate::hiverc::Hiverc;
use crate::util::join_non_empty;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// One named extension directory under `hive-ext/`.
///
/// Its own assets are applied first, then its static `hiverc`.
#[derive(Debug, Clone)]
pub struct HiveExt {
    name: String,
    path: PathBuf,
    hivercs: Vec<Hiverc>,
    aux_jars_path: Option<OsString>,
}

impl HiveExt {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let own_assets = assets_in(&path)?
            .into_iter()
            .filter(|asset| asset.name() != HIVERC_NAME && asset.name() != AUX_JARS_DIR)
            .collect();
        let assets = Flat::new(own_assets);
        let hiverc = Static::new(path.join(HIVERC_NAME))?;
        let aux_jars: Vec<_> = assets_in_optional(&path.join(AUX_JARS_DIR))?
            .into_iter()
            .filter(|jar| !jar.hidden())
            .collect();

        let hivercs = assets
            .hivercs()
            .iter()
            .chain(hiverc.hivercs())
            .cloned()
            .collect();
        let aux_jars_path = non_empty(join_non_empty(
            aux_jars.iter().map(|jar| jar.path().as_os_str()),
            ",",
        ));

        tracing::debug!(
            name = %name,
            hivercs = assets.hivercs().len() + hiverc.hivercs().len(),
            aux_jars = aux_jars.len(),
            "hive extension"
        );
        Ok(Self {
            name,
            path,
            hivercs,
            aux_jars_path,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Extension for HiveExt {
    fn hivercs(&self) -> &[Hiverc] {
        &self.hivercs
    }

    fn hive_aux_jars_path(&self) -> Option<&OsStr> {
        self.aux_jars_path.as_deref()
    }
}

/// Every subdirectory of a `hive-ext/` directory, in name order.
#[derive(Debug, Clone, Default)]
pub struct HiveSet {
    members: Vec<HiveExt>,
    hivercs: Vec<Hiverc>,
    aux_jars_path: Option<OsString>,
}

impl HiveSet {
    /// Scan `path` for extensions. A missing directory is an empty set.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path: PathBuf = path.into();
        let mut members = Vec::new();
        for entry in assets_in_optional(&path)? {
            if entry.path().is_dir() {
                members.push(HiveExt::new(entry.path())?);
            }
        }

        let hivercs = members
            .iter()
            .flat_map(|member| member.hivercs().iter().cloned())
            .collect();
        let aux_jars_path = non_empty(join_non_empty(
            members.iter().filter_map(HiveExt::hive_aux_jars_path),
            ",",
        ));
        Ok(Self {
            members,
            hivercs,
            aux_jars_path,
        })
    }

    pub fn members(&self) -> &[HiveExt] {
        &self.members
    }
}

impl Extension for HiveSet {
    fn hivercs(&self) -> &[Hiverc] {
        &self.hivercs
    }

    fn hive_aux_jars_path(&self) -> Option<&OsStr> {
        self.aux_jars_path.as_deref()
    }
}

fn non_empty(joined: OsString) -> Option<OsString> {
    (!joined.is_empty()).then_some(joined)
}
