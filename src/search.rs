//! Well-known discovery locations.
//!
//! Nothing here is cached or checked for existence: every call resolves the
//! home and current directories again, and the scanners treat missing
//! locations as empty.
use crate::assets::{absolute, assets_in_optional, Asset};
use crate::error::{LaunchError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Overrides the user config directory when set.
pub const CONFIG_DIR_ENV: &str = "HADUPILS_CONFIG_DIR";
pub const USER_CONFIG_DIR_NAME: &str = ".hadupils";
pub const HADOOP_EXT_DIR_NAME: &str = "hadoop-ext";
pub const HIVE_EXT_DIR_NAME: &str = "hive-ext";

/// Return the per-user configuration directory (`~/.hadupils`).
pub fn user_config() -> Result<PathBuf> {
    let override_dir = env::var_os(CONFIG_DIR_ENV)
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from);
    user_config_from(override_dir.as_deref(), dirs::home_dir().as_deref())
}

/// Resolve the user config directory from an explicit override or a home directory.
///
/// A relative override is taken against the current directory.
pub fn user_config_from(override_dir: Option<&Path>, home: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return absolute(dir);
    }
    let home = home.ok_or(LaunchError::HomeDirUnavailable)?;
    Ok(user_config_in(home))
}

pub fn user_config_in(home: &Path) -> PathBuf {
    home.join(USER_CONFIG_DIR_NAME)
}

/// Return `<cwd>/hadoop-ext`.
pub fn hadoop_ext_dir() -> Result<PathBuf> {
    Ok(hadoop_ext_dir_in(&current_dir()?))
}

pub fn hadoop_ext_dir_in(base: &Path) -> PathBuf {
    base.join(HADOOP_EXT_DIR_NAME)
}

/// Return the assets found directly under `<cwd>/hadoop-ext`.
pub fn hadoop_assets() -> Result<Vec<Asset>> {
    assets_in_optional(&hadoop_ext_dir()?)
}

pub fn hadoop_assets_in(base: &Path) -> Result<Vec<Asset>> {
    assets_in_optional(&hadoop_ext_dir_in(base))
}

/// Return `<cwd>/hive-ext`.
pub fn hive_extensions() -> Result<PathBuf> {
    Ok(hive_extensions_in(&current_dir()?))
}

pub fn hive_extensions_in(base: &Path) -> PathBuf {
    base.join(HIVE_EXT_DIR_NAME)
}

pub(crate) fn current_dir() -> Result<PathBuf> {
    env::current_dir().map_err(LaunchError::CurrentDir)
}
