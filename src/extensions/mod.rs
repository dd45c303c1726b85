//! Extension strategies: sources of hivercs and aux jars.
//!
//! Each strategy is built once from the filesystem and then only read. The
//! orchestrator treats them uniformly through [`Extension`]. Dotfiles are
//! never applied: not as assets, not as aux jars.
use crate::hiverc::Hiverc;
use std::ffi::OsStr;

mod flat;
mod hive_set;
mod static_hiverc;

pub use flat::Flat;
pub use hive_set::HiveSet;
pub use static_hiverc::Static;

/// Name of the static hiverc file inside a config or extension directory.
pub const HIVERC_NAME: &str = "hiverc";
/// Name of the aux jars directory inside a hive extension.
pub const AUX_JARS_DIR: &str = "aux-jars";

pub trait Extension {
    /// Hivercs in the order they should be applied.
    fn hivercs(&self) -> &[Hiverc];

    /// Comma separated jar paths for `HIVE_AUX_JARS_PATH`, if any.
    fn hive_aux_jars_path(&self) -> Option<&OsStr> {
        None
    }
}
