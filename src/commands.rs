//! Command handlers and the `hive` orchestration.
//!
//! `hive` gathers hivercs from three places and always applies them in the
//! same order: the user's static hiverc, the project's `hadoop-ext/` assets,
//! then each extension under `hive-ext/`. Caller arguments follow.
use crate::config::LauncherConfig;
use crate::error::{LaunchError, Result};
use crate::extensions::{Extension, Flat, HiveSet, Static, HIVERC_NAME};
use crate::hiverc::HiveParam;
use crate::runners::{HiveRunner, Runner};
use crate::search;
use crate::util::display_path;
use std::cell::OnceCell;
use std::ffi::OsStr;
use std::fmt;
use std::path::PathBuf;
use std::process::ExitStatus;

/// Registered command handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    Hive,
}

const HANDLERS: &[(&str, Handler)] = &[("hive", Handler::Hive)];

impl Handler {
    pub fn name(self) -> &'static str {
        match self {
            Handler::Hive => "hive",
        }
    }

    pub fn run(self, args: Vec<String>) -> anyhow::Result<ExitStatus> {
        match self {
            Handler::Hive => Hive::run_default(args),
        }
    }
}

/// Look up a handler by name, ignoring case.
///
/// The name is rendered to a string before folding case, so any displayable
/// token works.
pub fn handler_for(name: impl fmt::Display) -> Result<Handler> {
    let key = name.to_string().to_lowercase();
    HANDLERS
        .iter()
        .find(|(registered, _)| *registered == key)
        .map(|(_, handler)| *handler)
        .ok_or(LaunchError::UnknownCommand(key))
}

/// Dispatch `args` to the handler registered as `name`.
pub fn run(name: impl fmt::Display, args: Vec<String>) -> anyhow::Result<ExitStatus> {
    let handler = handler_for(name)?;
    tracing::debug!(command = handler.name(), args = args.len(), "dispatch");
    handler.run(args)
}

/// Where the `hive` command gets its extensions from.
pub trait ExtensionSource {
    fn user_config(&self) -> Result<Box<dyn Extension>>;
    fn hadoop_ext(&self) -> Result<Box<dyn Extension>>;
    fn hive_ext(&self) -> Result<Box<dyn Extension>>;
}

/// Filesystem discovery.
///
/// By default the user config directory and the current directory are
/// looked up on every call; [`Discovery::rooted`] pins both.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    roots: Option<Roots>,
}

#[derive(Debug, Clone)]
struct Roots {
    user_config: PathBuf,
    project: PathBuf,
}

impl Discovery {
    /// Discover under `user_config` and `project` instead of the home and current directories.
    pub fn rooted(user_config: impl Into<PathBuf>, project: impl Into<PathBuf>) -> Self {
        Self {
            roots: Some(Roots {
                user_config: user_config.into(),
                project: project.into(),
            }),
        }
    }
}

impl ExtensionSource for Discovery {
    fn user_config(&self) -> Result<Box<dyn Extension>> {
        let dir = match &self.roots {
            Some(roots) => roots.user_config.clone(),
            None => search::user_config()?,
        };
        let path = dir.join(HIVERC_NAME);
        tracing::debug!(path = %path.display(), "user config hiverc");
        Ok(Box::new(Static::new(path)?))
    }

    fn hadoop_ext(&self) -> Result<Box<dyn Extension>> {
        let assets = match &self.roots {
            Some(roots) => search::hadoop_assets_in(&roots.project)?,
            None => search::hadoop_assets()?,
        };
        tracing::debug!(assets = assets.len(), "hadoop-ext assets");
        Ok(Box::new(Flat::new(assets)))
    }

    fn hive_ext(&self) -> Result<Box<dyn Extension>> {
        let dir = match &self.roots {
            Some(roots) => search::hive_extensions_in(&roots.project),
            None => search::hive_extensions()?,
        };
        let set = HiveSet::new(dir)?;
        let cwd = search::current_dir()?;
        for member in set.members() {
            tracing::debug!(
                name = member.name(),
                path = %display_path(member.path(), Some(&cwd)),
                "hive extension found"
            );
        }
        Ok(Box::new(set))
    }
}

/// One invocation of the `hive` command.
///
/// Extensions are resolved on first use and kept for the life of this value.
pub struct Hive<S = Discovery, R = HiveRunner> {
    source: S,
    runner: R,
    user_config: OnceCell<Box<dyn Extension>>,
    hadoop_ext: OnceCell<Box<dyn Extension>>,
    hive_ext: OnceCell<Box<dyn Extension>>,
}

impl Hive {
    /// Build a command that discovers from the filesystem and runs the configured Hive.
    pub fn new() -> anyhow::Result<Self> {
        let config = LauncherConfig::load()?;
        let runner = HiveRunner::new(config.hive_command()?);
        Ok(Self::with_parts(Discovery::default(), runner))
    }

    /// Equivalent to `Hive::new()?.run(args)`.
    pub fn run_default(args: Vec<String>) -> anyhow::Result<ExitStatus> {
        Ok(Self::new()?.run(args)?)
    }
}

impl<S: ExtensionSource, R: Runner> Hive<S, R> {
    pub fn with_parts(source: S, runner: R) -> Self {
        Self {
            source,
            runner,
            user_config: OnceCell::new(),
            hadoop_ext: OnceCell::new(),
            hive_ext: OnceCell::new(),
        }
    }

    pub fn user_config(&self) -> Result<&dyn Extension> {
        memoized(&self.user_config, || self.source.user_config())
    }

    pub fn hadoop_ext(&self) -> Result<&dyn Extension> {
        memoized(&self.hadoop_ext, || self.source.hadoop_ext())
    }

    pub fn hive_ext(&self) -> Result<&dyn Extension> {
        memoized(&self.hive_ext, || self.source.hive_ext())
    }

    /// Apply all discovered hivercs ahead of `args` and run Hive.
    pub fn run(&self, args: Vec<String>) -> Result<ExitStatus> {
        let user_config = self.user_config()?;
        let hadoop_ext = self.hadoop_ext()?;
        let hive_ext = self.hive_ext()?;

        let params: Vec<HiveParam> = user_config
            .hivercs()
            .iter()
            .chain(hadoop_ext.hivercs())
            .chain(hive_ext.hivercs())
            .cloned()
            .map(HiveParam::from)
            .chain(args.into_iter().map(HiveParam::from))
            .collect();
        let aux_jars_path = hive_ext.hive_aux_jars_path().unwrap_or(OsStr::new(""));
        self.runner.run(params, aux_jars_path)
    }
}

fn memoized<'a>(
    cell: &'a OnceCell<Box<dyn Extension>>,
    init: impl FnOnce() -> Result<Box<dyn Extension>>,
) -> Result<&'a dyn Extension> {
    if let Some(ext) = cell.get() {
        return Ok(ext.as_ref());
    }
    let ext = init()?;
    Ok(cell.get_or_init(|| ext).as_ref())
}
