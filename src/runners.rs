//! Launching Hive with materialized hivercs.
use crate::error::{LaunchError, Result};
use crate::hiverc::HiveParam;
use crate::util::join_non_empty;
use std::env;
use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::process::{Command, ExitStatus};
use tempfile::NamedTempFile;

pub const HIVE_AUX_JARS_PATH_ENV: &str = "HIVE_AUX_JARS_PATH";

pub trait Runner {
    /// Run Hive with `params` and the given aux jars path, returning its exit status.
    fn run(&self, params: Vec<HiveParam>, hive_aux_jars_path: &OsStr) -> Result<ExitStatus>;
}

/// Runs the real Hive binary.
#[derive(Debug, Clone)]
pub struct HiveRunner {
    base_command: Vec<String>,
}

impl HiveRunner {
    /// `base_command` is the program followed by any leading arguments.
    pub fn new(base_command: Vec<String>) -> Self {
        Self { base_command }
    }

    /// Build the child command. Each hiverc is written to a temp file that
    /// must outlive the child, so the handles are returned with the command.
    pub fn command(
        &self,
        params: Vec<HiveParam>,
        hive_aux_jars_path: &OsStr,
        existing_aux_jars_path: Option<&OsStr>,
    ) -> Result<(Command, Vec<NamedTempFile>)> {
        let (program, leading) = self
            .base_command
            .split_first()
            .ok_or_else(|| LaunchError::SubprocessLaunch {
                program: String::new(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty hive command"),
            })?;

        let mut scripts = Vec::new();
        let mut args: Vec<OsString> = leading.iter().map(OsString::from).collect();
        for param in params {
            match param {
                HiveParam::Hiverc(hiverc) => {
                    let script = write_script(hiverc.content())?;
                    tracing::trace!(
                        source = ?hiverc.source(),
                        script = %script.path().display(),
                        "hiverc script"
                    );
                    args.push("-i".into());
                    args.push(script.path().as_os_str().to_owned());
                    scripts.push(script);
                }
                HiveParam::Arg(arg) => args.push(arg.into()),
            }
        }

        let aux_jars = merge_aux_jars_paths(hive_aux_jars_path, existing_aux_jars_path);
        let mut command = Command::new(program);
        command.args(args).env(HIVE_AUX_JARS_PATH_ENV, aux_jars);
        Ok((command, scripts))
    }
}

impl Runner for HiveRunner {
    fn run(&self, params: Vec<HiveParam>, hive_aux_jars_path: &OsStr) -> Result<ExitStatus> {
        let existing = env::var_os(HIVE_AUX_JARS_PATH_ENV);
        let (mut command, scripts) =
            self.command(params, hive_aux_jars_path, existing.as_deref())?;
        let program = command.get_program().to_string_lossy().into_owned();
        tracing::debug!(
            program = %program,
            hivercs = scripts.len(),
            args = command.get_args().len(),
            "launching hive"
        );

        let status = command
            .status()
            .map_err(|source| LaunchError::SubprocessLaunch {
                program: program.clone(),
                source,
            })?;
        tracing::debug!(program = %program, code = ?status.code(), "hive exited");
        drop(scripts);
        Ok(status)
    }
}

/// Discovered jars come first, any pre-existing value last.
///
/// Both sides are joined as raw OS strings; neither has to be valid UTF-8.
pub fn merge_aux_jars_paths(discovered: &OsStr, existing: Option<&OsStr>) -> OsString {
    join_non_empty([discovered, existing.unwrap_or_default()], ",")
}

fn write_script(content: &[u8]) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("hiverc-")
        .tempfile()
        .map_err(LaunchError::TempFile)?;
    file.write_all(content)
        .and_then(|()| file.flush())
        .map_err(LaunchError::TempFile)?;
    Ok(file)
}
