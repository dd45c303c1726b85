use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("cannot list directory {}: {source}", path.display())]
    DirectoryScan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read hiverc {}: {source}", path.display())]
    ReadHiverc {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write temporary hiverc: {0}")]
    TempFile(#[source] io::Error),
    #[error("failed to launch {program}: {source}")]
    SubprocessLaunch {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("cannot determine home directory")]
    HomeDirUnavailable,
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, LaunchError>;
