//! Shared test infrastructure for integration tests.
//!
//! A [`TestFixture`] is a throwaway home directory plus project directory and a
//! fake `hive` executable that records what it was launched with.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use tempfile::TempDir;

/// Exit code the fake hive always returns, so pass-through can be asserted.
pub const FAKE_HIVE_EXIT: i32 = 3;

const FAKE_HIVE: &str = r#"#!/bin/sh
out="$HADUPILS_TEST_OUT"
printf '%s' "$HIVE_AUX_JARS_PATH" > "$out/aux"
: > "$out/args"
n=0
prev=""
for arg in "$@"; do
  n=$((n+1))
  printf '%s\n' "$arg" >> "$out/args"
  if [ "$prev" = "-i" ]; then
    cp "$arg" "$out/script-$n"
  fi
  prev="$arg"
done
exit 3
"#;

/// What the fake hive observed.
#[derive(Debug)]
pub struct Launch {
    pub status: ExitStatus,
    pub args: Vec<String>,
    pub aux_jars_path: String,
    /// Contents of each `-i` script, in argument order.
    pub scripts: Vec<String>,
}

pub struct TestFixture {
    _root: TempDir,
    pub home: PathBuf,
    pub project: PathBuf,
    out: PathBuf,
    hive: PathBuf,
}

impl TestFixture {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        let base = root.path().canonicalize().expect("canonicalize temp dir");
        let home = base.join("home");
        let project = base.join("project");
        let out = base.join("out");
        for dir in [&home, &project, &out] {
            fs::create_dir_all(dir).expect("create fixture dir");
        }
        let hive = base.join("bin").join("hive");
        write_file(&hive, FAKE_HIVE);
        fs::set_permissions(&hive, fs::Permissions::from_mode(0o755)).expect("chmod hive");
        Self {
            _root: root,
            home,
            project,
            out,
            hive,
        }
    }

    /// Create an empty file relative to the project and return its path.
    pub fn touch(&self, rel: &str) -> PathBuf {
        let path = self.project.join(rel);
        write_file(&path, "");
        path
    }

    pub fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new(env!("CARGO_BIN_EXE_hadupils"));
        command
            .args(args)
            .current_dir(&self.project)
            .env("HOME", &self.home)
            .env("HADUPILS_HIVE_BIN", &self.hive)
            .env("HADUPILS_TEST_OUT", &self.out)
            .env_remove("HADUPILS_CONFIG_DIR")
            .env_remove("HIVE_AUX_JARS_PATH")
            .env_remove("RUST_LOG");
        command
    }

    /// Whether the fake hive was started at all.
    pub fn launched(&self) -> bool {
        self.out.join("args").exists()
    }

    pub fn launch(&self, mut command: Command) -> Launch {
        let status = command.status().expect("run hadupils");
        let args: Vec<String> = fs::read_to_string(self.out.join("args"))
            .expect("fake hive args")
            .lines()
            .map(str::to_string)
            .collect();
        let aux_jars_path = fs::read_to_string(self.out.join("aux")).expect("fake hive env");
        let scripts = args
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx > 0 && args[idx - 1] == "-i")
            .map(|(idx, _)| {
                fs::read_to_string(self.out.join(format!("script-{}", idx + 1)))
                    .expect("copied script")
            })
            .collect();
        Launch {
            status,
            args,
            aux_jars_path,
            scripts,
        }
    }
}

pub fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directory");
    }
    fs::write(path, contents.as_bytes()).expect("write file");
}
