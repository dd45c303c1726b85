//! CLI argument parsing.
//!
//! Only the command token is interpreted here. Everything after it belongs to
//! the command and is passed through untouched, including flags.
use clap::Parser;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "hadupils",
    version,
    about = "Run Hive with hivercs and aux jars discovered from the project and user config",
    after_help = "Commands:\n  hive [ARGS]...  Run hive with discovered hivercs applied before ARGS\n\nDiscovery:\n  ~/.hadupils/hiverc          static hiverc applied first\n  ./hadoop-ext/*              files, jars and archives added via ADD\n  ./hive-ext/<name>/          per-extension assets, hiverc and aux-jars/\n\nExamples:\n  hadupils hive\n  hadupils hive --hiveconf my.foo=your.fu -f query.sql",
    arg_required_else_help = true
)]
pub struct RootArgs {
    /// Emit debug logging to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to run (case-insensitive)
    #[arg(value_name = "COMMAND")]
    pub command: String,

    /// Arguments passed through to the command
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_args_keep_their_flags() {
        let args = RootArgs::try_parse_from([
            "hadupils",
            "HIVE",
            "--hiveconf",
            "my.foo=your.fu",
            "-v",
        ])
        .expect("parse");
        assert_eq!(args.command, "HIVE");
        assert_eq!(args.args, vec!["--hiveconf", "my.foo=your.fu", "-v"]);
        assert!(!args.verbose);
    }

    #[test]
    fn verbose_before_command_is_ours() {
        let args = RootArgs::try_parse_from(["hadupils", "--verbose", "hive"]).expect("parse");
        assert!(args.verbose);
        assert_eq!(args.command, "hive");
        assert!(args.args.is_empty());
    }
}
