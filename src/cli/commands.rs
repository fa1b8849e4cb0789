use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "actionlist", about = concat!("[x] actionlist v", env!("CARGO_PKG_VERSION"), " - check, act, undo"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ./actionlist.toml when present)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Start from the labels in this file, one per line
    #[arg(long, global = true)]
    pub items: Option<PathBuf>,

    /// Write logs here instead of the temp directory
    #[arg(long = "log-file", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a script of list events headlessly and print what happened
    Replay(ReplayArgs),
    /// Print the starting list
    List,
    /// Print the effective configuration
    Config,
}

#[derive(Args)]
pub struct ReplayArgs {
    /// Script file: one event per line (tap, check, uncheck, swipe,
    /// select-all, delete, finish, undo, revoke, elapse, teardown)
    pub script: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["actionlist"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli =
            Cli::try_parse_from(["actionlist", "replay", "s.txt", "--json", "-c", "x.toml"])
                .unwrap();
        assert!(cli.json);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        match cli.command {
            Some(Commands::Replay(args)) => assert_eq!(args.script, PathBuf::from("s.txt")),
            _ => panic!("expected replay"),
        }
    }
}
