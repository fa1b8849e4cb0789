use actionlist::cli::commands::Cli;
use actionlist::cli::handlers;
use actionlist::io::logging::{default_log_path, init_logging};
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    if let Err(e) = init_logging(&log_path) {
        eprintln!("warning: {}", e);
    }

    // No subcommand → launch TUI
    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
