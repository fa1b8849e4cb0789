use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io::load_config;
use crate::io::items_io::initial_store;
use crate::model::AppConfig;
use crate::ops::ListSession;
use crate::ops::script::{parse_script, replay};

/// Load the effective configuration for this invocation.
pub fn load_cli_config(cli: &Cli) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    Ok(load_config(cli.config.as_deref(), &cwd)?)
}

/// Build the list session every command starts from
pub fn build_session(
    cli: &Cli,
    config: &AppConfig,
) -> Result<ListSession, Box<dyn std::error::Error>> {
    let store = initial_store(cli.items.as_deref(), config)?;
    tracing::info!(items = store.len(), "list loaded");
    Ok(ListSession::new(store, config))
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_cli_config(&cli)?;
    match &cli.command {
        None => crate::tui::run(build_session(&cli, &config)?, config),
        Some(Commands::Replay(args)) => cmd_replay(&cli, &config, &args.script),
        Some(Commands::List) => cmd_list(&cli, &config),
        Some(Commands::Config) => cmd_config(&config, cli.json),
    }
}

fn cmd_replay(
    cli: &Cli,
    config: &AppConfig,
    script_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(script_path)
        .map_err(|e| format!("could not read {}: {}", script_path.display(), e))?;
    let steps = parse_script(&text)?;
    let mut session = build_session(cli, config)?;
    tracing::info!(steps = steps.len(), script = %script_path.display(), "replaying script");

    let notices = replay(&mut session, &steps, Instant::now());

    if cli.json {
        let report = replay_to_json(&session, notices);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for (line, notice) in &notices {
            println!("{}", format_notice_line(*line, notice));
        }
        for line in format_replay_summary(&session) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_list(cli: &Cli, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let session = build_session(cli, config)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&items_to_json(&session))?);
    } else {
        for (position, label) in session.store().iter().enumerate() {
            println!("{}", format_item_line(position, label, false));
        }
    }
    Ok(())
}

fn cmd_config(config: &AppConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        print!("{}", toml::to_string_pretty(config)?);
    }
    Ok(())
}
