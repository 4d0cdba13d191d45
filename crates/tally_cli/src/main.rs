//! Terminal host for the Tally counter widget.
//!
//! # Responsibility
//! - Resolve configuration from `TALLY_*` variables and flags.
//! - Mount one widget, apply the requested action, print the render surface.

mod bell;
mod cli;
mod render;

use anyhow::{Context, Result};
use bell::TerminalBell;
use clap::Parser;
use cli::{Cli, Command};
use log::info;
use tally_core::{
    init_logging_from_config, open_configured_store, AudioBackend, CounterAction, CounterWidget,
    KeyValueStore, MemoryKeyValueStore, SilentAudio, TallyConfig,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    init_logging_from_config(&config)
        .map_err(anyhow::Error::msg)
        .context("failed to initialize logging")?;

    let store: Box<dyn KeyValueStore> = if cli.memory {
        Box::new(MemoryKeyValueStore::new())
    } else {
        Box::new(open_configured_store(&config).with_context(|| {
            format!("failed to open store at {}", config.db_path.display())
        })?)
    };

    if cli.no_bell {
        run(&cli, CounterWidget::new(store, SilentAudio, config.click_asset))
    } else {
        run(&cli, CounterWidget::new(store, TerminalBell, config.click_asset))
    }
}

fn resolve_config(cli: &Cli) -> Result<TallyConfig> {
    let mut config = TallyConfig::from_env()?;
    if let Some(db) = &cli.db {
        config.db_path = db.clone();
    }
    if let Some(log_dir) = &cli.log_dir {
        config.log_dir = Some(log_dir.clone());
    }
    if let Some(level) = &cli.log_level {
        config.set_log_level(level)?;
    }
    Ok(config)
}

fn run<S: KeyValueStore, A: AudioBackend>(cli: &Cli, mut widget: CounterWidget<S, A>) -> Result<()> {
    widget.mount();

    let command = cli.command.unwrap_or(Command::Show);
    let action = match command {
        Command::Show => None,
        Command::Inc => Some(CounterAction::Increment),
        Command::Dec => Some(CounterAction::Decrement),
        Command::Reset => Some(CounterAction::Reset),
        Command::ToggleSound => Some(CounterAction::ToggleSound),
        Command::Interactive => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            render::run_interactive(&mut widget, stdin.lock(), &mut stdout)
                .context("interactive session failed")?;
            widget.unmount();
            return Ok(());
        }
    };

    if let Some(action) = action {
        widget.dispatch(action);
        info!("event=cli_action module=cli status=ok action={action}");
    }

    let view = widget.view();
    if cli.json {
        println!("{}", render::render_json(&view)?);
    } else {
        println!("{}", render::render_line(&view));
    }
    widget.unmount();
    Ok(())
}
