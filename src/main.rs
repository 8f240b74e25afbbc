use anyhow::{Context, Result as AnyhowResult};
use brine::app::Shell;
use brine::config::Config;
use brine::services::{terminal_modes, tracing_setup};
use brine::view::{Surface, TermSurface};
use clap::Parser;
use crossterm::event::{read as event_read, Event as CrosstermEvent, KeyEventKind};
use std::path::PathBuf;

/// A small interactive shell with history and scrollback
#[derive(Parser, Debug)]
#[command(name = "brine")]
#[command(about = "A line-editing shell with command history and pannable scrollback", long_about = None)]
#[command(version)]
struct Args {
    /// Path to configuration file (JSON)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for diagnostics (default: system temp dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Override the prompt string
    #[arg(long, value_name = "PROMPT")]
    prompt: Option<String>,
}

fn load_config(args: &Args) -> AnyhowResult<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    // CLI flag overrides config
    if let Some(prompt) = &args.prompt {
        config.prompt = prompt.clone();
    }

    Ok(config)
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    let log_file = args
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("brine.log"));
    if !tracing_setup::init_global(&log_file) {
        eprintln!("warning: could not open log file {}", log_file.display());
    }
    tracing::info!("Shell starting");

    let config = load_config(&args)?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        terminal_modes::emergency_cleanup();
        original_hook(panic);
    }));

    let mut modes =
        terminal_modes::TerminalModes::enable().context("Failed to set up the terminal")?;

    let mut surface = TermSurface::stdout().context("Failed to query terminal size")?;
    tracing::info!(
        "Viewport: {}x{}",
        surface.viewport_width(),
        surface.viewport_height()
    );

    let mut shell = Shell::new(config);
    let result = run_event_loop(&mut shell, &mut surface);

    modes.undo();
    tracing::info!("Shell exiting");

    result.context("Shell loop returned an error")
}

/// Main event loop: one blocking read per turn, each event fully processed
/// (state mutated, display repainted) before the next read.
fn run_event_loop(shell: &mut Shell, surface: &mut TermSurface<std::io::Stdout>) -> AnyhowResult<()> {
    shell.redraw(surface)?;

    loop {
        if shell.should_quit() {
            break;
        }

        match event_read().context("Failed to read terminal event")? {
            CrosstermEvent::Key(key_event) => {
                if key_event.kind == KeyEventKind::Press {
                    shell.handle_key(key_event, surface)?;
                }
            }
            CrosstermEvent::Resize(width, height) => {
                tracing::debug!("Resize to {}x{}", width, height);
                surface.set_size(width, height);
                shell.redraw(surface)?;
            }
            _ => {}
        }
    }

    Ok(())
}
