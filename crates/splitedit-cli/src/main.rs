//! splitedit CLI: Command-line interface for the split-pane editor

use clap::{Parser, Subcommand};
use splitedit_engine::{Command, Config, InputPolicy, ThemeName};
use std::path::{Path, PathBuf};

/// Side-by-side multi-pane text editor for the terminal
#[derive(Parser)]
#[command(name = "splitedit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/splitedit/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Number of panes to start with
    #[arg(long, global = true)]
    panes: Option<usize>,

    /// Send typed keys to every pane instead of only the focused one
    #[arg(long, global = true)]
    broadcast: bool,

    /// Color theme (mocha, latte, high-contrast)
    #[arg(long, global = true)]
    theme: Option<ThemeName>,

    /// Write logs to this file (also read from SPLITEDIT_LOG_FILE)
    #[arg(long, global = true, env = "SPLITEDIT_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the editor (default when no command specified)
    Tui,

    /// Write the default config file
    Init,

    /// Print the command key bindings
    Keys {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate the config and report problems
    Check,
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        setup_tracing(path, cli.verbose);
    }

    if let Err(e) = run(&cli) {
        tracing::error!(error = %e, "splitedit failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> CliResult {
    let path = config_path(cli)?;

    match cli.command {
        None | Some(Commands::Tui) => {
            let config = load_config(cli, &path)?;
            // Fail before the runtime and terminal are set up
            config.validate()?;
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(splitedit_tui::run_tui(&config))
        }
        Some(Commands::Init) => cmd_init(&path),
        Some(Commands::Keys { json }) => cmd_keys(&load_config(cli, &path)?, json),
        Some(Commands::Check) => cmd_check(&load_config(cli, &path)?, &path),
    }
}

fn config_path(cli: &Cli) -> Result<PathBuf, String> {
    cli.config
        .clone()
        .or_else(Config::default_path)
        .ok_or_else(|| "no config directory found; pass --config".to_string())
}

/// Load the config file and apply command-line overrides.
fn load_config(cli: &Cli, path: &Path) -> Result<Config, splitedit_engine::ConfigError> {
    let mut config = Config::load_or_default(path)?;

    if let Some(panes) = cli.panes {
        config.panes.initial = panes;
    }
    if cli.broadcast {
        config.input_policy = InputPolicy::Broadcast;
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }

    tracing::debug!(path = %path.display(), ?config.panes, ?config.input_policy, "config loaded");
    Ok(config)
}

fn cmd_init(path: &Path) -> CliResult {
    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }

    Config::default().save(path)?;
    println!("Created {}", path.display());
    Ok(())
}

fn cmd_keys(config: &Config, json: bool) -> CliResult {
    let keymap = config.validate()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config.keys)?);
        return Ok(());
    }

    for command in Command::ALL {
        if let Some(binding) = keymap.binding(command) {
            let keys = config.keys.keys_for(command).join(", ");
            println!("  {:<20} {}", keys, binding.help_desc);
        }
    }
    Ok(())
}

fn cmd_check(config: &Config, path: &Path) -> CliResult {
    if path.exists() {
        println!("Config: {}", path.display());
    } else {
        println!("Config: {} (not found, using defaults)", path.display());
    }

    config.validate()?;

    let limits = config.panes;
    println!(
        "  panes: {} (min {}, max {})",
        limits.initial, limits.min, limits.max
    );
    println!("  input: {:?}", config.input_policy);
    println!("  theme: {:?}", config.theme);
    println!("OK");
    Ok(())
}

fn setup_tracing(path: &Path, verbose: bool) {
    use std::fs::OpenOptions;

    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    // The terminal belongs to the UI, so logs only ever go to a file
    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to open log file {}: {e}", path.display());
            return;
        }
    };

    let filter = EnvFilter::try_from_env("SPLITEDIT_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("splitedit=debug")
        } else {
            EnvFilter::new("splitedit=info")
        }
    });

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    tracing::info!(path = %path.display(), version = env!("CARGO_PKG_VERSION"), "tracing initialized");
}
