use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use stepflow::app::App;
use stepflow::config::Config;
use stepflow::{demo, logging};

#[derive(Parser)]
#[command(name = "stepflow")]
#[command(about = "Multi-step TUI flow controller with progress tracking")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Run a generically named flow of N steps instead of the checkout demo
    #[arg(long)]
    steps: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the effective configuration
    Config {
        /// Also write it to stepflow.toml in the current directory
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (needed for logging setup)
    let config = Config::load(cli.config.as_deref())?;

    // Determine if we're running in TUI mode (no subcommand)
    let is_tui_mode = cli.command.is_none();

    // Initialize logging (file-based for TUI, stderr for CLI)
    let logging_handle = logging::init_logging(&config, is_tui_mode, cli.debug)?;

    match cli.command {
        Some(Commands::Config { init }) => {
            cmd_config(&config, init)?;
        }
        None => {
            run_tui(config, cli.steps, logging_handle.log_file_path)?;
        }
    }

    Ok(())
}

fn cmd_config(config: &Config, init: bool) -> Result<()> {
    print!("{}", toml::to_string_pretty(config)?);
    if init {
        config.save()?;
        eprintln!("Written to {}", Config::project_config_path().display());
    }
    Ok(())
}

fn run_tui(config: Config, steps: Option<usize>, log_file_path: Option<PathBuf>) -> Result<()> {
    let flow = match steps {
        Some(count) => demo::numbered_flow(count),
        None => demo::checkout_flow(),
    };
    tracing::info!(steps = flow.len(), "starting flow");

    let mut app = App::new(config, flow);
    app.run()?;

    let completions = app.completions();
    if completions > 0 {
        println!("Flow completed {completions} time(s).");
    } else {
        println!("Flow exited without completing.");
    }
    if let Some(path) = log_file_path {
        println!("Log: {}", path.display());
    }
    Ok(())
}
