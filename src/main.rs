//! Conway's Game of Life on a bounded grid, in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

use life::patterns::PATTERNS;
use life::terminal_ui::TerminalUI;
use life::{Config, Driver};

#[derive(Parser)]
#[command(name = "life")]
#[command(version)]
#[command(about = "Conway's Game of Life (B3/S23) on a fixed-size, non-wrapping grid")]
struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of grid rows
    #[arg(long)]
    rows: Option<usize>,

    /// Number of grid columns
    #[arg(long)]
    cols: Option<usize>,

    /// Milliseconds between generations
    #[arg(short, long)]
    interval_ms: Option<u64>,

    /// Seed pattern placed at the center of the grid
    #[arg(short, long)]
    pattern: Option<String>,

    /// Start running instead of paused
    #[arg(short, long)]
    run: bool,

    /// Run N generations without the terminal UI and print the final grid
    #[arg(short, long)]
    generations: Option<u64>,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    print_config: bool,

    /// List the available seed patterns and exit
    #[arg(long)]
    list_patterns: bool,

    /// Log file used while the terminal UI owns the screen
    #[arg(long, default_value = "life.log")]
    log_file: PathBuf,
}

impl Cli {
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => Config::default(),
        };
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(interval_ms) = self.interval_ms {
            config.interval_ms = interval_ms;
        }
        if let Some(pattern) = &self.pattern {
            config.pattern = Some(pattern.clone());
        }
        if self.run {
            config.start_running = true;
        }
        config.validate()?;
        Ok(config)
    }
}

fn init_logging(config: &Config, log_file: Option<&PathBuf>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log level")?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config()?;

    if cli.list_patterns {
        for pattern in PATTERNS {
            let (rows, cols) = pattern.extent();
            println!("{:<20} {} x {}", pattern.name, rows, cols);
        }
        return Ok(());
    }
    if cli.print_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.generations {
        Some(nb_gens) => {
            init_logging(&config, None)?;
            let mut driver = Driver::new(&config)?;
            info!(nb_gens, "running headless");
            driver.run_for(nb_gens);
            print!("{}", driver.grid());
            info!(
                generation = driver.generation(),
                population = driver.population(),
                "done"
            );
        }
        None => {
            init_logging(&config, Some(&cli.log_file))?;
            let driver = Driver::new(&config)?;
            let mut ui = TerminalUI::new(driver, config.cell_size)
                .map_err(|err| anyhow::anyhow!("failed to set up terminal: {}", err))?;
            ui.run()
                .map_err(|err| anyhow::anyhow!("terminal error: {}", err))?;
        }
    }
    Ok(())
}
