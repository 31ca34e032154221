use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use sysglance::app::App;
use sysglance::config::{self, Config, load_config, load_config_from_path};
use sysglance::event::{Event, EventHandler};
use sysglance::logging::init_file_logging;
use sysglance::report::Report;
use sysglance::system::collector::Collector;
use sysglance::ui;

#[derive(Parser)]
#[command(
    name = "sysglance",
    about = "Terminal resource monitor: CPU, memory, uptime and top processes"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Refresh rate in milliseconds
    #[arg(long)]
    refresh_rate: Option<u64>,

    /// Number of processes to list, heaviest first
    #[arg(long)]
    top: Option<usize>,

    /// Sample twice, one refresh interval apart, print the result as JSON and exit.
    #[arg(long, default_value_t = false)]
    once: bool,

    /// Write JSON log lines to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = load_config_for_cli(&cli)?;

    if let Some(path) = &cli.log_file {
        init_file_logging(path, &config.general.log_level)?;
    }
    if config.general.refresh_rate_ms < config::MIN_REFRESH_RATE_MS {
        tracing::warn!(
            requested = config.general.refresh_rate_ms,
            "refresh rate raised to the minimum"
        );
    }
    tracing::info!(
        refresh_ms = config.refresh_interval().as_millis() as u64,
        top_processes = config.general.top_processes,
        "starting"
    );

    if cli.once {
        return run_once(&config).await;
    }

    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let result = run(&mut terminal, &config).await;

    ratatui::restore();

    result
}

async fn run(terminal: &mut ratatui::DefaultTerminal, config: &Config) -> Result<()> {
    let mut app = App::new(config);
    let mut events = EventHandler::new(config.refresh_interval());

    terminal.draw(|frame| ui::draw(frame, &app))?;

    while app.running {
        let Some(event) = events.next().await else {
            break;
        };
        let should_draw = match event {
            Event::Key(key) => {
                if key.kind == crossterm::event::KeyEventKind::Press {
                    let action = app.map_key(key);
                    app.dispatch(action);
                    true
                } else {
                    false
                }
            }
            Event::Tick => {
                app.refresh_data();
                true
            }
            Event::Resize => true,
        };
        if should_draw && app.running {
            terminal.draw(|frame| ui::draw(frame, &app))?;
        }
    }

    tracing::info!("shutting down");
    Ok(())
}

/// The first sample only primes the CPU baseline; the second one, taken a
/// refresh interval later, is the one reported.
async fn run_once(config: &Config) -> Result<()> {
    let mut collector = Collector::new();
    collector.refresh();
    tokio::time::sleep(config.refresh_interval()).await;
    let snapshot = collector.refresh();

    let report = Report::from_snapshot(&snapshot, config.general.top_processes);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn load_config_for_cli(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) if !path.exists() => {
            return Err(eyre!("config file {} does not exist", path.display()));
        }
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(rate) = cli.refresh_rate {
        config.general.refresh_rate_ms = rate;
    }
    if let Some(top) = cli.top {
        config.general.top_processes = top;
    }
    Ok(config)
}
