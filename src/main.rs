use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use crossterm::event::KeyEventKind;
use tracing::{info, warn};

use sysmonitor::action::Action;
use sysmonitor::app::App;
use sysmonitor::client::{self, HttpFetcher, Scheduler};
use sysmonitor::config::{ClientConfig, Config, load_config, load_config_from_path};
use sysmonitor::event::{Event, EventHandler};
use sysmonitor::logging::{self, Sink};
use sysmonitor::render::Page;
use sysmonitor::server;
use sysmonitor::ui;
use sysmonitor::ui::theme::Theme;

#[derive(Parser)]
#[command(
    name = "sysmonitor",
    about = "Polls a system-metrics endpoint and renders it, or serves one"
)]
struct Cli {
    /// Path to config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Poll the endpoint and show it in the terminal (default)
    Watch {
        /// Snapshot endpoint URL
        #[arg(long)]
        endpoint: Option<String>,

        /// Polling interval in milliseconds
        #[arg(long)]
        interval_ms: Option<u64>,
    },
    /// Fetch once and print the page
    Print {
        /// Snapshot endpoint URL
        #[arg(long)]
        endpoint: Option<String>,
    },
    /// Serve this host's snapshot over HTTP
    Serve {
        /// Address to listen on
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Watch {
        endpoint: None,
        interval_ms: None,
    });
    let (mut config, config_warning) = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };
    apply_overrides(&mut config, &command);
    config.validate()?;

    match command {
        Command::Watch { .. } => {
            let log_file = config
                .logging
                .file
                .clone()
                .or_else(logging::default_log_file)
                .ok_or_else(|| eyre!("no log file location; set logging.file"))?;
            logging::init(&config.logging, Sink::File(log_file))?;
            report_config_warning(config_warning);
            watch(config).await
        }
        Command::Print { .. } => {
            logging::init(&config.logging, Sink::Stderr)?;
            report_config_warning(config_warning);
            print_once(&config).await
        }
        Command::Serve { .. } => {
            logging::init(&config.logging, Sink::Stderr)?;
            report_config_warning(config_warning);
            let addr = config.server.bind_addr()?;
            server::serve(addr, shutdown_signal()).await
        }
    }
}

fn report_config_warning(warning: Option<String>) {
    if let Some(warning) = warning {
        warn!("{warning}");
    }
}

fn apply_overrides(config: &mut Config, command: &Command) {
    match command {
        Command::Watch {
            endpoint,
            interval_ms,
        } => {
            if let Some(endpoint) = endpoint {
                config.client.endpoint = endpoint.clone();
            }
            if let Some(ms) = interval_ms {
                config.client.poll_interval_ms = *ms;
            }
        }
        Command::Print { endpoint } => {
            if let Some(endpoint) = endpoint {
                config.client.endpoint = endpoint.clone();
            }
        }
        Command::Serve { bind } => {
            if let Some(bind) = bind {
                config.server.bind = bind.clone();
            }
        }
    }
}

fn make_fetcher(config: &ClientConfig) -> Result<HttpFetcher> {
    HttpFetcher::new(&config.endpoint, config.request_timeout())
}

async fn print_once(config: &Config) -> Result<()> {
    let fetcher = make_fetcher(&config.client)?;
    let mut page = Page::new();
    client::run_cycle(&fetcher, &mut page)
        .await
        .wrap_err_with(|| format!("failed to load {}", fetcher.endpoint()))?;
    print!("{page}");
    Ok(())
}

async fn watch(config: Config) -> Result<()> {
    let fetcher = make_fetcher(&config.client)?;
    let interval = config.client.poll_interval();
    let app = App::new(
        fetcher.endpoint().as_str(),
        interval,
        Theme::from_config(&config.ui.theme),
    );
    info!(endpoint = %fetcher.endpoint(), "starting watch");

    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let result = run(&mut terminal, app, fetcher, interval).await;

    ratatui::restore();

    result
}

async fn run(
    terminal: &mut ratatui::DefaultTerminal,
    mut app: App,
    fetcher: HttpFetcher,
    interval: Duration,
) -> Result<()> {
    let mut events = EventHandler::new();
    let mut scheduler = Scheduler::new(interval);
    let tx = events.sender();
    let started = scheduler.start(fetcher, move |outcome| {
        let _ = tx.send(Event::Cycle(outcome));
    });
    debug_assert!(started, "a new scheduler is idle");

    terminal.draw(|frame| ui::draw(frame, &app))?;

    while app.running {
        let Some(event) = events.next().await else {
            break;
        };
        match event {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match app.map_key(key) {
                    Action::Refresh => scheduler.poll_now(),
                    action => app.dispatch(action),
                }
            }
            Event::Resize => {}
            Event::Cycle(outcome) => app.on_cycle(outcome),
            Event::InputClosed => {
                warn!("terminal input closed, quitting");
                app.dispatch(Action::Quit);
            }
        }
        terminal.draw(|frame| ui::draw(frame, &app))?;
    }

    scheduler.stop();
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for Ctrl+C: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
