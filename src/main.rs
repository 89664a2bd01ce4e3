use std::process::ExitCode;
use std::rc::Rc;

use clap::{Args, Parser, Subcommand};
use portfolio::config::{ConfigError, PageConfig};
use portfolio::display::happiness::{self, ChartError, CountryScore};
use portfolio::display::travel_map::{self, MapView, TravelMarker};
use portfolio::display::{composition, greeting};
use portfolio::net::{ApiError, HttpBackend};
use portfolio::page::{Page, PageSinks};
use portfolio::render::{ChartSink, MapSink, Notifier, PanelSink, RenderError, RenderedPanel, TextSink};
use portfolio::state::{CommentPanel, DeleteOutcome, DisplayPreference, LoadOutcome, SubmitOutcome};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("backend client error: {0}")]
    Api(#[from] ApiError),
    #[error("happiness chart failed: {0}")]
    Chart(#[from] ChartError),
    #[error("travel map failed: {0}")]
    Map(#[from] RenderError),
}

#[derive(Parser, Debug)]
#[command(name = "portfolio", about = "Render the portfolio page against a live backend")]
struct Cli {
    /// Backend origin; overrides `PORTFOLIO_BASE_URL`.
    #[arg(long)]
    base_url: Option<String>,

    /// Default page size; overrides `PORTFOLIO_MAX_COMMENTS`.
    #[arg(long)]
    max_comments: Option<u32>,

    /// Request timeout; overrides `PORTFOLIO_REQUEST_TIMEOUT_SECS`.
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run every page section once, as on page load.
    Page,
    Greet,
    /// Show the composition demo alerts.
    Compose,
    Map,
    Happiness,
    Comments(CommentsCommand),
}

#[derive(Args, Debug)]
struct CommentsCommand {
    #[command(subcommand)]
    command: CommentsSubcommand,
}

#[derive(Subcommand, Debug)]
enum CommentsSubcommand {
    List {
        #[arg(long)]
        max: Option<u32>,
    },
    /// Apply raw max-comments input, as typed into the page's number field.
    SetMax { raw: String },
    Delete,
    Add { text: String },
}

// =============================================================================
// TERMINAL SINKS
// =============================================================================

struct Terminal;

impl TextSink for Terminal {
    fn replace_text(&self, text: &str) {
        println!("{text}");
    }
}

impl PanelSink for Terminal {
    fn replace(&self, panel: &RenderedPanel) {
        if panel.is_empty() {
            println!("(no comments)");
        }
        for line in panel.lines() {
            println!("{line}");
        }
    }
}

impl Notifier for Terminal {
    fn notify(&self, message: &str) {
        eprintln!("[alert] {message}");
    }
}

impl MapSink for Terminal {
    fn draw(&self, view: &MapView, markers: &[TravelMarker]) -> Result<(), RenderError> {
        println!("map centered at ({}, {}) zoom {}", view.center.lat, view.center.lng, view.zoom);
        for marker in markers {
            println!(
                "  marker {:<14} ({:>9.4}, {:>9.4}) icon {}",
                marker.title, marker.position.lat, marker.position.lng, marker.icon
            );
            println!("    popup: {}", marker.popup_html());
        }
        Ok(())
    }
}

#[async_trait::async_trait(?Send)]
impl ChartSink for Terminal {
    fn draw(&self, rows: &[CountryScore]) -> Result<(), RenderError> {
        for row in rows {
            println!("{:<24} {:>5.2}", row.name(), row.score());
        }
        Ok(())
    }
}

fn terminal_sinks() -> PageSinks {
    let terminal = Rc::new(Terminal);
    PageSinks {
        greeting: terminal.clone(),
        comments: terminal.clone(),
        notifier: terminal.clone(),
        map: terminal.clone(),
        chart: terminal,
    }
}

// =============================================================================
// MAIN
// =============================================================================

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, CliError> {
    if let Err(error) = dotenvy::dotenv() {
        if !error.not_found() {
            eprintln!("ignoring unreadable .env: {error}");
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    let api = Rc::new(HttpBackend::new(&config)?);
    tracing::debug!(base_url = api.base_url(), "backend configured");
    let default_preference = DisplayPreference::new(config.default_max_comments);

    match cli.command {
        Command::Page => run_page(api, default_preference).await,
        Command::Greet => {
            greeting::add_random_greeting(&Terminal, &mut rand::rng());
            Ok(ExitCode::SUCCESS)
        }
        Command::Compose => {
            composition::run_demo(&Terminal);
            Ok(ExitCode::SUCCESS)
        }
        Command::Map => {
            travel_map::render(&Terminal)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Happiness => {
            happiness::render(api.as_ref(), &Terminal).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Comments(comments) => {
            let sinks = terminal_sinks();
            let panel = CommentPanel::new(api, sinks.comments, sinks.notifier, default_preference);
            Ok(run_comments(&panel, comments.command).await)
        }
    }
}

fn resolve_config(cli: &Cli) -> Result<PageConfig, CliError> {
    let mut config = PageConfig::from_env()?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(max_comments) = cli.max_comments {
        config.default_max_comments = max_comments;
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config.request_timeout_secs = timeout_secs;
    }
    Ok(config)
}

async fn run_page(api: Rc<HttpBackend>, default_preference: DisplayPreference) -> Result<ExitCode, CliError> {
    let page = Page::new(api, terminal_sinks(), default_preference);
    let report = page.init(&mut rand::rng()).await;
    let healthy = report.map.is_ok() && report.chart.is_ok() && report.comments != LoadOutcome::Failed;
    Ok(exit_code(healthy))
}

async fn run_comments(panel: &CommentPanel<HttpBackend>, command: CommentsSubcommand) -> ExitCode {
    let ok = match command {
        CommentsSubcommand::List { max } => {
            let outcome = match max {
                Some(max) => panel.load_comments_with(DisplayPreference::new(max)).await,
                None => panel.load_comments().await,
            };
            outcome != LoadOutcome::Failed
        }
        CommentsSubcommand::SetMax { raw } => {
            let outcome = panel.update_preference_from_input(&raw).await;
            tracing::info!(preference = %panel.preference(), "max comments set");
            outcome != LoadOutcome::Failed
        }
        CommentsSubcommand::Delete => {
            matches!(panel.delete_all_comments().await, DeleteOutcome::Deleted { .. })
        }
        CommentsSubcommand::Add { text } => {
            matches!(panel.submit_comment(&text).await, SubmitOutcome::Submitted { .. })
        }
    };
    exit_code(ok)
}

fn exit_code(ok: bool) -> ExitCode {
    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
