use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    AppServices, AppServicesConfig, Clock, DEFAULT_TIMEOUT_SECS, FormSubmissionHandler,
    HandoffService, PendingScoringService, ScoringConfig, SkippedAnswerPolicy, StrategyKind,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt as log_fmt};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidStrategy { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidStrategy { raw } => {
                write!(f, "invalid --strategy value: {raw} (expected local or remote)")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn submission(&self) -> Arc<FormSubmissionHandler> {
        self.services.submission()
    }

    fn handoff(&self) -> Arc<HandoffService> {
        self.services.handoff()
    }

    fn pending(&self) -> Arc<PendingScoringService> {
        self.services.pending()
    }
}

#[derive(Debug)]
struct Args {
    db_url: String,
    strategy: StrategyKind,
    endpoint: Option<String>,
    reject_skipped: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [--db <sqlite_url>] [--strategy local|remote] [--endpoint <url>] [--reject-skipped]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite:screening.sqlite3");
    eprintln!("  --strategy local");
    eprintln!("  --endpoint http://127.0.0.1:3000/analyze (remote strategy only)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  SCREENING_DB_URL, SCREENING_STRATEGY, SCREENING_SCORING_URL,");
    eprintln!("  SCREENING_SCORING_TIMEOUT_SECS, RUST_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("SCREENING_DB_URL")
            .ok()
            .map_or_else(|| normalize_sqlite_url("screening.sqlite3".into()), normalize_sqlite_url);
        let mut strategy = match std::env::var("SCREENING_STRATEGY") {
            Ok(raw) => StrategyKind::from_value(&raw).ok_or(ArgsError::InvalidStrategy { raw })?,
            Err(_) => StrategyKind::default(),
        };
        let mut endpoint = None;
        let mut reject_skipped = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--strategy" => {
                    let raw = require_value(args, "--strategy")?;
                    strategy = StrategyKind::from_value(&raw)
                        .ok_or(ArgsError::InvalidStrategy { raw })?;
                }
                "--endpoint" => {
                    endpoint = Some(require_value(args, "--endpoint")?);
                }
                "--reject-skipped" => reject_skipped = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            strategy,
            endpoint,
            reject_skipped,
        })
    }

    /// Resolve the scoring endpoint: `--endpoint`, then the environment,
    /// then the local scorer address when the remote strategy needs one.
    fn scoring_config(&self) -> Result<Option<ScoringConfig>, Box<dyn std::error::Error>> {
        let config = match &self.endpoint {
            Some(endpoint) => Some(ScoringConfig::new(endpoint)?.with_timeout(scoring_timeout())),
            None => ScoringConfig::from_env()?,
        };
        match (config, self.strategy) {
            (Some(config), _) => Ok(Some(config)),
            (None, StrategyKind::Remote) => Ok(Some(
                ScoringConfig::local_default()?.with_timeout(scoring_timeout()),
            )),
            (None, StrategyKind::Local) => Ok(None),
        }
    }

    fn services_config(&self) -> Result<AppServicesConfig, Box<dyn std::error::Error>> {
        Ok(AppServicesConfig {
            strategy: self.strategy,
            scoring: self.scoring_config()?,
            skipped_answers: if self.reject_skipped {
                SkippedAnswerPolicy::Reject
            } else {
                SkippedAnswerPolicy::PassThrough
            },
        })
    }
}

fn scoring_timeout() -> Duration {
    let secs = std::env::var("SCREENING_SCORING_TIMEOUT_SECS")
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    log_fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let config = parsed.services_config()?;
    info!(
        db = %parsed.db_url,
        strategy = ?config.strategy,
        endpoint = config.scoring.as_ref().map(|c| c.endpoint.as_str()),
        "starting screening app"
    );

    // Open + migrate SQLite at startup; the services stay storage-agnostic.
    prepare_sqlite_file(&parsed.db_url)?;
    let services = AppServices::new_sqlite(&parsed.db_url, Clock::system(), config).await?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Developmental Screening")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
