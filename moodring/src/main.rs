use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moodring::config::{Config, LogFormat, ReportFormat};
use moodring::db::{Database, DatabaseBackend, LibSqlBackend};
use moodring::render;
use moodring::sentiment::{LexiconAnalyzer, Scorer};
use moodring::services::AnalysisService;

#[derive(Parser)]
#[command(name = "moodring")]
#[command(about = "Sentiment analysis over a local Messages history")]
struct Args {
    /// Path to chat.db, overrides CHAT_DB_PATH
    #[arg(long, global = true)]
    db: Option<String>,

    /// Output format: text or json, overrides REPORT_FORMAT
    #[arg(long, global = true)]
    format: Option<ReportFormat>,

    /// Load at most this many messages, overrides MESSAGE_LIMIT
    #[arg(long, global = true)]
    limit: Option<u64>,

    /// Tab-separated lexicon replacing the built-in one, overrides LEXICON_PATH
    #[arg(long, global = true)]
    lexicon: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the tables in the database with their schema
    Tables,
    /// Print the loaded messages
    Messages,
    /// Message counts per conversation partner
    Counts,
    /// Score a single piece of text
    Score { text: String },
    /// Score every message and print the aggregate report
    Analyze,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    let log_format: LogFormat = std::env::var("LOG_FORMAT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or_default();
    let (pretty, json) = match log_format {
        LogFormat::Pretty => (
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
            None,
        ),
        LogFormat::Json => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            ),
        ),
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodring=info".into()),
        )
        .with(pretty)
        .with(json)
        .init();

    let mut config = Config::from_env();
    if let Some(db) = args.db {
        config.database.url = db;
    }
    if let Some(format) = args.format {
        config.output.report_format = format;
    }
    if args.limit.is_some() {
        config.analysis.message_limit = args.limit;
    }
    if args.lexicon.is_some() {
        config.analysis.lexicon_path = args.lexicon;
    }

    let analyzer = LexiconAnalyzer::from_config(&config.analysis)?;
    let scorer = Scorer::new(Arc::new(analyzer));
    let format = config.output.report_format;

    // Scoring free text never touches the database
    if let Command::Score { text } = &args.command {
        let score = scorer.score(Some(text))?;
        return emit(format, &score, render::score);
    }

    let raw_db = Database::open(&config.database).await?;
    let db: Arc<dyn DatabaseBackend> = Arc::new(LibSqlBackend::new(raw_db));
    let service = AnalysisService::new(db, scorer, config.analysis.message_limit);

    match args.command {
        Command::Tables => {
            let tables = service.tables().await?;
            emit(format, &tables, |t| render::tables(t))
        }
        Command::Messages => {
            let messages = service.messages().await?;
            emit(format, &messages, |m| render::messages(m))
        }
        Command::Counts => {
            let counts = service.partner_counts().await?;
            emit(format, &counts, |c| render::partner_counts(c))
        }
        Command::Analyze => {
            let report = service.analyze().await?;
            emit(format, &report, render::report)
        }
        Command::Score { .. } => Ok(()),
    }
}

fn emit<T, F>(format: ReportFormat, value: &T, text: F) -> anyhow::Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        ReportFormat::Text => print!("{}", text(value)),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}
