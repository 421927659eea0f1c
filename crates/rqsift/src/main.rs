//! rqsift binary
//!
//! Retrieves log events for a time window and prints only the lines that
//! belong to requests whose content matched a pattern somewhere.

mod output;
mod settings;
mod timebound;

use clap::Parser;
use output::LinePrefix;
use rqsift_core::{correlate, ContentPattern, QueryParameters, Retriever};
use rqsift_cwlogs::CwlSource;
use settings::SettingsLoader;
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "rqsift")]
#[command(version)]
#[command(about = "Sift logs by request: keep every line of the requests a pattern matches", long_about = None)]
struct Cli {
    /// Log group to query
    #[arg(short, long)]
    group: String,

    /// Content pattern; a match anywhere in a message keeps its whole request
    #[arg(short, long)]
    filter: String,

    /// Stream names to narrow the query to
    #[arg(long, num_args = 1..)]
    streams: Option<Vec<String>>,

    /// Stream name prefix; may be combined with --streams
    #[arg(long)]
    stream_prefix: Option<String>,

    /// Window start as milliseconds since the epoch (wins over --start)
    #[arg(long)]
    start_ts: Option<i64>,

    /// Window start as an ISO-8601 date or datetime, read as UTC without an offset
    #[arg(long)]
    start: Option<String>,

    /// Window end as milliseconds since the epoch (wins over --stop)
    #[arg(long)]
    stop_ts: Option<i64>,

    /// Window end as an ISO-8601 date or datetime, read as UTC without an offset
    #[arg(long)]
    stop: Option<String>,

    /// Cap on the number of events the source returns
    #[arg(long)]
    limit: Option<u32>,

    /// Prefix each line with the raw millisecond timestamp
    #[arg(long, conflicts_with = "prefix_iso")]
    prefix_timestamp: bool,

    /// Prefix each line with an ISO-8601 UTC timestamp
    #[arg(long)]
    prefix_iso: bool,

    /// Endpoint override for the log source
    #[arg(long, env = "RQSIFT_ENDPOINT")]
    endpoint: Option<String>,

    /// Path to settings file
    #[arg(short, long, env = "RQSIFT_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    run(cli).await
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // A bad pattern must cost nothing: compile it before touching the source.
    let pattern = ContentPattern::new(&cli.filter)?;
    let params = build_query(&cli)?;
    let prefix = line_prefix(&cli);

    let loader = SettingsLoader::new().with_cli_path(cli.config.clone());
    let mut settings = loader.load()?;
    if let Some(endpoint) = &cli.endpoint {
        settings.source.endpoint = endpoint.clone();
    }

    let source = CwlSource::new(&settings.source)?;
    let retriever = Retriever::new(source);

    info!("Querying log group {}", params.group);
    let retrieval = retriever.retrieve(&params).await?;
    debug!(
        "Correlating {} events against pattern {}",
        retrieval.events.len(),
        pattern.as_str()
    );

    let kept = correlate(retrieval.events, &pattern);
    info!("Matched {} events", kept.len());

    for event in &kept {
        println!("{}", output::render(event, prefix));
    }

    Ok(())
}

fn build_query(cli: &Cli) -> anyhow::Result<QueryParameters> {
    let mut params = QueryParameters::new(cli.group.clone());

    if let Some(streams) = &cli.streams {
        params = params.with_streams(streams.clone());
    }
    if let Some(prefix) = &cli.stream_prefix {
        params = params.with_stream_prefix(prefix.clone());
    }

    // Raw millisecond flags win over their ISO twins.
    if let Some(ms) = cli.start_ts {
        params = params.with_start_time(ms);
    } else if let Some(text) = &cli.start {
        params = params.with_start_time(timebound::parse_millis(text)?);
    }

    if let Some(ms) = cli.stop_ts {
        params = params.with_end_time(ms);
    } else if let Some(text) = &cli.stop {
        params = params.with_end_time(timebound::parse_millis(text)?);
    }

    if let Some(limit) = cli.limit {
        params = params.with_limit(limit);
    }

    Ok(params)
}

fn line_prefix(cli: &Cli) -> LinePrefix {
    if cli.prefix_timestamp {
        LinePrefix::Millis
    } else if cli.prefix_iso {
        LinePrefix::Iso
    } else {
        LinePrefix::None
    }
}
