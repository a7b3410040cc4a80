use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use soup_recommender::{Config, ContentModel, Dataset, DemographicRanker, RecommendError};

/// Content-based and demographic movie recommendations
#[derive(Parser, Debug)]
#[command(name = "soup-rec", version, about, long_about = None)]
struct Cli {
    /// Dataset file (overrides config `dataset.path`)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Config file (default: ./soup-recommender.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level, RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Items most similar to a title. Without a title, reads one title per stdin line.
    Similar {
        title: Option<String>,
        /// Number of neighbors (overrides config `recommend.neighbors`)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Global top list by weighted rating
    Popular {
        /// Number of items (overrides config `ranking.top_n`)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Vote-count percentile for the popularity threshold
        #[arg(short, long)]
        percentile: Option<f64>,
    },
    /// Dataset and model statistics
    Stats,
}

#[derive(Serialize)]
struct Stats {
    items: usize,
    corpus: usize,
    vocabulary: usize,
    similarity_bytes: usize,
    duplicate_titles: Vec<(String, usize)>,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn load_dataset(cli: &Cli, config: &Config) -> Result<Dataset> {
    let path = cli.data.clone().unwrap_or_else(|| config.dataset.path.clone());
    Dataset::from_path(&path).with_context(|| format!("failed to load dataset {}", path.display()))
}

fn build_model(dataset: &Dataset) -> Result<ContentModel> {
    let start = Instant::now();
    let model = ContentModel::build(dataset).context("failed to build content model")?;
    info!(elapsed_ms = start.elapsed().as_secs_f64() * 1000.0, "content model ready");
    Ok(model)
}

fn run_similar(model: &ContentModel, title: Option<String>, limit: usize, pretty: bool) -> Result<()> {
    if let Some(title) = title {
        let records = model.recommend_n(&title, limit)?;
        return print_json(&records, pretty);
    }

    // one title per line until EOF
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let title = line.trim();
        if title.is_empty() {
            continue;
        }
        match model.recommend_n(title, limit) {
            Ok(records) => print_json(&records, pretty)?,
            Err(RecommendError::TitleNotFound(t)) => warn!(title = %t, "title not found"),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    let dataset = load_dataset(&cli, &config)?;

    match &cli.command {
        Command::Similar { title, limit } => {
            let model = build_model(&dataset)?;
            let limit = limit.unwrap_or(config.recommend.neighbors);
            run_similar(&model, title.clone(), limit, cli.pretty)
        }
        Command::Popular { limit, percentile } => {
            let ranker = DemographicRanker::new(
                limit.unwrap_or(config.ranking.top_n),
                percentile.unwrap_or(config.ranking.percentile),
            )?;
            let records = ranker.rank(dataset.items())?;
            print_json(&records, cli.pretty)
        }
        Command::Stats => {
            let model = build_model(&dataset)?;
            let stats = Stats {
                items: dataset.len(),
                corpus: model.corpus().len(),
                vocabulary: model.vocabulary().len(),
                similarity_bytes: soup_recommender::SimilarityMatrix::byte_size(model.corpus().len()),
                duplicate_titles: model
                    .titles()
                    .duplicates()
                    .map(|(t, row)| (t.to_string(), row))
                    .collect(),
            };
            print_json(&stats, cli.pretty)
        }
    }
}
