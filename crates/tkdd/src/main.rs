use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use color_eyre::eyre::{WrapErr, eyre};
use tkdd_core::{DataCatalog, Topic, build_topic};

mod logging;
mod render;

#[derive(Parser, Debug)]
#[command(name = "tkdd")]
#[command(about = "Statistical explorer for Indonesia's 2023 TKDD transfers")]
struct Args {
    /// Directory holding the two source tables
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Topic key to run (default: every topic; see --list-topics)
    #[arg(short, long)]
    topic: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// List topic keys with their titles and exit
    #[arg(long)]
    list_topics: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    logging::init(&args.log_level);

    if args.list_topics {
        for topic in Topic::ALL {
            println!("{:<26} {}", topic.key(), topic.title());
        }
        return Ok(());
    }

    let topics: Vec<Topic> = match args.topic.as_deref() {
        Some(key) => {
            let topic = Topic::from_key(key)
                .ok_or_else(|| eyre!("unknown topic {key:?} (try --list-topics)"))?;
            vec![topic]
        }
        None => Topic::ALL.to_vec(),
    };

    let catalog = DataCatalog::new(&args.data_dir);
    tracing::info!(
        data_dir = %args.data_dir.display(),
        topics = topics.len(),
        "starting analysis run"
    );

    for topic in topics {
        let started = Instant::now();
        let report = build_topic(&catalog, topic)
            .wrap_err_with(|| format!("building topic {}", topic.key()))?;
        tracing::info!(
            topic = topic.key(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "topic built"
        );

        match args.format {
            OutputFormat::Text => println!("{}", render::render_report(topic, &report)),
            OutputFormat::Json => {
                let envelope = serde_json::json!({
                    "topic": topic.key(),
                    "title": topic.title(),
                    "report": report,
                });
                println!("{}", serde_json::to_string_pretty(&envelope)?);
            }
        }
    }

    Ok(())
}
