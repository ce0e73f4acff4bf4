use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use serde_json::json;

use unistore::config::Config;
use unistore::dependency::CounterService;
use unistore::features::content::{ContentAction, ContentFeature, ContentState};
use unistore::features::counter::{CounterAction, CounterBinding, CounterDelegate, CounterFeature};
use unistore::logging::init_tracing;
use unistore::Store;

#[derive(Parser)]
#[command(name = "unistore", about = "Drive the sample content/counter stores headlessly")]
struct Args {
    /// Config file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increments sent through the counter scope
    #[arg(long, default_value_t = 1)]
    increments: u32,

    /// Decrements sent through the counter scope
    #[arg(long, default_value_t = 0)]
    decrements: u32,

    /// Text written through the counter's text binding
    #[arg(long)]
    text: Option<String>,

    /// Keep the counter presented instead of dismissing it at the end
    #[arg(long)]
    keep_presented: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading config")?;
    init_tracing(&config.logging);

    let content = Store::with_config(ContentFeature::new(), ContentState::default(), &config.store);
    content.send(ContentAction::PresentCounter).await?;

    let service = Arc::new(CounterService::from_config(&config.service));
    let counter = content.scope(
        ContentFeature::counter_lens(),
        ContentAction::Counter,
        CounterFeature::new(service),
    );
    tracing::info!(parent = %content.id(), child = %counter.id(), "Counter presented");

    for _ in 0..args.increments {
        counter.send(CounterAction::Increment).await?;
    }
    for _ in 0..args.decrements {
        counter.send(CounterAction::Decrement).await?;
    }

    if let Some(text) = args.text {
        let binding = counter.binding(CounterFeature::text_lens(), CounterBinding::TextChanged);
        if let Some(dispatch) = binding.set(text) {
            dispatch.await?;
        }
    }

    if !args.keep_presented {
        counter
            .send(CounterAction::Delegate(CounterDelegate::Dismiss))
            .await?;
    }

    let summary = json!({
        "content": content.state(),
        "counter": counter.state(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
