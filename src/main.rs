//! Replays realtime frames into the board and prints it.
//!
//! Frames are read one per line from the file given as the first argument, or
//! from stdin. Frames that fail to apply are logged and skipped.

use anyhow::Context;
use order_board::config::BoardConfig;
use order_board::lifecycle::{setup_tracing, BoardSystem};
use order_board::policy;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let config = BoardConfig::from_env()?;
    let system = BoardSystem::with_capacity(config.channel_capacity);
    let ingest = system.ingest(config.default_collection);

    let input: Box<dyn AsyncBufRead + Unpin> = match std::env::args().nth(1) {
        Some(path) => {
            let file = tokio::fs::File::open(&path)
                .await
                .with_context(|| format!("opening {path}"))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(tokio::io::stdin())),
    };

    let span = tracing::info_span!("replay");
    let frames = async {
        let mut lines = input.lines();
        let mut frames = 0usize;
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            frames += 1;
            if let Err(e) = ingest.apply_message(&line).await {
                warn!(frame = frames, error = %e, "Frame skipped");
            }
        }
        anyhow::Ok(frames)
    }
    .instrument(span)
    .await?;
    info!(frames, "Feed replayed");
    drop(ingest);

    let board = system.order_item_client.board().await?;
    for item in &board {
        println!(
            "{:<10} {:<9} {:<24} {:>8}  order {}",
            policy::label_in(item.status, config.locale),
            policy::severity(item.status).as_str(),
            item.product_name().unwrap_or(item.product.key().as_str()),
            item.price.to_string(),
            item.order_id(),
        );
    }

    system.shutdown().await?;
    Ok(())
}
