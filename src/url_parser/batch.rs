use anyhow::{Context, Result};
use tracing::debug;

use super::model::ParsedUrl;
use super::parser::decompose;

/// Decomposes many URLs, running up to `concurrency` of them at a time
///
/// Decomposition is CPU-bound, so each URL runs on a blocking task.
/// Results come back in input order.
pub async fn decompose_batch(urls: &[String], concurrency: usize) -> Result<Vec<ParsedUrl>> {
    // A zero limit still has to make progress
    let chunk_size = concurrency.max(1);
    let mut results = Vec::with_capacity(urls.len());

    for (index, chunk) in urls.chunks(chunk_size).enumerate() {
        debug!("Decomposing chunk {} ({} URLs)", index + 1, chunk.len());
        let tasks = chunk.iter().cloned().map(|url| {
            tokio::task::spawn_blocking(move || decompose(&url))
        });
        // Wait for the whole chunk before starting the next one
        for joined in futures::future::join_all(tasks).await {
            results.push(joined.context("Decomposition task failed")?);
        }
    }

    Ok(results)
}
