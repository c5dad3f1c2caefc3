// src/pipeline/export.rs

//! Static export pipeline.

use futures::stream::{self, StreamExt};

use crate::error::{AppError, Result};
use crate::export::{
    ExportSummary, SITEMAP_KEY, SUMMARY_KEY, SitemapEntry, render_sitemap, render_snapshot,
    snapshot_key,
};
use crate::models::{Article, Config};
use crate::services::ApiClient;
use crate::storage::SnapshotStorage;

/// Fetch every article and write its snapshot, the sitemap and a summary.
///
/// Articles without a usable tag are skipped; failed writes are counted
/// and do not stop the run.
pub async fn run_export(config: &Config, storage: &dyn SnapshotStorage) -> Result<ExportSummary> {
    let api = ApiClient::new(&config.api)?;
    log::info!("Fetching articles from {}", api.base_url());
    let articles: Vec<Article> = api.list().await?;
    log::info!("Exporting {} articles", articles.len());

    let mut summary = ExportSummary::new(articles.len());
    let mut exportable = Vec::with_capacity(articles.len());
    for article in &articles {
        match snapshot_key(article) {
            Ok(_) => exportable.push(article),
            Err(reason) => {
                summary.skipped += 1;
                log::warn!("Skipping article {} ({:?})", article.id, reason);
            }
        }
    }

    let site = &config.site;
    let description_length = config.export.description_length;
    let mut writes = stream::iter(exportable)
        .map(|article| async move {
            let snapshot = render_snapshot(article, site, description_length)?;
            storage.write(&snapshot.key, snapshot.html.as_bytes()).await?;
            Ok::<_, AppError>(snapshot)
        })
        .buffer_unordered(config.export.concurrency.max(1));

    let mut entries = Vec::new();
    while let Some(result) = writes.next().await {
        match result {
            Ok(snapshot) => {
                log::debug!("Wrote {}", snapshot.key);
                summary.written += 1;
                summary.pages.push(snapshot.key);
                entries.push(SitemapEntry {
                    loc: snapshot.url,
                    lastmod: snapshot.lastmod,
                });
            }
            Err(error) => {
                summary.failed += 1;
                log::warn!("Failed to export article: {}", error);
            }
        }
    }

    // Completion order is arbitrary.
    summary.pages.sort();
    entries.sort_by(|a, b| a.loc.cmp(&b.loc));

    storage
        .write(SITEMAP_KEY, render_sitemap(&entries)?.as_bytes())
        .await?;
    storage
        .write(SUMMARY_KEY, &serde_json::to_vec_pretty(&summary)?)
        .await?;

    log::info!(
        "Export complete: {} written, {} skipped, {} failed",
        summary.written,
        summary.skipped,
        summary.failed
    );
    Ok(summary)
}
