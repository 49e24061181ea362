//! One publish cycle, end to end.

use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

use fluxy_core::{FluxyConfig, PublishedPost};
use fluxy_error::FluxyResult;
use fluxy_image::ImageAcquirer;
use fluxy_interface::{ContentStore, FluxyDriver};
use fluxy_models::ModelGateway;
use fluxy_pipeline::{ContentPipeline, TopicSelector};
use fluxy_wordpress::{Publisher, WordPressClient};

/// How much of the body rides along as the image-prompt summary.
const SUMMARY_CHARS: usize = 160;

/// Run one publish cycle with production backends.
///
/// Builds the Gemini gateway and the WordPress client from configuration,
/// then delegates to [`execute`].
pub async fn run_once(config: &FluxyConfig) -> FluxyResult<PublishedPost> {
    let gateway = ModelGateway::from_config(&config.gateway)?;
    let store = WordPressClient::new(&config.site)?;
    execute(gateway, store, config).await
}

/// Walk the full state machine over the given driver and store.
///
/// Each arrow is a hard sequence point; stage outputs feed the next stage.
/// Topic selection, research, outline, revision, and image acquisition
/// degrade on failure; the draft and the final post submission abort the run.
#[instrument(skip_all)]
pub async fn execute<D, S>(driver: D, store: S, config: &FluxyConfig) -> FluxyResult<PublishedPost>
where
    D: FluxyDriver + 'static,
    S: ContentStore,
{
    let driver = Arc::new(driver);
    let pause = Duration::from_secs(config.pacing.stage_pause_secs);

    info!("Starting publish run");

    // History is fetched fresh each run; losing it only weakens dedup.
    let history: Vec<String> = match store.recent_posts(config.site.history_count).await {
        Ok(posts) => posts.into_iter().map(|p| p.title).collect(),
        Err(e) => {
            warn!(error = %e, "History fetch failed, continuing without dedup");
            Vec::new()
        }
    };

    let selector = TopicSelector::new(driver.clone(), config.topics.clone());
    let topic = selector.select(&history).await;
    info!(topic = %topic, "Topic selected");
    pace(pause).await;

    let pipeline = ContentPipeline::new(driver.clone()).with_pause(pause);
    let article = pipeline.compose(&topic).await?;
    info!(title = %article.title, "Article composed");
    pace(pause).await;

    let acquirer = ImageAcquirer::new(driver.clone(), config.image.clone())?;
    let summary: String = article.body.chars().take(SUMMARY_CHARS).collect();
    let image = acquirer.acquire(&topic, &summary).await;
    info!(mime = %image.mime, bytes = image.data.len(), "Image acquired");
    pace(pause).await;

    let publisher = Publisher::new(store);
    let post = publisher.publish(&article, Some(&image)).await?;

    info!(post_id = post.id, link = %post.link, "Publish run complete");
    Ok(post)
}

async fn pace(pause: Duration) {
    if !pause.is_zero() {
        tokio::time::sleep(pause).await;
    }
}
