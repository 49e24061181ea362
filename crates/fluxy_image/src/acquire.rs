//! Image acquisition orchestration.

use tracing::{info, instrument, warn};

use fluxy_core::{GenerateRequest, ImageAsset, ImageConfig};
use fluxy_error::{FluxyResult, HttpError, ImageError, ImageErrorKind};
use fluxy_interface::FluxyDriver;

use crate::fallback::placeholder_svg;
use crate::prompt;
use crate::render::RenderFetcher;

/// Derives an image prompt and renders it with service fallback.
///
/// Acquisition is total: when every remote service and attempt is exhausted,
/// a locally synthesized SVG stands in, so the publisher always receives an
/// asset.
pub struct ImageAcquirer<D: FluxyDriver> {
    driver: D,
    fetcher: RenderFetcher,
}

impl<D: FluxyDriver> ImageAcquirer<D> {
    /// Create an acquirer over the given driver and image configuration.
    pub fn new(driver: D, config: ImageConfig) -> FluxyResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| HttpError::new(e.to_string()))?;
        Ok(Self {
            driver,
            fetcher: RenderFetcher::new(http, config),
        })
    }

    /// Produce the image for a post.
    #[instrument(skip(self, summary))]
    pub async fn acquire(&self, topic: &str, summary: &str) -> ImageAsset {
        let prompt = self.image_prompt(topic, summary).await;

        match self.render_any(&prompt).await {
            Ok(asset) => asset,
            Err(e) => {
                warn!(error = %e, "All render services failed, using vector fallback");
                let config = self.fetcher.config();
                placeholder_svg(topic, config.width, config.height)
            }
        }
    }

    /// Synthesize an image-description string for the topic.
    ///
    /// Degrades to the deterministic stock-photo template on any failure.
    async fn image_prompt(&self, topic: &str, summary: &str) -> String {
        let req = GenerateRequest::new(prompt::synthesis(topic, summary));
        match self.driver.generate(&req).await {
            Ok(response) => {
                let line = response
                    .text
                    .lines()
                    .map(str::trim)
                    .find(|l| !l.is_empty())
                    .unwrap_or("")
                    .to_string();
                if line.is_empty() {
                    prompt::template(topic)
                } else {
                    line
                }
            }
            Err(e) => {
                warn!(error = %e, "Image prompt synthesis failed, using template");
                prompt::template(topic)
            }
        }
    }

    /// Walk the service list in priority order.
    async fn render_any(&self, prompt: &str) -> Result<ImageAsset, ImageError> {
        let services = self.fetcher.config().services.clone();
        for service in &services {
            info!(service = %service.name, "Trying render service");
            match self.fetcher.render_with_retry(service, prompt).await {
                Ok(asset) => {
                    info!(
                        service = %service.name,
                        bytes = asset.data.len(),
                        mime = %asset.mime,
                        "Render succeeded"
                    );
                    return Ok(asset);
                }
                Err(e) => {
                    warn!(service = %service.name, error = %e, "Service exhausted, advancing");
                }
            }
        }

        Err(ImageError::new(ImageErrorKind::Exhausted {
            services: services.len(),
        }))
    }
}
