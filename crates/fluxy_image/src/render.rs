//! Remote rendering against URL-addressed image services.

use std::time::Duration;
use tokio_retry2::strategy::{FixedInterval, jitter};
use tokio_retry2::{Retry, RetryError};
use tracing::{debug, warn};

use fluxy_core::{ImageAsset, ImageConfig, RenderServiceConfig};
use fluxy_error::{ImageError, ImageErrorKind};

/// Fetches rendered images over HTTP, one request per attempt.
///
/// Each service variant addresses the render through a constructed URL: the
/// percent-encoded prompt in the path, dimensions, a seed for cache busting,
/// and the model variant as query parameters.
pub(crate) struct RenderFetcher {
    http: reqwest::Client,
    config: ImageConfig,
}

impl RenderFetcher {
    pub(crate) fn new(http: reqwest::Client, config: ImageConfig) -> Self {
        Self { http, config }
    }

    pub(crate) fn config(&self) -> &ImageConfig {
        &self.config
    }

    /// Try one service with its full retry budget.
    ///
    /// Transient rejections (overload statuses such as 530, timeouts,
    /// undersized payloads) are retried up to `attempts_per_service` with a
    /// short fixed backoff; permanent rejections advance immediately.
    pub(crate) async fn render_with_retry(
        &self,
        service: &RenderServiceConfig,
        prompt: &str,
    ) -> Result<ImageAsset, ImageError> {
        let retries = self.config.attempts_per_service.saturating_sub(1);
        let strategy = FixedInterval::from_millis(self.config.retry_backoff_ms)
            .map(jitter)
            .take(retries);

        Retry::spawn(strategy, || async {
            self.render_once(service, prompt).await.map_err(|e| {
                if e.kind.is_retryable() {
                    warn!(service = %service.name, error = %e, "Render attempt failed, will retry");
                    RetryError::Transient {
                        err: e,
                        retry_after: None,
                    }
                } else {
                    warn!(service = %service.name, error = %e, "Permanent render rejection");
                    RetryError::Permanent(e)
                }
            })
        })
        .await
    }

    async fn render_once(
        &self,
        service: &RenderServiceConfig,
        prompt: &str,
    ) -> Result<ImageAsset, ImageError> {
        let url = self.render_url(service, prompt);
        debug!(service = %service.name, url = %url, "Fetching render");

        let response = self
            .http
            .get(&url)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .send()
            .await
            .map_err(|e| ImageError::new(ImageErrorKind::Request(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageError::new(ImageErrorKind::BadStatus(status.as_u16())));
        }

        let mime = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(';').next().unwrap_or(v).trim().to_string())
            .unwrap_or_else(|| "image/png".to_string());

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ImageError::new(ImageErrorKind::Request(e.to_string())))?;

        // Error pages dressed up as 200s are short; real renders are not.
        if bytes.len() < self.config.min_bytes {
            return Err(ImageError::new(ImageErrorKind::UndersizedPayload {
                len: bytes.len(),
                min: self.config.min_bytes,
            }));
        }

        Ok(ImageAsset::new(bytes.to_vec(), mime))
    }

    fn render_url(&self, service: &RenderServiceConfig, prompt: &str) -> String {
        let encoded = urlencoding::encode(prompt);
        let seed: u32 = rand::random();
        let mut url = format!(
            "{}/prompt/{}?width={}&height={}&nologo=true&seed={}",
            service.endpoint.trim_end_matches('/'),
            encoded,
            self.config.width,
            self.config.height,
            seed,
        );
        if let Some(model) = &service.model {
            url.push_str("&model=");
            url.push_str(model);
        }
        url
    }
}
