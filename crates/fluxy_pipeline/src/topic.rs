//! Topic selection.

use rand::seq::SliceRandom;
use tracing::{info, warn};

use fluxy_core::{GenerateRequest, TopicConfig, TopicStrategy};
use fluxy_interface::FluxyDriver;

use crate::{clean_topic, prompts};

/// Produces a publish-worthy topic string.
///
/// Selection is always total: the static strategy cannot fail, and the
/// model-driven strategy falls back to the configured emergency topic on any
/// gateway failure. Deduplication against `existing_titles` is best-effort
/// prompt-level exclusion only; no uniqueness is enforced.
pub struct TopicSelector<D: FluxyDriver> {
    driver: D,
    config: TopicConfig,
}

impl<D: FluxyDriver> TopicSelector<D> {
    /// Create a selector over the given driver and configuration.
    pub fn new(driver: D, config: TopicConfig) -> Self {
        Self { driver, config }
    }

    /// Select a topic, optionally avoiding previously published titles.
    pub async fn select(&self, existing_titles: &[String]) -> String {
        match self.config.strategy {
            TopicStrategy::Static => self.pick_curated(),
            TopicStrategy::Model => self.ask_model(existing_titles).await,
        }
    }

    fn pick_curated(&self) -> String {
        let mut rng = rand::thread_rng();
        self.config
            .curated
            .choose(&mut rng)
            .cloned()
            .unwrap_or_else(|| self.config.fallback.clone())
    }

    async fn ask_model(&self, existing_titles: &[String]) -> String {
        let req = GenerateRequest::new(prompts::topic(existing_titles));

        match self.driver.generate(&req).await {
            Ok(response) => {
                let topic = clean_topic(&response.text);
                if topic.is_empty() {
                    warn!("Model returned an empty topic, using fallback");
                    self.config.fallback.clone()
                } else {
                    info!(topic = %topic, "Topic selected");
                    topic
                }
            }
            Err(e) => {
                warn!(error = %e, "Topic selection failed, using fallback");
                self.config.fallback.clone()
            }
        }
    }
}
