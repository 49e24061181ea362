//! Priority-ordered fallback over model backends.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{info, warn};

use fluxy_core::{GatewayConfig, GenerateRequest, GenerateResponse};
use fluxy_error::{FluxyResult, GatewayError, GatewayErrorKind};
use fluxy_interface::FluxyDriver;

use crate::GeminiClient;

/// Issues a generation request to an ordered list of candidate backends.
///
/// The first success short-circuits the rest — first success wins, not best
/// result. On any failure the gateway logs, pauses for the configured
/// backoff, and advances. The policy is breadth over depth: no backend is
/// attempted twice within a pass. When every candidate fails the gateway
/// reports terminal exhaustion; callers must treat that as fatal for the run.
///
/// The gateway is itself a [`FluxyDriver`], so every consumer of a single
/// backend can consume a fallback chain unchanged.
#[derive(Debug)]
pub struct ModelGateway<D: FluxyDriver> {
    backends: Vec<D>,
    backoff: Duration,
}

impl<D: FluxyDriver> ModelGateway<D> {
    /// Compose backends in priority order with a fixed inter-candidate backoff.
    pub fn new(backends: Vec<D>, backoff: Duration) -> Self {
        Self { backends, backoff }
    }

    /// Number of configured backends.
    pub fn backend_count(&self) -> usize {
        self.backends.len()
    }

    /// Generate text for a prompt, trying each backend in order.
    ///
    /// `enable_lookup` asks the winning backend to ground its answer with
    /// live search results.
    pub async fn generate_text(&self, prompt: &str, enable_lookup: bool) -> FluxyResult<String> {
        let mut req = GenerateRequest::new(prompt);
        req.enable_lookup = enable_lookup;
        let response = self.dispatch(&req).await?;
        Ok(response.text)
    }

    async fn dispatch(&self, req: &GenerateRequest) -> FluxyResult<GenerateResponse> {
        let total = self.backends.len();
        for (index, backend) in self.backends.iter().enumerate() {
            info!(
                model = backend.model_name(),
                provider = backend.provider_name(),
                "Trying model backend"
            );
            match backend.generate(req).await {
                Ok(response) => {
                    info!(model = backend.model_name(), "Backend succeeded");
                    return Ok(response);
                }
                Err(e) => {
                    warn!(
                        model = backend.model_name(),
                        error = %e,
                        "Backend failed, advancing to next candidate"
                    );
                    if index + 1 < total && !self.backoff.is_zero() {
                        tokio::time::sleep(self.backoff).await;
                    }
                }
            }
        }

        Err(GatewayError::new(GatewayErrorKind::Exhausted { attempted: total }).into())
    }
}

impl ModelGateway<GeminiClient> {
    /// Build the gateway from configuration: one Gemini client per model
    /// identifier, in the configured priority order.
    pub fn from_config(config: &GatewayConfig) -> FluxyResult<Self> {
        let backends = config
            .models
            .iter()
            .map(|model| GeminiClient::new(config.api_key.as_str(), model.as_str()))
            .collect::<FluxyResult<Vec<_>>>()?;
        Ok(Self::new(backends, Duration::from_secs(config.backoff_secs)))
    }
}

#[async_trait]
impl<D: FluxyDriver> FluxyDriver for ModelGateway<D> {
    async fn generate(&self, req: &GenerateRequest) -> FluxyResult<GenerateResponse> {
        self.dispatch(req).await
    }

    fn provider_name(&self) -> &'static str {
        "gateway"
    }

    fn model_name(&self) -> &str {
        self.backends
            .first()
            .map(|b| b.model_name())
            .unwrap_or("none")
    }
}
