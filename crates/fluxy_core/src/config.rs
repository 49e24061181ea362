//! Runtime configuration.
//!
//! All tunables live in one explicit [`FluxyConfig`] object assembled at
//! startup and passed by reference into each component. Components never read
//! ambient process state themselves; credentials are pulled from the
//! environment exactly once, in [`FluxyConfig::from_env`].

use fluxy_error::{ConfigError, FluxyResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete bot configuration.
///
/// Tunables load from a TOML file with sensible defaults; credentials and the
/// API key overlay from the environment. Missing values stay empty and fail
/// downstream at the call that needs them, not at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FluxyConfig {
    /// Content store endpoint and credentials
    pub site: SiteConfig,
    /// Model gateway backend list and backoff
    pub gateway: GatewayConfig,
    /// Topic selection strategy and curated list
    pub topics: TopicConfig,
    /// Image acquisition services and thresholds
    pub image: ImageConfig,
    /// Inter-stage pacing delays
    pub pacing: PacingConfig,
}

impl FluxyConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> FluxyResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)).into())
    }

    /// Build a default configuration with credentials from the environment.
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    /// Overlay credentials and endpoint from the environment.
    ///
    /// Reads `WP_URL`, `WP_USER`, `WP_APP_PASS`, and `GEMINI_API_KEY`.
    /// A `WP_URL` pointing at the posts collection (the common setup for
    /// this bot) is normalized back to the REST base.
    pub fn with_env(mut self) -> Self {
        if let Ok(url) = std::env::var("WP_URL") {
            let url = url.trim_end_matches('/');
            self.site.endpoint = url.trim_end_matches("/posts").to_string();
        }
        if let Ok(user) = std::env::var("WP_USER") {
            self.site.user = user;
        }
        if let Ok(pass) = std::env::var("WP_APP_PASS") {
            self.site.app_password = pass;
        }
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            self.gateway.api_key = key;
        }
        self
    }
}

/// Content store endpoint and credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// WordPress REST base URL, e.g. `https://example.com/wp-json/wp/v2`
    pub endpoint: String,
    /// Account user name
    pub user: String,
    /// Application password for the Basic credential header
    pub app_password: String,
    /// Category identifier assigned to every published post
    pub category: u32,
    /// How many recent posts to fetch for topic deduplication
    pub history_count: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            user: String::new(),
            app_password: String::new(),
            category: 1,
            history_count: 10,
        }
    }
}

/// Model gateway configuration.
///
/// The model list is a priority order: latest-capability first, stable
/// fallbacks after. Order is deterministic per configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Gemini API key
    pub api_key: String,
    /// Candidate model identifiers, tried in order until one succeeds
    pub models: Vec<String>,
    /// Pause between candidates after a failure, in seconds
    pub backoff_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            models: vec![
                "gemini-2.5-flash".to_string(),
                "gemini-2.0-flash-lite".to_string(),
                "gemini-flash-latest".to_string(),
            ],
            backoff_secs: 5,
        }
    }
}

/// Topic selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicStrategy {
    /// Uniform random pick from the curated list; no network call
    Static,
    /// Ask the model gateway for a fresh topic, excluding recent titles
    Model,
}

/// Topic selection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicConfig {
    /// Which strategy runs this invocation
    pub strategy: TopicStrategy,
    /// Curated topics for the static strategy
    pub curated: Vec<String>,
    /// Emergency topic used when the model-driven strategy fails
    pub fallback: String,
}

impl Default for TopicConfig {
    fn default() -> Self {
        Self {
            strategy: TopicStrategy::Model,
            curated: vec![
                "아이폰 배터리 성능 100% 유지하는 법".to_string(),
                "넷플릭스 숨은 꿀팁 5가지".to_string(),
                "최신 AI 도구로 업무 자동화하는 법".to_string(),
                "스마트폰 저장공간 확보하는 방법".to_string(),
            ],
            fallback: "스마트폰 속도가 느려질 때 해결하는 3가지 방법".to_string(),
        }
    }
}

/// A single image-render service variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderServiceConfig {
    /// Human-readable service name for narration
    pub name: String,
    /// Service base URL
    pub endpoint: String,
    /// Backend model variant passed in the render URL
    pub model: Option<String>,
}

/// Image acquisition configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Render services tried in priority order
    pub services: Vec<RenderServiceConfig>,
    /// Target image width in pixels
    pub width: u32,
    /// Target image height in pixels
    pub height: u32,
    /// Fetch attempts per service before advancing to the next
    pub attempts_per_service: usize,
    /// Pause between attempts on the same service, in milliseconds
    pub retry_backoff_ms: u64,
    /// Minimum payload size accepted as a real image, in bytes
    pub min_bytes: usize,
    /// Per-fetch timeout, in seconds
    pub timeout_secs: u64,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            services: vec![
                RenderServiceConfig {
                    name: "pollinations-flux".to_string(),
                    endpoint: "https://image.pollinations.ai".to_string(),
                    model: Some("flux".to_string()),
                },
                RenderServiceConfig {
                    name: "pollinations-turbo".to_string(),
                    endpoint: "https://image.pollinations.ai".to_string(),
                    model: Some("turbo".to_string()),
                },
            ],
            width: 1024,
            height: 600,
            attempts_per_service: 3,
            retry_backoff_ms: 500,
            min_bytes: 1024,
            timeout_secs: 45,
        }
    }
}

/// Inter-stage pacing delays.
///
/// These are scheduling delays to respect upstream rate limits, not
/// synchronization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Pause between pipeline stages, in seconds
    pub stage_pause_secs: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            stage_pause_secs: 3,
        }
    }
}
