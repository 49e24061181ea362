//! Request and response types for text generation.

use serde::{Deserialize, Serialize};

/// A single generation request issued to a model backend.
///
/// Immutable once issued. `enable_lookup` asks the backend to augment its
/// answer with live external information retrieval; it is a per-call
/// capability flag, not a separate backend.
///
/// # Examples
///
/// ```
/// use fluxy_core::GenerateRequest;
///
/// let request = GenerateRequest::new("Write about ETFs").with_lookup();
/// assert!(request.enable_lookup);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    Default,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), default)]
pub struct GenerateRequest {
    /// Instruction text sent to the model
    pub prompt: String,
    /// Ask the backend to ground the answer with live search results
    pub enable_lookup: bool,
    /// Model identifier override; the driver default applies when `None`
    pub model: Option<String>,
    /// Sampling temperature (0.0 to 1.0)
    pub temperature: Option<f32>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
}

impl GenerateRequest {
    /// Create a request for the given prompt with lookup disabled.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }

    /// Enable live external information retrieval for this request.
    pub fn with_lookup(mut self) -> Self {
        self.enable_lookup = true;
        self
    }
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use fluxy_core::GenerateResponse;
///
/// let response = GenerateResponse {
///     text: "ETFs pool many holdings into one ticker.".to_string(),
/// };
/// assert!(!response.text.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The generated text from the model
    pub text: String,
}
