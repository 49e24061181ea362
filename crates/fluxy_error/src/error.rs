//! Top-level error wrapper types.

use crate::{
    ConfigError, GatewayError, GeminiError, HttpError, ImageError, JsonError, PipelineError,
    PublishError,
};

/// This is the foundation error enum for the fluxy workspace.
///
/// # Examples
///
/// ```
/// use fluxy_error::{FluxyError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: FluxyError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FluxyErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Gemini backend error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Model gateway error
    #[from(GatewayError)]
    Gateway(GatewayError),
    /// Content pipeline error
    #[from(PipelineError)]
    Pipeline(PipelineError),
    /// Image rendering error
    #[from(ImageError)]
    Image(ImageError),
    /// Publishing error
    #[from(PublishError)]
    Publish(PublishError),
}

/// Fluxy error with kind discrimination.
///
/// # Examples
///
/// ```
/// use fluxy_error::{FluxyResult, ConfigError};
///
/// fn might_fail() -> FluxyResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Fluxy Error: {}", _0)]
pub struct FluxyError(Box<FluxyErrorKind>);

impl FluxyError {
    /// Create a new error from a kind.
    pub fn new(kind: FluxyErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FluxyErrorKind {
        &self.0
    }

    /// True when the gateway reported terminal exhaustion of its backends.
    pub fn is_gateway_exhausted(&self) -> bool {
        matches!(self.kind(), FluxyErrorKind::Gateway(e) if e.is_exhausted())
    }
}

// Generic From implementation for any type that converts to FluxyErrorKind
impl<T> From<T> for FluxyError
where
    T: Into<FluxyErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for fluxy operations.
///
/// # Examples
///
/// ```
/// use fluxy_error::{FluxyResult, HttpError};
///
/// fn fetch_data() -> FluxyResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type FluxyResult<T> = std::result::Result<T, FluxyError>;
