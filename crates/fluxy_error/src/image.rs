//! Image rendering error types.

/// Specific error conditions for remote image rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ImageErrorKind {
    /// Render service returned a non-success status code
    #[display("Render service returned HTTP {}", _0)]
    BadStatus(u16),
    /// Response body is too small to be a real image (likely an error page)
    #[display("Payload of {} bytes is below the {} byte minimum", len, min)]
    UndersizedPayload {
        /// Actual payload length in bytes
        len: usize,
        /// Configured minimum byte threshold
        min: usize,
    },
    /// Request construction or transport failed
    #[display("Render request failed: {}", _0)]
    Request(String),
    /// Every configured render service failed after its retry budget
    #[display("All {} configured render services failed", services)]
    Exhausted {
        /// Number of services attempted before giving up
        services: usize,
    },
}

impl ImageErrorKind {
    /// Check if this rejection is worth retrying on the same service.
    ///
    /// Upstream overload (530 and friends), rate limiting, timeouts,
    /// transport failures, and suspiciously small payloads are transient.
    /// Other status codes advance to the next service immediately.
    pub fn is_retryable(&self) -> bool {
        match self {
            ImageErrorKind::BadStatus(status) => {
                matches!(*status, 408 | 429 | 500 | 502 | 503 | 504 | 530)
            }
            ImageErrorKind::UndersizedPayload { .. } => true,
            ImageErrorKind::Request(_) => true,
            ImageErrorKind::Exhausted { .. } => false,
        }
    }
}

/// Image rendering error with source location tracking.
///
/// # Examples
///
/// ```
/// use fluxy_error::{ImageError, ImageErrorKind};
///
/// let err = ImageError::new(ImageErrorKind::BadStatus(530));
/// assert!(err.kind.is_retryable());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Image Error: {} at line {} in {}", kind, line, file)]
pub struct ImageError {
    /// The kind of error that occurred
    pub kind: ImageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ImageError {
    /// Create a new ImageError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ImageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
