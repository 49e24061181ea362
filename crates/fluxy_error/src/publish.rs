//! Publishing error types.

/// Specific error conditions for the content store.
///
/// Publishing is fire-once: rejections are reported, never retried.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PublishErrorKind {
    /// Media upload was rejected by the content store
    #[display("Media upload rejected with HTTP {}: {}", status, body)]
    MediaRejected {
        /// HTTP status code of the rejection
        status: u16,
        /// Response body returned by the store
        body: String,
    },
    /// Post creation was rejected by the content store
    #[display("Post creation rejected with HTTP {}: {}", status, body)]
    PostRejected {
        /// HTTP status code of the rejection
        status: u16,
        /// Response body returned by the store
        body: String,
    },
}

/// Publishing error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Publish Error: {} at line {} in {}", kind, line, file)]
pub struct PublishError {
    /// The kind of error that occurred
    pub kind: PublishErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PublishError {
    /// Create a new PublishError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PublishErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
