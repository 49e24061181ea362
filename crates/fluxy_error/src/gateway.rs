//! Model gateway error types.

/// Specific error conditions for the model gateway.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GatewayErrorKind {
    /// A single backend in the priority list failed
    #[display("Backend '{}' failed: {}", model, message)]
    BackendFailed {
        /// Model identifier of the failed backend
        model: String,
        /// Error message from the backend
        message: String,
    },
    /// Every configured backend failed; the gateway is fully unavailable
    #[display("All {} configured model backends failed", attempted)]
    Exhausted {
        /// Number of backends attempted before giving up
        attempted: usize,
    },
}

/// Model gateway error with source location tracking.
///
/// The `Exhausted` kind is terminal for the current run: callers must not
/// retry in-process when every backend in the priority list has failed.
///
/// # Examples
///
/// ```
/// use fluxy_error::{GatewayError, GatewayErrorKind};
///
/// let err = GatewayError::new(GatewayErrorKind::Exhausted { attempted: 3 });
/// assert!(err.is_exhausted());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gateway Error: {} at line {} in {}", kind, line, file)]
pub struct GatewayError {
    /// The kind of error that occurred
    pub kind: GatewayErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GatewayError {
    /// Create a new GatewayError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GatewayErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// True when every backend in the priority list was tried and failed.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind, GatewayErrorKind::Exhausted { .. })
    }
}
