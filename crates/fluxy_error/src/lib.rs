//! Error types for the fluxy publishing bot.
//!
//! This crate provides the foundation error types used throughout the fluxy
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use fluxy_error::{FluxyResult, HttpError};
//!
//! fn fetch_data() -> FluxyResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gateway;
mod gemini;
mod http;
mod image;
mod json;
mod pipeline;
mod publish;

pub use config::ConfigError;
pub use error::{FluxyError, FluxyErrorKind, FluxyResult};
pub use gateway::{GatewayError, GatewayErrorKind};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use http::HttpError;
pub use image::{ImageError, ImageErrorKind};
pub use json::JsonError;
pub use pipeline::{PipelineError, PipelineErrorKind};
pub use publish::{PublishError, PublishErrorKind};
