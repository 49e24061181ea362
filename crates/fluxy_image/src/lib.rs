//! Image acquisition for fluxy.
//!
//! Three sub-stages: synthesize an image-description prompt (model call with
//! a deterministic template fallback), render it against an ordered list of
//! image-service variants with per-service retry, and — when every remote
//! option is exhausted — synthesize a self-contained SVG so the pipeline
//! always yields an asset.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod acquire;
mod fallback;
mod prompt;
mod render;

pub use acquire::ImageAcquirer;
pub use fallback::placeholder_svg;
