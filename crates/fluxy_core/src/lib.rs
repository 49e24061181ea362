//! Core data types for the fluxy publishing bot.
//!
//! This crate provides the foundation data types shared by the gateway,
//! pipeline, image, and publishing crates, plus the explicit configuration
//! object assembled once at startup and passed into each component.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod article;
mod config;
mod image;
mod request;

pub use article::{Article, PostSummary, PublishedPost};
pub use config::{
    FluxyConfig, GatewayConfig, ImageConfig, PacingConfig, RenderServiceConfig, SiteConfig,
    TopicConfig, TopicStrategy,
};
pub use image::ImageAsset;
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
