//! Trait definitions for text backends and the content store.

use async_trait::async_trait;
use fluxy_core::{Article, GenerateRequest, GenerateResponse, ImageAsset, PostSummary, PublishedPost};
use fluxy_error::FluxyResult;

/// Core trait that all text-generation backends must implement.
///
/// This is the single polymorphic seam the model gateway iterates over:
/// attempt a request, return output or an error. The gateway composes a
/// priority-ordered list of implementors; it also implements this trait
/// itself, so downstream components cannot tell a lone backend from a
/// fallback chain.
#[async_trait]
pub trait FluxyDriver: Send + Sync {
    /// Generate model output for a single request.
    async fn generate(&self, req: &GenerateRequest) -> FluxyResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.5-flash").
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T: FluxyDriver + ?Sized> FluxyDriver for std::sync::Arc<T> {
    async fn generate(&self, req: &GenerateRequest) -> FluxyResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

/// Remote content store operations.
///
/// Three operations, mirroring the WordPress REST surface the bot needs:
/// list recent posts for deduplication, upload media, create a post.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// List the most recent published posts, newest first.
    async fn recent_posts(&self, count: u32) -> FluxyResult<Vec<PostSummary>>;

    /// Upload image bytes as a media item, returning its numeric identifier.
    async fn upload_media(&self, asset: &ImageAsset) -> FluxyResult<u64>;

    /// Create a post, optionally referencing a previously uploaded media item.
    async fn create_post(
        &self,
        article: &Article,
        featured_media: Option<u64>,
    ) -> FluxyResult<PublishedPost>;
}
