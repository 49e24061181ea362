//! Publishing sequence: media first, then the post.

use tracing::{info, instrument, warn};

use fluxy_core::{Article, ImageAsset, PublishedPost};
use fluxy_error::FluxyResult;
use fluxy_interface::ContentStore;

/// Uploads the image and submits the post.
///
/// Publishing is fire-once: a rejected post surfaces as an error with no
/// queued retry. A rejected media upload degrades instead — the post still
/// goes out, just without a featured image.
pub struct Publisher<S: ContentStore> {
    store: S,
}

impl<S: ContentStore> Publisher<S> {
    /// Create a publisher over the given content store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store (for history listing).
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Publish an article with an optional featured image.
    #[instrument(skip(self, article, image), fields(title = %article.title))]
    pub async fn publish(
        &self,
        article: &Article,
        image: Option<&ImageAsset>,
    ) -> FluxyResult<PublishedPost> {
        let featured_media = match image {
            Some(asset) => match self.store.upload_media(asset).await {
                Ok(id) => {
                    info!(media_id = id, "Media uploaded");
                    Some(id)
                }
                Err(e) => {
                    warn!(error = %e, "Media upload rejected, publishing without featured image");
                    None
                }
            },
            None => None,
        };

        let post = self.store.create_post(article, featured_media).await?;
        info!(post_id = post.id, link = %post.link, "Post published");
        Ok(post)
    }
}
