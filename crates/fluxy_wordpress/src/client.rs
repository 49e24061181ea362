//! WordPress REST API client.

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use fluxy_core::{Article, ImageAsset, PostSummary, PublishedPost, SiteConfig};
use fluxy_error::{FluxyResult, HttpError, JsonError, PublishError, PublishErrorKind};
use fluxy_interface::ContentStore;

/// Client for the WordPress REST API.
///
/// Covers the three operations the bot needs: list recent posts, create a
/// media item, create a post. Both write operations carry the same Basic
/// credential header, precomputed from the configured application password.
pub struct WordPressClient {
    http: reqwest::Client,
    endpoint: String,
    auth_header: String,
    category: u32,
}

impl std::fmt::Debug for WordPressClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordPressClient")
            .field("endpoint", &self.endpoint)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

/// Post creation payload.
#[derive(Debug, Serialize)]
struct NewPost<'a> {
    title: &'a str,
    content: &'a str,
    status: &'static str,
    categories: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    featured_media: Option<u64>,
}

/// Listing item with WordPress's rendered-field nesting.
#[derive(Debug, Deserialize)]
struct PostItem {
    id: u64,
    title: RenderedField,
    link: String,
}

#[derive(Debug, Deserialize)]
struct RenderedField {
    rendered: String,
}

#[derive(Debug, Deserialize)]
struct MediaCreated {
    id: u64,
}

#[derive(Debug, Deserialize)]
struct PostCreated {
    id: u64,
    link: String,
}

impl WordPressClient {
    /// Build a client from site configuration.
    pub fn new(config: &SiteConfig) -> FluxyResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| HttpError::new(e.to_string()))?;

        let credentials = format!("{}:{}", config.user, config.app_password);
        let auth_header = format!("Basic {}", BASE64.encode(credentials));

        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            auth_header,
            category: config.category,
        })
    }

    fn url(&self, resource: &str) -> String {
        format!("{}/{}", self.endpoint, resource)
    }
}

#[async_trait]
impl ContentStore for WordPressClient {
    #[instrument(skip(self))]
    async fn recent_posts(&self, count: u32) -> FluxyResult<Vec<PostSummary>> {
        let response = self
            .http
            .get(self.url("posts"))
            .query(&[
                ("per_page", count.to_string()),
                ("_fields", "id,title,link".to_string()),
            ])
            .send()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::new(format!("Post listing returned HTTP {}", status)).into());
        }

        let items: Vec<PostItem> = response
            .json()
            .await
            .map_err(|e| JsonError::new(e.to_string()))?;

        debug!(count = items.len(), "Fetched recent posts");
        Ok(items
            .into_iter()
            .map(|item| PostSummary {
                id: item.id,
                title: item.title.rendered,
                link: item.link,
            })
            .collect())
    }

    #[instrument(skip(self, asset))]
    async fn upload_media(&self, asset: &ImageAsset) -> FluxyResult<u64> {
        let filename = format!(
            "blog_img_{}.{}",
            chrono::Utc::now().timestamp(),
            asset.extension()
        );

        let response = self
            .http
            .post(self.url("media"))
            .header("Authorization", &self.auth_header)
            .header(
                "Content-Disposition",
                format!("attachment; filename={filename}"),
            )
            .header("Content-Type", &asset.mime)
            .body(asset.data.clone())
            .send()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::CREATED {
            let body = response.text().await.unwrap_or_default();
            return Err(PublishError::new(PublishErrorKind::MediaRejected {
                status: status.as_u16(),
                body,
            })
            .into());
        }

        let created: MediaCreated = response
            .json()
            .await
            .map_err(|e| JsonError::new(e.to_string()))?;
        Ok(created.id)
    }

    #[instrument(skip(self, article), fields(title = %article.title))]
    async fn create_post(
        &self,
        article: &Article,
        featured_media: Option<u64>,
    ) -> FluxyResult<PublishedPost> {
        let payload = NewPost {
            title: &article.title,
            content: &article.body,
            status: "publish",
            categories: vec![self.category],
            featured_media,
        };

        let response = self
            .http
            .post(self.url("posts"))
            .header("Authorization", &self.auth_header)
            .json(&payload)
            .send()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::CREATED {
            let body = response.text().await.unwrap_or_default();
            return Err(PublishError::new(PublishErrorKind::PostRejected {
                status: status.as_u16(),
                body,
            })
            .into());
        }

        let created: PostCreated = response
            .json()
            .await
            .map_err(|e| JsonError::new(e.to_string()))?;
        Ok(PublishedPost {
            id: created.id,
            link: created.link,
        })
    }
}
