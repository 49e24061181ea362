//! Article and post types.

use serde::{Deserialize, Serialize};

/// A generated article ready for publishing.
///
/// The body must already be sanitized of code-fence wrappers before it
/// reaches the publisher.
///
/// # Examples
///
/// ```
/// use fluxy_core::Article;
///
/// let article = Article {
///     title: "아이폰 배터리 오래 쓰는 법".to_string(),
///     body: "<h2>들어가며</h2><p>...</p>".to_string(),
/// };
/// assert!(!article.title.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Post title, derived heuristically from the outline when not supplied
    pub title: String,
    /// Final body markup
    pub body: String,
}

/// Summary of an already-published post, as returned by the content store
/// listing. Used only for best-effort topic deduplication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    /// Numeric post identifier
    pub id: u64,
    /// Rendered post title
    pub title: String,
    /// Public permalink
    pub link: String,
}

/// The output artifact of a run, returned by the content store.
///
/// Not tracked further after logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishedPost {
    /// Numeric post identifier
    pub id: u64,
    /// Public permalink
    pub link: String,
}
