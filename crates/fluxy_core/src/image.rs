//! Image asset types.

use serde::{Deserialize, Serialize};

/// The image ultimately attached to a published post.
///
/// Either bytes from a remote render, or locally synthesized vector markup
/// (`image/svg+xml`) when every remote service is exhausted. Never null by
/// the time it reaches the publisher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAsset {
    /// Binary image data
    pub data: Vec<u8>,
    /// MIME type of the image
    pub mime: String,
}

impl ImageAsset {
    /// Create an asset from remote render bytes.
    pub fn new(data: Vec<u8>, mime: impl Into<String>) -> Self {
        Self {
            data,
            mime: mime.into(),
        }
    }

    /// Create the terminal vector-graphic fallback asset.
    pub fn svg(markup: String) -> Self {
        Self {
            data: markup.into_bytes(),
            mime: "image/svg+xml".to_string(),
        }
    }

    /// File extension matching the MIME type, for upload filenames.
    pub fn extension(&self) -> &'static str {
        match self.mime.as_str() {
            "image/svg+xml" => "svg",
            "image/jpeg" => "jpg",
            "image/webp" => "webp",
            "image/gif" => "gif",
            _ => "png",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_asset_carries_vector_mime() {
        let asset = ImageAsset::svg("<svg></svg>".to_string());
        assert_eq!(asset.mime, "image/svg+xml");
        assert_eq!(asset.extension(), "svg");
    }

    #[test]
    fn unknown_mime_defaults_to_png_extension() {
        let asset = ImageAsset::new(vec![0x89], "application/octet-stream");
        assert_eq!(asset.extension(), "png");
    }
}
