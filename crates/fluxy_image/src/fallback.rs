//! Terminal vector-graphic fallback.

use fluxy_core::ImageAsset;

/// Brand label rendered into the fallback image.
const BRAND_LABEL: &str = "fluxy";

/// Synthesize a self-contained SVG carrying the topic text.
///
/// Used only when every remote render service is exhausted; guarantees the
/// pipeline always hands the publisher a non-null asset.
///
/// # Examples
///
/// ```
/// use fluxy_image::placeholder_svg;
///
/// let asset = placeholder_svg("아이폰 배터리", 1024, 600);
/// assert_eq!(asset.mime, "image/svg+xml");
/// let markup = String::from_utf8(asset.data).unwrap();
/// assert!(markup.contains("아이폰 배터리"));
/// ```
pub fn placeholder_svg(topic: &str, width: u32, height: u32) -> ImageAsset {
    let title = xml_escape(topic);
    let markup = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">
  <defs>
    <linearGradient id="bg" x1="0" y1="0" x2="1" y2="1">
      <stop offset="0" stop-color="#1c2740"/>
      <stop offset="1" stop-color="#3d5a80"/>
    </linearGradient>
  </defs>
  <rect width="{width}" height="{height}" fill="url(#bg)"/>
  <text x="50%" y="48%" text-anchor="middle" font-family="sans-serif" font-size="44" fill="#ffffff">{title}</text>
  <text x="50%" y="88%" text-anchor="middle" font-family="sans-serif" font-size="22" fill="#98c1d9">{BRAND_LABEL}</text>
</svg>
"##
    );
    ImageAsset::svg(markup)
}

fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
