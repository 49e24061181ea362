//! WordPress REST integration for fluxy.
//!
//! [`WordPressClient`] implements the [`ContentStore`](fluxy_interface::ContentStore)
//! trait over the three REST operations the bot needs; [`Publisher`] sequences
//! media upload and post creation on top of any store implementation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod publisher;

pub use client::WordPressClient;
pub use publisher::Publisher;
