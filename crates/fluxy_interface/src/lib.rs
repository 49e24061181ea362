//! Trait seams between fluxy components and their remote services.
//!
//! Every external collaborator sits behind one of these traits so the
//! pipeline can be exercised against fakes in tests. The gateway, the
//! pipeline, and image acquisition are generic over [`FluxyDriver`]; the
//! publisher is generic over [`ContentStore`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ContentStore, FluxyDriver};
