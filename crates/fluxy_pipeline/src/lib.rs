//! Topic selection and the staged content pipeline.
//!
//! The pipeline turns a topic into a publishable article through four
//! ordered stages — research, outline, draft, quality pass — each a model
//! call whose output feeds the next stage. Research, outline, and the
//! quality pass degrade to safe defaults on failure; a missing draft is
//! fatal to the run.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extraction;
pub mod prompts;
mod stages;
mod topic;

pub use extraction::{clean_topic, extract_title, scrub_meta_phrases, strip_code_fences};
pub use stages::ContentPipeline;
pub use topic::TopicSelector;
