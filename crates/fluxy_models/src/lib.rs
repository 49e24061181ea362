//! Model backends and the fallback gateway for fluxy.
//!
//! [`GeminiClient`] wraps the Gemini REST API behind the
//! [`FluxyDriver`](fluxy_interface::FluxyDriver) trait. [`ModelGateway`]
//! composes an ordered list of drivers into a single resilient driver:
//! first success wins, failures advance to the next candidate after a fixed
//! backoff, and exhausting the list is a terminal condition for the run.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gateway;
mod gemini;

pub use gateway::ModelGateway;
pub use gemini::GeminiClient;
