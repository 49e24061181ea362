//! Run orchestration for the fluxy publishing bot.
//!
//! The binary in `main.rs` parses flags and hands a resolved
//! [`FluxyConfig`](fluxy_core::FluxyConfig) to [`run::run_once`], which walks
//! the state machine: select topic, research, outline, draft, revise, acquire
//! image, upload media, publish.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod diagnostics;
pub mod run;
