//! Text-transformation tool suite SDK facade.
//!
//! Depend on this crate via `cargo add textsmith`. It bundles the suite's
//! crates behind feature flags so hosts can enable only the components they
//! embed: prompt resolution, the remote request pipeline, and the local
//! analysis engine.

#![warn(missing_docs, clippy::pedantic)]

/// Re-export shared primitives for convenience.
pub use tool_primitives as primitives;

/// Instruction templates and prompt resolution (enabled by `prompts`).
#[cfg(feature = "prompts")]
pub use tool_prompts as prompts;

/// Request pipeline and outcome classification (enabled by `pipeline`).
#[cfg(feature = "pipeline")]
pub use tool_pipeline as pipeline;

/// Local statistics and readability scoring (enabled by `analysis`).
#[cfg(feature = "analysis")]
pub use tool_analysis as analysis;
