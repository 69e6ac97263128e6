//! Network processing logic.
//!
//! - [`summarize`] - batch-merge networks into a minimal covering CIDR set

mod summarize;

// Re-export public functions
pub use summarize::{summarize, summarize_str};
