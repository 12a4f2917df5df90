//! vivaprep-core — Question store, answer scoring, and the session state machine.
//!
//! This crate defines the fundamental data model, the `Embedder` trait, and
//! the scoring logic that the rest of vivaprep builds on.

pub mod error;
pub mod evaluate;
pub mod model;
pub mod session;
pub mod store;
pub mod traits;
