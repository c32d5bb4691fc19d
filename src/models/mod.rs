//! Domain models for the quiz results collector.
//!
//! These types are shared across the handler, the naming rules and the remote store.

pub mod commit;
pub mod submission;
