//! # bis-models
//!
//! Token sets and response models for the BIS API client.
//!
//! The remote API identifies event types, programs and target groups by short
//! Czech slugs. Each set is closed, so each is an enum here and a slug outside
//! the set cannot be represented.

#[macro_use]
mod token;

pub mod event_type;
pub mod program;
pub mod target_group;

// Re-exports for convenience
pub use event_type::EventType;
pub use program::{Program, ProgramCode};
pub use target_group::TargetGroup;
