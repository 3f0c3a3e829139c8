//! # bis-core
//!
//! Core types, traits, and utilities for the BIS API client.
//!
//! This crate provides the foundational building blocks used by the other crates:
//! - Common error types
//! - Result type alias
//! - The `ToQueryParams` trait implemented by request objects
//! - `QueryParams`, the flat key/value mapping sent as a query string
//! - Client configuration

pub mod error;
pub mod result;
pub mod traits;
pub mod params;
pub mod config;

pub use error::*;
pub use result::*;
pub use traits::*;
pub use params::QueryParams;
