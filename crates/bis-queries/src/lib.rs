//! # bis-queries
//!
//! Request parameter builders for the BIS API client.
//!
//! ## Structure
//!
//! - `ordering` - Result ordering of the events endpoint
//! - `filter` - Server-side preset filters and their allowed combinations
//! - `event_parameters` - Fluent builder for the events endpoint
//!
//! ## Example
//!
//! ```
//! use bis_models::{EventType, ProgramCode};
//! use bis_queries::{EventParameters, FilterPreset};
//!
//! let params = EventParameters::new()
//!     .set_filter(FilterPreset::WEEKEND | FilterPreset::CAMP)?
//!     .set_types(vec![EventType::Voluntary, EventType::Experience])
//!     .set_program(ProgramCode::Nature)
//!     .set_organized_by(vec![12, 34])
//!     .order_by_date_from()
//!     .flatten();
//!
//! assert_eq!(params.get("event_type_array"), Some("dobr,zaz"));
//! assert_eq!(params.get("program_array"), Some("ap"));
//! assert_eq!(params.get("administrative_unit"), Some("12,34"));
//! assert_eq!(params.get("ordering"), Some("date_from"));
//! # Ok::<(), bis_core::BisError>(())
//! ```

pub mod ordering;
pub mod filter;
pub mod event_parameters;

// Re-exports for convenience
pub use ordering::Ordering;
pub use filter::FilterPreset;
pub use event_parameters::{keys, EventParameters, OrganizedBy};
