//! Core traits shared by request objects

use crate::params::QueryParams;

/// Identifier of a remote record (administrative units, events, ...)
pub type Id = i64;

/// Trait for request objects that serialize into query-string parameters
///
/// Implementors flatten their state into the exact key/value shape the
/// remote API expects. Flattening never fails; validation happens when
/// the request object is populated.
pub trait ToQueryParams {
    fn to_query_params(&self) -> QueryParams;
}

impl<T: ToQueryParams + ?Sized> ToQueryParams for &T {
    fn to_query_params(&self) -> QueryParams {
        (**self).to_query_params()
    }
}
