//! A duration built from independent day, hour, minute and second counts,
//! with a compact textual form like `2d3h45m30s`.
//!
//! The fields are never normalized against each other, `100h` stays
//! 100 hours. Parsing and formatting are the inverse of each other except
//! that zero fields are dropped on output (`5m0s` reformats as `5m`).

pub mod duration;
pub use duration::Duration;

pub mod error;
pub use error::ParseDurationError;
