use std::num::ParseIntError;

/// Error returned when a duration string could not be parsed.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ParseDurationError {
	#[error("invalid duration format, expected 'NdNhNmNs'")]
	InvalidFormat,

	#[error("duration component out of range {0}")]
	Overflow(ParseIntError),
}
