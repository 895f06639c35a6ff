use crate::error::ParseDurationError;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::time::Duration as StdDuration;

use serde::de::{Deserializer, Error};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// A duration built from independent day, hour, minute and second counts.
///
/// Each field keeps the value it was constructed with, `100h` is valid and
/// is not folded into days. The all zero value is valid and means a zero
/// length duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Duration {
	days: u64,
	hours: u64,
	minutes: u64,
	seconds: u64,
}

impl Duration {
	pub const fn new(days: u64, hours: u64, minutes: u64, seconds: u64) -> Self {
		Self {
			days,
			hours,
			minutes,
			seconds,
		}
	}

	pub fn days(&self) -> u64 {
		self.days
	}

	pub fn hours(&self) -> u64 {
		self.hours
	}

	pub fn minutes(&self) -> u64 {
		self.minutes
	}

	pub fn seconds(&self) -> u64 {
		self.seconds
	}

	/// Total length in seconds, using a fixed 24 hour day.
	///
	/// ## Panics
	/// if the total does not fit in a u64
	pub fn as_secs(&self) -> u64 {
		self.minutes
			.checked_mul(60)
			.and_then(|m| self.hours.checked_mul(3600)?.checked_add(m))
			.and_then(|hm| self.days.checked_mul(86400)?.checked_add(hm))
			.and_then(|dhm| self.seconds.checked_add(dhm))
			.expect("total seconds out of range")
	}

	/// ## Panics
	/// if the total seconds do not fit in a u64
	pub fn into_std(self) -> StdDuration {
		StdDuration::from_secs(self.as_secs())
	}
}

impl From<Duration> for StdDuration {
	fn from(d: Duration) -> Self {
		d.into_std()
	}
}

// Splits a leading `<digits><unit>` component from `s`, returning the value
// and the rest. Digits not followed by `unit` are left untouched so a later
// unit may consume them.
fn take_component(
	s: &str,
	unit: u8,
) -> Result<(u64, &str), ParseDurationError> {
	let digits = s
		.bytes()
		.position(|b| !b.is_ascii_digit())
		.unwrap_or(s.len());

	if digits == 0 || s.as_bytes().get(digits) != Some(&unit) {
		return Ok((0, s));
	}

	let value = s[..digits].parse().map_err(ParseDurationError::Overflow)?;

	Ok((value, &s[digits + 1..]))
}

impl FromStr for Duration {
	type Err = ParseDurationError;

	/// Parses strings like `10d5h6m1s`.
	///
	/// Every component is optional and may appear at most once, in the
	/// fixed order d, h, m, s. The empty string parses to the zero value.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (days, rest) = take_component(s, b'd')?;
		let (hours, rest) = take_component(rest, b'h')?;
		let (minutes, rest) = take_component(rest, b'm')?;
		let (seconds, rest) = take_component(rest, b's')?;

		if !rest.is_empty() {
			return Err(ParseDurationError::InvalidFormat);
		}

		Ok(Self {
			days,
			hours,
			minutes,
			seconds,
		})
	}
}

// DISPLAY

impl fmt::Display for Duration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.days > 0 {
			write!(f, "{}d", self.days)?;
		}
		if self.hours > 0 {
			write!(f, "{}h", self.hours)?;
		}
		if self.minutes > 0 {
			write!(f, "{}m", self.minutes)?;
		}
		// seconds are forced when everything else is zero so the zero
		// value still renders as "0s"
		if self.seconds > 0
			|| (self.days == 0 && self.hours == 0 && self.minutes == 0)
		{
			write!(f, "{}s", self.seconds)?;
		}

		Ok(())
	}
}

// SERDE

impl Serialize for Duration {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&self.to_string())
	}
}

impl<'de> Deserialize<'de> for Duration {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let s: Cow<'_, str> = Deserialize::deserialize(deserializer)?;
		Duration::from_str(s.as_ref()).map_err(D::Error::custom)
	}
}
