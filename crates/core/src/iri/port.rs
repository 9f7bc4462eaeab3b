use std::{fmt, str::FromStr};

use crate::{common::str_eq, Error};

/// Authority port.
///
/// A port is a possibly empty string of digits. An empty port (as in
/// `http://example.org:/`) is distinct from an absent one.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Port(String);

impl Port {
	pub fn new(input: &str) -> Result<Self, Error> {
		if input.bytes().all(|b| b.is_ascii_digit()) {
			Ok(Self(input.to_owned()))
		} else {
			Err(Error::InvalidPort(input.to_owned()))
		}
	}

	#[inline]
	pub fn as_str(&self) -> &str {
		&self.0
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns the port number, if the port is neither empty nor out of range.
	pub fn number(&self) -> Option<u16> {
		self.0.parse().ok()
	}
}

impl From<u16> for Port {
	fn from(n: u16) -> Self {
		Self(n.to_string())
	}
}

impl FromStr for Port {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

impl fmt::Display for Port {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl fmt::Debug for Port {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::Debug::fmt(&self.0, f)
	}
}

str_eq!(Port);
