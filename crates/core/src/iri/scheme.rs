use std::{fmt, str::FromStr};

use crate::{common::str_eq, parsing, Error};

/// IRI scheme, stored lower-cased.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Scheme(String);

impl Scheme {
	pub fn new(input: &str) -> Result<Self, Error> {
		if parsing::is_scheme(input) {
			Ok(Self::from_validated(input))
		} else {
			Err(Error::InvalidScheme(input.to_owned()))
		}
	}

	pub(crate) fn from_validated(input: &str) -> Self {
		Self(input.to_ascii_lowercase())
	}

	#[inline]
	pub fn as_str(&self) -> &str {
		&self.0
	}

	#[inline]
	pub fn into_string(self) -> String {
		self.0
	}
}

impl FromStr for Scheme {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

impl fmt::Display for Scheme {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl fmt::Debug for Scheme {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::Debug::fmt(&self.0, f)
	}
}

str_eq!(Scheme);
