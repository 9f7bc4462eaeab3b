use std::fmt;

/// Writes a percent-encoded string in canonical form: hexadecimal digits of
/// `%XX` triplets upper-cased, other ASCII letters lower-cased if `lowercase`
/// is set.
pub(crate) fn write_canonical(f: &mut fmt::Formatter, raw: &str, lowercase: bool) -> fmt::Result {
	let mut hex_digits = 0;
	for c in raw.chars() {
		let c = if hex_digits > 0 {
			hex_digits -= 1;
			c.to_ascii_uppercase()
		} else if c == '%' {
			hex_digits = 2;
			c
		} else if lowercase {
			c.to_ascii_lowercase()
		} else {
			c
		};

		fmt::Write::write_char(f, c)?
	}

	Ok(())
}

macro_rules! str_eq {
	($ident:ident) => {
		impl PartialEq<str> for $ident {
			fn eq(&self, other: &str) -> bool {
				self.as_str() == other
			}
		}

		impl<'a> PartialEq<&'a str> for $ident {
			fn eq(&self, other: &&'a str) -> bool {
				self.as_str() == *other
			}
		}

		impl PartialEq<String> for $ident {
			fn eq(&self, other: &String) -> bool {
				self.as_str() == other.as_str()
			}
		}
	};
}

pub(crate) use str_eq;

/// Defines a percent-encoded component type.
///
/// The type stores the raw text as written and its decoded octets. Comparison
/// and hashing use the decoded octets, serialization the canonical raw text.
macro_rules! pct_component {
	($(#[$meta:meta])* $ident:ident: $component:ident, lowercase: $lowercase:literal) => {
		$(#[$meta])*
		#[derive(Clone)]
		pub struct $ident {
			raw: String,
			octets: Vec<u8>,
			decoded: String,
		}

		impl $ident {
			/// Validates the given input using the IRI syntax.
			pub fn new(input: &str) -> Result<Self, $crate::Error> {
				Self::new_with(input, $crate::Syntax::default())
			}

			/// Validates the given input using the given syntax.
			pub fn new_with(input: &str, syntax: $crate::Syntax) -> Result<Self, $crate::Error> {
				Self::parse_at(input, 0, syntax)
			}

			/// Validates a component found at byte `offset` of a larger input.
			pub(crate) fn parse_at(
				input: &str,
				offset: usize,
				syntax: $crate::Syntax,
			) -> Result<Self, $crate::Error> {
				$crate::parsing::validate(
					input,
					offset,
					$crate::parsing::Component::$component,
					syntax,
				)?;
				Ok(Self::from_validated(input))
			}

			pub(crate) fn from_validated(raw: &str) -> Self {
				let mut octets = $crate::parsing::decode_octets(raw);
				let decoded = $crate::parsing::decode(raw);
				if $lowercase {
					octets.make_ascii_lowercase()
				}

				Self {
					raw: raw.to_owned(),
					octets,
					decoded: if $lowercase {
						decoded.to_lowercase()
					} else {
						decoded
					},
				}
			}

			/// Returns the raw text, as written.
			#[inline]
			pub fn as_str(&self) -> &str {
				&self.raw
			}

			/// Returns the raw text as a percent-encoded string, if the encoded
			/// octets form UTF-8.
			#[inline]
			pub fn as_pct_str(&self) -> Option<&pct_str::PctStr> {
				std::str::from_utf8(&self.octets)
					.ok()
					.and_then(|_| pct_str::PctStr::new(&self.raw).ok())
			}

			/// Returns the percent-decoded octets.
			#[inline]
			pub fn octets(&self) -> &[u8] {
				&self.octets
			}

			/// Returns the percent-decoded text, with U+FFFD in place of octets
			/// that are not UTF-8.
			#[inline]
			pub fn decoded(&self) -> &str {
				&self.decoded
			}

			#[inline]
			pub fn is_empty(&self) -> bool {
				self.raw.is_empty()
			}

			#[inline]
			pub fn into_string(self) -> String {
				self.raw
			}
		}

		impl std::str::FromStr for $ident {
			type Err = $crate::Error;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::new(s)
			}
		}

		impl std::fmt::Display for $ident {
			fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
				$crate::common::write_canonical(f, &self.raw, $lowercase)
			}
		}

		impl std::fmt::Debug for $ident {
			fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
				std::fmt::Debug::fmt(&self.raw, f)
			}
		}

		impl PartialEq for $ident {
			#[inline]
			fn eq(&self, other: &Self) -> bool {
				self.octets == other.octets
			}
		}

		impl Eq for $ident {}

		impl PartialOrd for $ident {
			#[inline]
			fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
				Some(self.cmp(other))
			}
		}

		impl Ord for $ident {
			#[inline]
			fn cmp(&self, other: &Self) -> std::cmp::Ordering {
				self.octets.cmp(&other.octets)
			}
		}

		impl std::hash::Hash for $ident {
			#[inline]
			fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
				self.octets.hash(state)
			}
		}

		$crate::common::str_eq!($ident);
	};
}

pub(crate) use pct_component;
