//! Grammar scanner and component validators.
//!
//! The scanner only locates the five generic components of an IRI reference
//! (RFC 3986 section 3). Each component is then checked against its own
//! grammar by [`validate`], which also enforces percent-encoding.
use std::ops::Range;

use crate::Error;

mod ip;

pub(crate) use ip::{parse_ipv4, parse_ipv6};

/// Character repertoire accepted by the parser.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Syntax {
	/// RFC 3986 URI syntax: ASCII only.
	Uri,

	/// RFC 3987 IRI syntax: `ucschar` are allowed in every component that
	/// accepts unreserved characters, and `iprivate` in the query.
	#[default]
	Iri,
}

#[inline]
pub fn is_alpha(c: char) -> bool {
	c.is_ascii_alphabetic()
}

#[inline]
pub fn is_digit(c: char) -> bool {
	c.is_ascii_digit()
}

#[inline]
pub fn is_alphanumeric(c: char) -> bool {
	c.is_ascii_alphanumeric()
}

fn is_ucschar(c: char) -> bool {
	let c = c as u32;
	(0xA0..=0xD7FF).contains(&c)
		|| (0xF900..=0xFDCF).contains(&c)
		|| (0xFDF0..=0xFFEF).contains(&c)
		|| (0x10000..=0x1FFFD).contains(&c)
		|| (0x20000..=0x2FFFD).contains(&c)
		|| (0x30000..=0x3FFFD).contains(&c)
		|| (0x40000..=0x4FFFD).contains(&c)
		|| (0x50000..=0x5FFFD).contains(&c)
		|| (0x60000..=0x6FFFD).contains(&c)
		|| (0x70000..=0x7FFFD).contains(&c)
		|| (0x80000..=0x8FFFD).contains(&c)
		|| (0x90000..=0x9FFFD).contains(&c)
		|| (0xA0000..=0xAFFFD).contains(&c)
		|| (0xB0000..=0xBFFFD).contains(&c)
		|| (0xC0000..=0xCFFFD).contains(&c)
		|| (0xD0000..=0xDFFFD).contains(&c)
		|| (0xE1000..=0xEFFFD).contains(&c)
}

fn is_private(c: char) -> bool {
	let c = c as u32;
	(0xE000..=0xF8FF).contains(&c)
		|| (0xF0000..=0xFFFFD).contains(&c)
		|| (0x100000..=0x10FFFD).contains(&c)
}

fn is_unreserved(c: char) -> bool {
	is_alphanumeric(c) || matches!(c, '-' | '.' | '_' | '~')
}

fn is_subdelim(c: char) -> bool {
	matches!(
		c,
		'!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '='
	)
}

/// Checks that the input matches `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
pub fn is_scheme(input: &str) -> bool {
	let mut chars = input.chars();
	match chars.next() {
		Some(c) if is_alpha(c) => {
			chars.all(|c| is_alphanumeric(c) || matches!(c, '+' | '-' | '.'))
		}
		_ => false,
	}
}

/// Percent-encoded components, and the characters each one accepts beside
/// `unreserved`, `sub-delims` and percent-encoded octets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Component {
	UserInfo,
	RegName,
	Segment,
	Query,
	Fragment,
}

impl Component {
	fn allows(self, c: char, syntax: Syntax) -> bool {
		if is_unreserved(c) || is_subdelim(c) {
			return true;
		}

		let iri = syntax == Syntax::Iri;
		if iri && is_ucschar(c) {
			return true;
		}

		match self {
			Self::UserInfo => c == ':',
			Self::RegName => false,
			Self::Segment => matches!(c, ':' | '@'),
			Self::Query => matches!(c, ':' | '@' | '/' | '?') || (iri && is_private(c)),
			Self::Fragment => matches!(c, ':' | '@' | '/' | '?'),
		}
	}

	fn error(self, input: &str, offset: usize) -> Error {
		match self {
			Self::UserInfo => Error::InvalidUserInfo(offset),
			Self::RegName => Error::InvalidHost(input.to_owned()),
			Self::Segment => Error::InvalidPath(offset),
			Self::Query => Error::InvalidQuery(offset),
			Self::Fragment => Error::InvalidFragment(offset),
		}
	}
}

/// Validates a percent-encoded component starting at byte `offset` of the
/// parsed input.
pub(crate) fn validate(
	input: &str,
	offset: usize,
	component: Component,
	syntax: Syntax,
) -> Result<(), Error> {
	let bytes = input.as_bytes();
	let mut chars = input.char_indices();

	while let Some((i, c)) = chars.next() {
		if c == '%' {
			let hex = |j: usize| bytes.get(j).is_some_and(u8::is_ascii_hexdigit);
			if hex(i + 1) && hex(i + 2) {
				chars.next();
				chars.next();
			} else {
				return Err(Error::InvalidPercentEncoding(offset + i));
			}
		} else if !component.allows(c, syntax) {
			return Err(component.error(input, offset + i));
		}
	}

	Ok(())
}

/// Decodes the octets of an already validated percent-encoded component.
///
/// Encoded octets need not form UTF-8.
pub(crate) fn decode_octets(raw: &str) -> Vec<u8> {
	let bytes = raw.as_bytes();
	let mut octets = Vec::with_capacity(bytes.len());
	let mut i = 0;

	while i < bytes.len() {
		match (bytes[i], hex_value(bytes.get(i + 1)), hex_value(bytes.get(i + 2))) {
			(b'%', Some(high), Some(low)) => {
				octets.push(high << 4 | low);
				i += 3
			}
			(b, _, _) => {
				octets.push(b);
				i += 1
			}
		}
	}

	octets
}

fn hex_value(b: Option<&u8>) -> Option<u8> {
	let b = *b?;
	match b {
		b'0'..=b'9' => Some(b - b'0'),
		b'a'..=b'f' => Some(b - b'a' + 10),
		b'A'..=b'F' => Some(b - b'A' + 10),
		_ => None,
	}
}

/// Decodes an already validated percent-encoded component into text.
///
/// Octets that are not UTF-8 are replaced with U+FFFD.
pub(crate) fn decode(raw: &str) -> String {
	match String::from_utf8(decode_octets(raw)) {
		Ok(text) => text,
		Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
	}
}

/// Byte ranges of the five generic components of an IRI reference.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReferenceParts {
	pub scheme: Option<Range<usize>>,
	pub authority: Option<Range<usize>>,
	pub path: Range<usize>,
	pub query: Option<Range<usize>>,
	pub fragment: Option<Range<usize>>,
}

/// Finds the scheme, if any.
///
/// A scheme is present when a `:` appears before any `/`, `?` or `#`. The
/// prefix must then be a valid scheme, since the first segment of a relative
/// reference cannot contain a colon.
pub fn find_scheme(input: &str) -> Result<Option<Range<usize>>, Error> {
	for (i, b) in input.bytes().enumerate() {
		match b {
			b'/' | b'?' | b'#' => break,
			b':' => {
				return if is_scheme(&input[..i]) {
					Ok(Some(0..i))
				} else {
					Err(Error::InvalidScheme(input[..i].to_owned()))
				}
			}
			_ => (),
		}
	}

	Ok(None)
}

fn scan_until(bytes: &[u8], mut i: usize, delimiters: &[u8]) -> usize {
	while i < bytes.len() && !delimiters.contains(&bytes[i]) {
		i += 1
	}

	i
}

/// Splits the input into its generic components.
///
/// This does not validate the components themselves.
pub fn reference_parts(input: &str) -> Result<ReferenceParts, Error> {
	let bytes = input.as_bytes();

	let scheme = find_scheme(input)?;
	let mut i = scheme.as_ref().map(|r| r.end + 1).unwrap_or(0);

	let authority = if bytes[i..].starts_with(b"//") {
		let start = i + 2;
		i = scan_until(bytes, start, b"/?#");
		Some(start..i)
	} else {
		None
	};

	let path_end = scan_until(bytes, i, b"?#");
	let path = i..path_end;
	i = path_end;

	let query = if bytes.get(i) == Some(&b'?') {
		let start = i + 1;
		i = scan_until(bytes, start, b"#");
		Some(start..i)
	} else {
		None
	};

	let fragment = if bytes.get(i) == Some(&b'#') {
		Some((i + 1)..bytes.len())
	} else {
		None
	};

	Ok(ReferenceParts {
		scheme,
		authority,
		path,
		query,
		fragment,
	})
}

/// Byte ranges of the user info, host and port of an authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorityParts {
	pub user_info: Option<Range<usize>>,
	pub host: Range<usize>,
	pub port: Option<Range<usize>>,
}

/// Splits the authority found in `input[range]`.
///
/// The user info ends at the last `@`. The port starts after the last `:`
/// that follows the closing bracket of an IP literal, if any.
pub fn authority_parts(input: &str, range: Range<usize>) -> Result<AuthorityParts, Error> {
	let bytes = input.as_bytes();
	let Range { start, end } = range;
	let invalid = || Error::InvalidAuthority(input[start..end].to_owned());

	let (user_info, host_start) = match bytes[start..end].iter().rposition(|b| *b == b'@') {
		Some(at) => (Some(start..(start + at)), start + at + 1),
		None => (None, start),
	};

	if host_start < end && bytes[host_start] == b'[' {
		let close = bytes[host_start..end]
			.iter()
			.position(|b| *b == b']')
			.map(|j| host_start + j)
			.ok_or_else(invalid)?;

		let host = host_start..(close + 1);
		match bytes.get(close + 1) {
			_ if close + 1 == end => Ok(AuthorityParts {
				user_info,
				host,
				port: None,
			}),
			Some(b':') => Ok(AuthorityParts {
				user_info,
				host,
				port: Some((close + 2)..end),
			}),
			_ => Err(invalid()),
		}
	} else {
		match bytes[host_start..end].iter().rposition(|b| *b == b':') {
			Some(colon) => Ok(AuthorityParts {
				user_info,
				host: host_start..(host_start + colon),
				port: Some((host_start + colon + 1)..end),
			}),
			None => Ok(AuthorityParts {
				user_info,
				host: host_start..end,
				port: None,
			}),
		}
	}
}
