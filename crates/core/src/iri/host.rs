use std::{
	cmp::Ordering,
	fmt,
	hash::{Hash, Hasher},
	net::{Ipv4Addr, Ipv6Addr},
	str::FromStr,
};

use crate::{
	common::pct_component,
	parsing::{parse_ipv4, parse_ipv6},
	Error, Syntax,
};

pct_component! {
	/// Registered name host, such as a DNS domain name.
	///
	/// Comparison is case-insensitive.
	RegName: RegName, lowercase: true
}

/// IPv6 address literal.
///
/// Keeps the textual form of the address (lower-cased) so it can be written
/// back as found. Comparison uses the address only.
#[derive(Clone)]
pub struct Ipv6Literal {
	addr: Ipv6Addr,
	text: String,
}

impl Ipv6Literal {
	pub fn new(addr: Ipv6Addr) -> Self {
		Self {
			addr,
			text: addr.to_string(),
		}
	}

	#[inline]
	pub fn addr(&self) -> Ipv6Addr {
		self.addr
	}

	/// Returns the textual form of the address, without brackets.
	#[inline]
	pub fn as_str(&self) -> &str {
		&self.text
	}
}

impl PartialEq for Ipv6Literal {
	fn eq(&self, other: &Self) -> bool {
		self.addr == other.addr
	}
}

impl Eq for Ipv6Literal {}

impl PartialOrd for Ipv6Literal {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Ipv6Literal {
	fn cmp(&self, other: &Self) -> Ordering {
		self.addr.cmp(&other.addr)
	}
}

impl Hash for Ipv6Literal {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.addr.hash(state)
	}
}

impl fmt::Display for Ipv6Literal {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "[{}]", self.text)
	}
}

impl fmt::Debug for Ipv6Literal {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::Display::fmt(self, f)
	}
}

impl From<Ipv6Addr> for Ipv6Literal {
	fn from(addr: Ipv6Addr) -> Self {
		Self::new(addr)
	}
}

/// Authority host.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Host {
	Ipv4(Ipv4Addr),
	Ipv6(Ipv6Literal),
	RegName(RegName),
}

impl Host {
	pub fn new(input: &str) -> Result<Self, Error> {
		Self::new_with(input, Syntax::default())
	}

	pub fn new_with(input: &str, syntax: Syntax) -> Result<Self, Error> {
		Self::parse_at(input, 0, syntax)
	}

	/// Parses a host found at byte `offset` of a larger input.
	///
	/// IP literals are tried first, in brackets for IPv6. Anything else must
	/// be a registered name.
	pub(crate) fn parse_at(input: &str, offset: usize, syntax: Syntax) -> Result<Self, Error> {
		if input.starts_with('[') {
			let invalid = || Error::InvalidHost(input.to_owned());
			let text = input
				.strip_prefix('[')
				.and_then(|s| s.strip_suffix(']'))
				.ok_or_else(invalid)?;
			let addr = parse_ipv6(text).ok_or_else(invalid)?;

			Ok(Self::Ipv6(Ipv6Literal {
				addr,
				text: text.to_ascii_lowercase(),
			}))
		} else if let Some(addr) = parse_ipv4(input) {
			Ok(Self::Ipv4(addr))
		} else {
			RegName::parse_at(input, offset, syntax).map(Self::RegName)
		}
	}

	#[inline]
	pub fn is_ip_literal(&self) -> bool {
		!matches!(self, Self::RegName(_))
	}

	/// Checks if this is an empty registered name, as in `file:///`.
	#[inline]
	pub fn is_empty(&self) -> bool {
		matches!(self, Self::RegName(name) if name.is_empty())
	}

	pub fn as_reg_name(&self) -> Option<&RegName> {
		match self {
			Self::RegName(name) => Some(name),
			_ => None,
		}
	}
}

impl Default for Host {
	fn default() -> Self {
		Self::RegName(RegName::from_validated(""))
	}
}

impl From<Ipv4Addr> for Host {
	fn from(addr: Ipv4Addr) -> Self {
		Self::Ipv4(addr)
	}
}

impl From<Ipv6Addr> for Host {
	fn from(addr: Ipv6Addr) -> Self {
		Self::Ipv6(addr.into())
	}
}

impl From<RegName> for Host {
	fn from(name: RegName) -> Self {
		Self::RegName(name)
	}
}

impl FromStr for Host {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

impl fmt::Display for Host {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Ipv4(addr) => fmt::Display::fmt(addr, f),
			Self::Ipv6(literal) => fmt::Display::fmt(literal, f),
			Self::RegName(name) => fmt::Display::fmt(name, f),
		}
	}
}

impl PartialEq<&str> for Host {
	fn eq(&self, other: &&str) -> bool {
		Self::parse_at(other, 0, Syntax::Iri).is_ok_and(|other| *self == other)
	}
}
