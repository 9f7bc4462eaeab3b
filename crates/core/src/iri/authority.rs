use std::{fmt, str::FromStr};

use crate::{parsing, Error, Host, Port, Syntax, UserInfo};

/// IRI authority: `[userinfo "@"] host [":" port]`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Authority {
	user_info: Option<UserInfo>,
	host: Host,
	port: Option<Port>,
}

impl Authority {
	pub fn new(input: &str) -> Result<Self, Error> {
		Self::new_with(input, Syntax::default())
	}

	pub fn new_with(input: &str, syntax: Syntax) -> Result<Self, Error> {
		Self::parse_at(input, 0..input.len(), syntax)
	}

	/// Parses the authority found in `input[range]`.
	pub(crate) fn parse_at(
		input: &str,
		range: std::ops::Range<usize>,
		syntax: Syntax,
	) -> Result<Self, Error> {
		let parts = parsing::authority_parts(input, range)?;

		let user_info = parts
			.user_info
			.map(|r| UserInfo::parse_at(&input[r.clone()], r.start, syntax))
			.transpose()?;
		let host = Host::parse_at(&input[parts.host.clone()], parts.host.start, syntax)?;
		let port = parts.port.map(|r| Port::new(&input[r])).transpose()?;

		Ok(Self {
			user_info,
			host,
			port,
		})
	}

	pub fn from_parts(user_info: Option<UserInfo>, host: Host, port: Option<Port>) -> Self {
		Self {
			user_info,
			host,
			port,
		}
	}

	#[inline]
	pub fn user_info(&self) -> Option<&UserInfo> {
		self.user_info.as_ref()
	}

	#[inline]
	pub fn host(&self) -> &Host {
		&self.host
	}

	#[inline]
	pub fn port(&self) -> Option<&Port> {
		self.port.as_ref()
	}

	pub fn into_parts(self) -> (Option<UserInfo>, Host, Option<Port>) {
		(self.user_info, self.host, self.port)
	}
}

impl From<Host> for Authority {
	fn from(host: Host) -> Self {
		Self::from_parts(None, host, None)
	}
}

impl FromStr for Authority {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

impl fmt::Display for Authority {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		if let Some(user_info) = &self.user_info {
			write!(f, "{user_info}@")?
		}

		write!(f, "{}", self.host)?;

		if let Some(port) = &self.port {
			write!(f, ":{port}")?
		}

		Ok(())
	}
}
