use std::{fmt, str::FromStr};

use crate::{resolve, Error, Syntax};

mod authority;
mod fragment;
mod host;
mod path;
mod port;
mod query;
mod reference;
mod scheme;
mod segment;
mod userinfo;

pub use authority::*;
pub use fragment::*;
pub use host::*;
pub use path::*;
pub use port::*;
pub use query::*;
pub use reference::*;
pub use scheme::*;
pub use segment::*;
pub use userinfo::*;

/// Absolute IRI: an IRI reference with a scheme.
///
/// ```
/// # use iri_core::Iri;
/// let iri = Iri::parse("https://www.rust-lang.org/foo/bar#frag").unwrap();
///
/// assert_eq!(iri.scheme(), "https");
/// assert_eq!(iri.authority().unwrap().to_string(), "www.rust-lang.org");
/// assert_eq!(iri.path().to_string(), "/foo/bar");
/// assert_eq!(iri.fragment().unwrap(), "frag");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iri {
	pub(crate) scheme: Scheme,
	pub(crate) authority: Option<Authority>,
	pub(crate) path: Path,
	pub(crate) query: Option<Query>,
	pub(crate) fragment: Option<Fragment>,
}

impl Iri {
	/// Parses an absolute IRI.
	///
	/// Fails with [`Error::MissingScheme`] on a relative reference.
	pub fn parse(input: &str) -> Result<Self, Error> {
		Self::parse_with(input, Syntax::default())
	}

	pub fn parse_with(input: &str, syntax: Syntax) -> Result<Self, Error> {
		IriRef::parse_with(input, syntax)?
			.try_into_iri()
			.map_err(|_| {
				log::debug!("rejected IRI `{input}`: missing scheme");
				Error::MissingScheme
			})
	}

	/// Assembles an IRI from validated components, with the same checks as
	/// [`IriRef::from_parts`].
	pub fn from_parts(
		scheme: Scheme,
		authority: Option<Authority>,
		path: Path,
		query: Option<Query>,
		fragment: Option<Fragment>,
	) -> Result<Self, Error> {
		reference::check_path(authority.as_ref(), &path)?;

		Ok(Self {
			scheme,
			authority,
			path,
			query,
			fragment,
		})
	}

	#[inline]
	pub fn scheme(&self) -> &Scheme {
		&self.scheme
	}

	#[inline]
	pub fn authority(&self) -> Option<&Authority> {
		self.authority.as_ref()
	}

	#[inline]
	pub fn user_info(&self) -> Option<&UserInfo> {
		self.authority.as_ref().and_then(Authority::user_info)
	}

	#[inline]
	pub fn host(&self) -> Option<&Host> {
		self.authority.as_ref().map(Authority::host)
	}

	#[inline]
	pub fn port(&self) -> Option<&Port> {
		self.authority.as_ref().and_then(Authority::port)
	}

	#[inline]
	pub fn path(&self) -> &Path {
		&self.path
	}

	#[inline]
	pub fn query(&self) -> Option<&Query> {
		self.query.as_ref()
	}

	#[inline]
	pub fn fragment(&self) -> Option<&Fragment> {
		self.fragment.as_ref()
	}

	/// Returns the same IRI with its path dot segments removed.
	pub fn normalized(&self) -> Self {
		Self {
			path: self.path.normalized(),
			..self.clone()
		}
	}

	/// Returns the same IRI without fragment.
	pub fn without_fragment(&self) -> Self {
		Self {
			fragment: None,
			..self.clone()
		}
	}

	/// Resolves the given reference against this IRI.
	pub fn join(&self, reference: &str) -> Result<Self, Error> {
		Ok(IriRef::parse(reference)?.resolved(self))
	}

	pub(crate) fn as_base(&self) -> resolve::Base<'_> {
		resolve::Base {
			scheme: &self.scheme,
			authority: self.authority.as_ref(),
			path: &self.path,
			query: self.query.as_ref(),
		}
	}

	pub fn into_reference(self) -> IriRef {
		self.into()
	}
}

impl fmt::Display for Iri {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		reference::fmt_components(
			f,
			Some(&self.scheme),
			self.authority.as_ref(),
			&self.path,
			self.query.as_ref(),
			self.fragment.as_ref(),
		)
	}
}

impl fmt::Debug for Iri {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::Debug::fmt(&self.to_string(), f)
	}
}

impl FromStr for Iri {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl<'a> TryFrom<&'a str> for Iri {
	type Error = Error;

	fn try_from(value: &'a str) -> Result<Self, Self::Error> {
		Self::parse(value)
	}
}

impl TryFrom<IriRef> for Iri {
	type Error = IriRef;

	fn try_from(reference: IriRef) -> Result<Self, Self::Error> {
		reference.try_into_iri()
	}
}

impl PartialEq<&str> for Iri {
	fn eq(&self, other: &&str) -> bool {
		Self::parse(other).is_ok_and(|other| *self == other)
	}
}
