//! Reference resolution (RFC 3986 section 5.2).
use crate::{Authority, Error, Iri, IriRef, Path, Query, Scheme};

/// Components of a base IRI taking part in resolution.
#[derive(Clone, Copy)]
pub(crate) struct Base<'a> {
	pub scheme: &'a Scheme,
	pub authority: Option<&'a Authority>,
	pub path: &'a Path,
	pub query: Option<&'a Query>,
}

impl<'a> Base<'a> {
	pub fn from_reference(base: &'a IriRef) -> Result<Self, Error> {
		let scheme = base
			.scheme
			.as_ref()
			.ok_or_else(|| Error::NonAbsoluteBase(base.to_string()))?;

		Ok(Self {
			scheme,
			authority: base.authority.as_ref(),
			path: &base.path,
			query: base.query.as_ref(),
		})
	}
}

/// Merges a relative path with the base path, dropping the last base segment.
fn merge(base: Base, path: &Path) -> Path {
	let mut segments = match base.path.segments().split_last() {
		Some((_, init)) => init.to_vec(),
		None => Vec::new(),
	};

	segments.extend_from_slice(path.segments());
	Path::from_segments(base.authority.is_some() || base.path.is_absolute(), segments)
}

pub(crate) fn resolve_reference(base: Base, reference: &IriRef) -> Iri {
	let (scheme, authority, path, query) = match (&reference.scheme, &reference.authority) {
		(Some(scheme), _) => (
			scheme.clone(),
			reference.authority.clone(),
			reference.path.normalized(),
			reference.query.clone(),
		),
		(None, Some(authority)) => (
			base.scheme.clone(),
			Some(authority.clone()),
			reference.path.normalized(),
			reference.query.clone(),
		),
		(None, None) => {
			let (path, query) = if reference.path.is_empty() {
				(
					base.path.normalized(),
					reference.query.clone().or_else(|| base.query.cloned()),
				)
			} else if reference.path.is_absolute() {
				(reference.path.normalized(), reference.query.clone())
			} else {
				(
					merge(base, &reference.path).normalized(),
					reference.query.clone(),
				)
			};

			(base.scheme.clone(), base.authority.cloned(), path, query)
		}
	};

	let result = Iri {
		scheme,
		authority,
		path,
		query,
		fragment: reference.fragment.clone(),
	};

	log::trace!("resolved `{reference}` against base `{}:{}`: `{result}`", base.scheme, base.path);
	result
}

/// Parses `reference` and resolves it against `base`.
///
/// ```
/// assert_eq!(
/// 	iri_core::resolve("http://a/b/c/d;p?q", "../g").unwrap().to_string(),
/// 	"http://a/b/g"
/// );
/// ```
pub fn resolve(base: &str, reference: &str) -> Result<Iri, Error> {
	let base = IriRef::parse(base)?;
	IriRef::parse(reference)?.resolve_against(&base)
}
