/// Result of a fallible IRI operation.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error raised while parsing, validating or resolving an IRI reference.
///
/// Offsets are byte offsets into the parsed input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("invalid IRI scheme `{0}`")]
	InvalidScheme(String),

	#[error("missing IRI scheme")]
	MissingScheme,

	#[error("invalid IRI authority `{0}`")]
	InvalidAuthority(String),

	#[error("invalid IRI user info at offset {0}")]
	InvalidUserInfo(usize),

	#[error("invalid IRI host `{0}`")]
	InvalidHost(String),

	#[error("invalid IRI port `{0}`")]
	InvalidPort(String),

	#[error("invalid IRI path at offset {0}")]
	InvalidPath(usize),

	#[error("invalid IRI query at offset {0}")]
	InvalidQuery(usize),

	#[error("invalid IRI fragment at offset {0}")]
	InvalidFragment(usize),

	#[error("invalid percent-encoded octet at offset {0}")]
	InvalidPercentEncoding(usize),

	/// A path starting with `//` without a preceding authority would be read
	/// back as an authority.
	#[error("ambiguous IRI path `{0}`")]
	AmbiguousPath(String),

	#[error("base IRI reference `{0}` is not absolute")]
	NonAbsoluteBase(String),
}
