//! This crate provides an implementation of Internationalized Resource
//! Identifiers (IRIs, RFC 3987) and their ASCII subset, Uniform Resource
//! Identifiers (URIs, RFC 3986).
//!
//! An IRI reference is parsed into owned, validated components that can be
//! inspected, compared, normalized and written back in canonical form.
//! Relative references are resolved against a base IRI following RFC 3986
//! section 5.
//!
//! ```
//! use iri::{Iri, IriRef};
//!
//! let base = Iri::parse("http://a/b/c/d;p?q").unwrap();
//! let reference = IriRef::parse("g;x=1/../y").unwrap();
//!
//! assert_eq!(reference.resolved(&base).to_string(), "http://a/b/c/y");
//! ```
//!
//! Components are compared after percent-decoding, and the scheme and host
//! are case-insensitive:
//!
//! ```
//! use iri::Iri;
//!
//! let a = Iri::parse("HTTP://Example.ORG/%7Euser").unwrap();
//! let b = Iri::parse("http://example.org/~user").unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a.to_string(), "http://example.org/%7Euser");
//! ```
//!
//! Parsing accepts Unicode characters by default. Use [`Syntax::Uri`] to
//! restrict the input to ASCII:
//!
//! ```
//! use iri::{IriRef, Syntax};
//!
//! assert!(IriRef::parse_with("/caf\u{e9}", Syntax::Iri).is_ok());
//! assert!(IriRef::parse_with("/caf\u{e9}", Syntax::Uri).is_err());
//! ```
//!
//! ## Features
//!
//! - `serde`: implements `Serialize` and `Deserialize` for [`Iri`] and
//!   [`IriRef`], using their string form.
pub use iri_core::*;
