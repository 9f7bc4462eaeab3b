//! Core implementation of the `iri` crate: parsing, validation, resolution
//! and serialization of IRIs (RFC 3987) and URIs (RFC 3986).
pub(crate) mod common;
mod error;
mod iri;
pub mod parsing;
mod resolve;

#[cfg(feature = "serde")]
mod serde;

pub use error::{Error, Result};
pub use iri::*;
pub use parsing::Syntax;
pub use resolve::resolve;
