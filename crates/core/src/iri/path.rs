use std::{fmt, str::FromStr};

use smallvec::SmallVec;

use crate::{Error, Segment, Syntax};

/// Stack size (in number of `&Segment`) allocated to normalize a path. If it
/// needs more space, it will allocate memory on the heap.
const NORMALIZE_STACK_SIZE: usize = 16;

/// IRI path.
///
/// A path is a sequence of segments, rooted (absolute) or not. The empty path
/// has no segments, while `/a/` has the segments `a` and ``.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path {
	absolute: bool,
	segments: Vec<Segment>,
}

impl Path {
	pub fn new(input: &str) -> Result<Self, Error> {
		Self::new_with(input, Syntax::default())
	}

	pub fn new_with(input: &str, syntax: Syntax) -> Result<Self, Error> {
		Self::parse_at(input, 0, syntax)
	}

	/// Parses a path found at byte `offset` of a larger input.
	pub(crate) fn parse_at(input: &str, mut offset: usize, syntax: Syntax) -> Result<Self, Error> {
		let (absolute, rest) = match input.strip_prefix('/') {
			Some(rest) => {
				offset += 1;
				(true, rest)
			}
			None => (false, input),
		};

		let mut segments = Vec::new();
		if !rest.is_empty() {
			for segment in rest.split('/') {
				segments.push(Segment::parse_at(segment, offset, syntax)?);
				offset += segment.len() + 1
			}
		}

		Ok(Self { absolute, segments })
	}

	/// Builds a path from its segments.
	///
	/// A lone empty segment is dropped, since it would be written as `/` (or
	/// nothing) and read back without it.
	pub fn from_segments(absolute: bool, mut segments: Vec<Segment>) -> Self {
		if segments.len() == 1 && segments[0].is_empty() {
			segments.clear()
		}

		Self { absolute, segments }
	}

	/// The empty path.
	#[inline]
	pub fn empty() -> Self {
		Self::default()
	}

	/// The `/` path.
	#[inline]
	pub fn root() -> Self {
		Self {
			absolute: true,
			segments: Vec::new(),
		}
	}

	#[inline]
	pub fn is_absolute(&self) -> bool {
		self.absolute
	}

	#[inline]
	pub fn is_relative(&self) -> bool {
		!self.absolute
	}

	/// Checks if this is the empty path (not `/`).
	#[inline]
	pub fn is_empty(&self) -> bool {
		!self.absolute && self.segments.is_empty()
	}

	#[inline]
	pub fn segments(&self) -> &[Segment] {
		&self.segments
	}

	#[inline]
	pub fn into_segments(self) -> Vec<Segment> {
		self.segments
	}

	/// Checks if the path starts with `//`, which would be read as an
	/// authority if written after the scheme.
	pub fn starts_with_double_slash(&self) -> bool {
		self.absolute && self.segments.len() > 1 && self.segments[0].is_empty()
	}

	/// Returns the last segment, unless it is empty.
	pub fn file_name(&self) -> Option<&Segment> {
		self.segments.last().filter(|s| !s.is_empty())
	}

	/// Returns the path without its last segment, ending with a `/` if it
	/// had more than one segment.
	///
	/// ```
	/// # use iri_core::Path;
	/// assert_eq!(Path::new("/a/b/c").unwrap().directory().to_string(), "/a/b/");
	/// assert_eq!(Path::new("/a").unwrap().directory().to_string(), "/");
	/// assert_eq!(Path::new("a").unwrap().directory().to_string(), "");
	/// ```
	pub fn directory(&self) -> Self {
		match self.segments.split_last() {
			Some((_, init)) if !init.is_empty() => {
				let mut segments = init.to_vec();
				segments.push(Segment::empty());
				Self {
					absolute: self.absolute,
					segments,
				}
			}
			_ => Self {
				absolute: self.absolute,
				segments: Vec::new(),
			},
		}
	}

	/// Returns the segments left after removing the `.` and `..` segments
	/// (RFC 3986 section 5.2.4).
	///
	/// A `..` segment with nothing to remove is dropped on an absolute path
	/// and kept on a relative one.
	pub fn normalized_segments(&self) -> NormalizedSegments<'_> {
		self.normalize().0
	}

	fn normalize(&self) -> (NormalizedSegments<'_>, bool) {
		let relative = self.is_relative();
		let mut stack = SmallVec::<[&Segment; NORMALIZE_STACK_SIZE]>::new();
		let mut open = false;

		for segment in &self.segments {
			if segment.is_current() {
				open = true
			} else if segment.is_parent() {
				if stack.last().map(|s| s.is_parent()).unwrap_or(relative) {
					stack.push(segment)
				} else {
					stack.pop();
				}

				open = true
			} else if !(relative && stack.is_empty() && segment.is_empty()) {
				stack.push(segment);
				open = false
			}
		}

		(NormalizedSegments(stack.into_iter()), open)
	}

	/// Returns the path with its dot segments removed.
	///
	/// A path ending with a `.` or `..` segment keeps a trailing `/`.
	pub fn normalized(&self) -> Self {
		let (normalized, open) = self.normalize();
		let mut segments: Vec<Segment> = normalized.cloned().collect();

		if open && !segments.is_empty() {
			segments.push(Segment::empty())
		}

		Self::from_segments(self.absolute, segments)
	}

	/// Checks if the path contains no `.` or `..` segment.
	pub fn is_normalized(&self) -> bool {
		!self.segments.iter().any(Segment::is_dot)
	}
}

pub struct NormalizedSegments<'a>(smallvec::IntoIter<[&'a Segment; NORMALIZE_STACK_SIZE]>);

impl<'a> Iterator for NormalizedSegments<'a> {
	type Item = &'a Segment;

	fn next(&mut self) -> Option<Self::Item> {
		self.0.next()
	}
}

impl FromStr for Path {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

impl fmt::Display for Path {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		if self.absolute {
			f.write_str("/")?
		}

		for (i, segment) in self.segments.iter().enumerate() {
			if i > 0 {
				f.write_str("/")?
			}

			write!(f, "{segment}")?
		}

		Ok(())
	}
}
