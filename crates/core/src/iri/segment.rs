use crate::common::pct_component;

pct_component! {
	/// Path segment.
	Segment: Segment, lowercase: false
}

impl Segment {
	#[inline]
	pub fn empty() -> Self {
		Self::from_validated("")
	}

	/// Checks if this is the `.` segment (or its percent-encoded form).
	#[inline]
	pub fn is_current(&self) -> bool {
		self.octets == b"."
	}

	/// Checks if this is the `..` segment (or its percent-encoded form).
	#[inline]
	pub fn is_parent(&self) -> bool {
		self.octets == b".."
	}

	#[inline]
	pub fn is_dot(&self) -> bool {
		self.is_current() || self.is_parent()
	}
}
