use std::net::{Ipv4Addr, Ipv6Addr};

use smallvec::SmallVec;

/// Parses a `dec-octet`: `0` to `255` without leading zeros.
fn parse_dec_octet(input: &str) -> Option<u8> {
	let valid = !input.is_empty()
		&& input.len() <= 3
		&& input.bytes().all(|b| b.is_ascii_digit())
		&& (input == "0" || !input.starts_with('0'));

	if valid {
		input.parse().ok()
	} else {
		None
	}
}

/// Parses an IPv4 literal (`IPv4address` in RFC 3986).
pub fn parse_ipv4(input: &str) -> Option<Ipv4Addr> {
	let mut octets = [0u8; 4];
	let mut parts = input.split('.');

	for octet in &mut octets {
		*octet = parse_dec_octet(parts.next()?)?;
	}

	if parts.next().is_some() {
		return None;
	}

	Some(Ipv4Addr::from(octets))
}

fn parse_h16(input: &str) -> Option<u16> {
	if !input.is_empty() && input.len() <= 4 && input.bytes().all(|b| b.is_ascii_hexdigit()) {
		u16::from_str_radix(input, 16).ok()
	} else {
		None
	}
}

/// Parses a run of `:`-separated 16-bit pieces. The last piece may be an IPv4
/// address when `ipv4_tail` is set, accounting for two pieces.
fn parse_pieces(input: &str, ipv4_tail: bool) -> Option<SmallVec<[u16; 8]>> {
	let mut pieces = SmallVec::new();
	if input.is_empty() {
		return Some(pieces);
	}

	let mut iter = input.split(':').peekable();
	while let Some(piece) = iter.next() {
		if ipv4_tail && iter.peek().is_none() && piece.contains('.') {
			let [a, b, c, d] = parse_ipv4(piece)?.octets();
			pieces.push(u16::from_be_bytes([a, b]));
			pieces.push(u16::from_be_bytes([c, d]));
		} else {
			pieces.push(parse_h16(piece)?);
		}

		if pieces.len() > 8 {
			return None;
		}
	}

	Some(pieces)
}

/// Parses the content of an IPv6 literal, without the enclosing brackets
/// (`IPv6address` in RFC 3986).
pub fn parse_ipv6(input: &str) -> Option<Ipv6Addr> {
	let mut segments = [0u16; 8];

	match input.find("::") {
		Some(i) => {
			let head = parse_pieces(&input[..i], false)?;
			let tail = parse_pieces(&input[(i + 2)..], true)?;

			// `::` stands for at least one zero piece.
			if head.len() + tail.len() > 7 {
				return None;
			}

			segments[..head.len()].copy_from_slice(&head);
			segments[(8 - tail.len())..].copy_from_slice(&tail);
		}
		None => {
			let pieces = parse_pieces(input, true)?;
			if pieces.len() != 8 {
				return None;
			}

			segments.copy_from_slice(&pieces);
		}
	}

	Some(Ipv6Addr::from(segments))
}
