use iri::{resolve, Error, Iri, IriRef};

const BASE: &str = "http://a/b/c/d;p?q";

/// RFC 3986 section 5.4.1.
const NORMAL: [(&str, &str); 24] = [
	("g:h", "g:h"),
	("g", "http://a/b/c/g"),
	("./g", "http://a/b/c/g"),
	("g/", "http://a/b/c/g/"),
	("/g", "http://a/g"),
	("//g", "http://g"),
	("?y", "http://a/b/c/d;p?y"),
	("g?y", "http://a/b/c/g?y"),
	("#s", "http://a/b/c/d;p?q#s"),
	("g#s", "http://a/b/c/g#s"),
	("g?y#s", "http://a/b/c/g?y#s"),
	(";x", "http://a/b/c/;x"),
	("g;x", "http://a/b/c/g;x"),
	("g;x?y#s", "http://a/b/c/g;x?y#s"),
	("", "http://a/b/c/d;p?q"),
	(".", "http://a/b/c/"),
	("./", "http://a/b/c/"),
	("..", "http://a/b/"),
	("../", "http://a/b/"),
	("../g", "http://a/b/g"),
	("../..", "http://a/"),
	("../../", "http://a/"),
	("../../g", "http://a/g"),
	("#frag", "http://a/b/c/d;p?q#frag"),
];

/// RFC 3986 section 5.4.2.
const ABNORMAL: [(&str, &str); 19] = [
	("../../../g", "http://a/g"),
	("../../../../g", "http://a/g"),
	("/./g", "http://a/g"),
	("/../g", "http://a/g"),
	("g.", "http://a/b/c/g."),
	(".g", "http://a/b/c/.g"),
	("g..", "http://a/b/c/g.."),
	("..g", "http://a/b/c/..g"),
	("./../g", "http://a/b/g"),
	("./g/.", "http://a/b/c/g/"),
	("g/./h", "http://a/b/c/g/h"),
	("g/../h", "http://a/b/c/h"),
	("g;x=1/./y", "http://a/b/c/g;x=1/y"),
	("g;x=1/../y", "http://a/b/c/y"),
	("g?y/./x", "http://a/b/c/g?y/./x"),
	("g?y/../x", "http://a/b/c/g?y/../x"),
	("g#s/./x", "http://a/b/c/g#s/./x"),
	("g#s/../x", "http://a/b/c/g#s/../x"),
	("http:g", "http:g"),
];

#[test]
fn normal_examples() {
	for (reference, expected) in NORMAL {
		assert_eq!(resolve(BASE, reference).unwrap().to_string(), expected, "{reference}")
	}
}

#[test]
fn abnormal_examples() {
	for (reference, expected) in ABNORMAL {
		assert_eq!(resolve(BASE, reference).unwrap().to_string(), expected, "{reference}")
	}
}

#[test]
fn structured_result() {
	let base = Iri::parse(BASE).unwrap();
	let iri = IriRef::parse("../g?y#s").unwrap().resolved(&base);

	assert_eq!(iri.scheme(), "http");
	assert_eq!(iri.host().unwrap(), &"a");
	assert_eq!(iri.path().to_string(), "/b/g");
	assert_eq!(iri.query().unwrap(), "y");
	assert_eq!(iri.fragment().unwrap(), "s");
	assert_eq!(iri, "http://a/b/g?y#s");
}

#[test]
fn identity() {
	let vectors = [
		("http://a/b/./c/../d?q#f", "http://a/b/d?q"),
		("http://a", "http://a"),
		("http://a/b/c/..", "http://a/b/"),
		("urn:isbn:0451450523", "urn:isbn:0451450523"),
	];

	for (base, expected) in vectors {
		let resolved = resolve(base, "").unwrap();
		let base = Iri::parse(base).unwrap();

		assert_eq!(resolved.to_string(), expected);
		assert_eq!(resolved, base.normalized().without_fragment())
	}
}

#[test]
fn idempotence() {
	let base = Iri::parse(BASE).unwrap();
	let other = Iri::parse("ftp://example.org/x/y").unwrap();

	for reference in [
		"https://example.org/a/b/../c?d#e",
		"mailto:user@example.org",
		"file:///etc/./hosts",
	] {
		let reference = IriRef::parse(reference).unwrap();
		let resolved = reference.resolved(&base);

		assert_eq!(IriRef::from(resolved.clone()), reference.normalized());
		assert_eq!(resolved, reference.resolved(&other));
		assert_eq!(IriRef::from(resolved.clone()).resolved(&base), resolved)
	}
}

#[test]
fn dot_segments() {
	let vectors = [
		("http://example.org/a/b/../c", "http://example.org/a/c"),
		("http://example.org/a/b/./c", "http://example.org/a/b/c"),
		("http://example.org/a/../../c", "http://example.org/c"),
		("http://example.org/a/%2e%2E/c", "http://example.org/c"),
	];

	for (input, expected) in vectors {
		assert_eq!(resolve(input, "").unwrap().to_string(), expected, "{input}")
	}
}

#[test]
fn empty_base_path() {
	assert_eq!(resolve("http://a", "g").unwrap().to_string(), "http://a/g");
	assert_eq!(resolve("http://a", "?q").unwrap().to_string(), "http://a?q");
	assert_eq!(resolve("s:a/b", "c").unwrap().to_string(), "s:a/c");
}

#[test]
fn non_absolute_base() {
	assert_eq!(
		resolve("/a/b", "c"),
		Err(Error::NonAbsoluteBase("/a/b".to_owned()))
	);
	assert!(matches!(
		resolve("http://a/b", "http://[::1"),
		Err(Error::InvalidAuthority(_))
	));
}

#[test]
fn unicode() {
	let iri = resolve("http://example.org/ros%C3%A9/", "../caf\u{e9}").unwrap();
	assert_eq!(iri.to_string(), "http://example.org/caf\u{e9}");
	assert_eq!(iri, "http://example.org/caf%C3%A9");
}
