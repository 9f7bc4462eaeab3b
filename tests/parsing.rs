use iri::{Error, Host, Iri, IriRef, Syntax};

#[test]
fn test1() {
	let buffer = "https://www.rust-lang.org/foo/bar#frag";
	let iri = Iri::parse(buffer).expect("parsing failed");

	assert_eq!(iri.scheme(), "https");
	assert_eq!(iri.authority().unwrap().to_string(), "www.rust-lang.org");
	assert_eq!(iri.path().to_string(), "/foo/bar");
	assert_eq!(iri.fragment().unwrap(), "frag");
}

#[test]
fn test2() {
	let buffer = "https://[::]/foo/bar#frag";
	let iri = Iri::parse(buffer).expect("parsing failed");

	assert_eq!(iri.scheme(), "https");
	assert_eq!(iri.authority().unwrap().to_string(), "[::]");
	assert!(matches!(iri.host(), Some(Host::Ipv6(_))));
	assert_eq!(iri.path().to_string(), "/foo/bar");
}

#[test]
fn test3() {
	let buffer = "https://[::192.128.0.1]/foo/bar#frag";
	let iri = Iri::parse(buffer).expect("parsing failed");

	assert_eq!(iri.scheme(), "https");
	assert_eq!(iri.authority().unwrap().to_string(), "[::192.128.0.1]");
	assert_eq!(iri.path().to_string(), "/foo/bar");
}

#[test]
#[should_panic]
fn test4() {
	let buffer = "https://[::256.128.0.1]/foo/bar#frag"; // 256.128.0.1 is not a valid IPv4
	Iri::parse(buffer).expect("parsing failed");
}

#[test]
fn test5() {
	let buffer = "https:///foo/bar#frag";
	let iri = Iri::parse(buffer).expect("parsing failed");

	assert_eq!(iri.scheme(), "https");
	assert!(iri.host().unwrap().is_empty());
	assert_eq!(iri.path().to_string(), "/foo/bar");
}

#[test]
fn test6() {
	let buffer = "https:/foo/bar#frag";
	let iri = Iri::parse(buffer).expect("parsing failed");

	assert_eq!(iri.scheme(), "https");
	assert!(iri.authority().is_none());
	assert_eq!(iri.path().to_string(), "/foo/bar");
}

#[test]
fn test7() {
	let buffer = "https:foo/bar#frag";
	let iri = Iri::parse(buffer).expect("parsing failed");

	assert_eq!(iri.scheme(), "https");
	assert!(iri.authority().is_none());
	assert!(iri.path().is_relative());
	assert_eq!(iri.path().to_string(), "foo/bar");
}

#[test]
fn empty_port() {
	let iri = Iri::parse("http://example.org:/").expect("parsing failed");
	let port = iri.port().unwrap();

	assert!(port.is_empty());
	assert_eq!(port.number(), None);
	assert_eq!(iri.to_string(), "http://example.org:/");
}

#[test]
fn rejected() {
	assert!(matches!(
		IriRef::parse("http://[::1"),
		Err(Error::InvalidAuthority(_))
	));
	assert!(matches!(
		IriRef::parse("http://host:abc/"),
		Err(Error::InvalidPort(_))
	));
	assert!(matches!(
		IriRef::parse("http://host/%zz"),
		Err(Error::InvalidPercentEncoding(12))
	));
	assert!(matches!(
		IriRef::parse("http://[1::2::3]/"),
		Err(Error::InvalidHost(_))
	));
	assert!(matches!(IriRef::parse("1:x"), Err(Error::InvalidScheme(_))));
	assert!(matches!(IriRef::parse("/a#b#c"), Err(Error::InvalidFragment(4))));
	assert!(matches!(IriRef::parse("a\\b"), Err(Error::InvalidPath(1))));
}

#[test]
fn ascii_only() {
	let input = "http://\u{3b1}.example/\u{3b2}?\u{3b3}";

	assert!(IriRef::parse_with(input, Syntax::Iri).is_ok());
	assert!(matches!(
		IriRef::parse_with(input, Syntax::Uri),
		Err(Error::InvalidHost(_))
	));
	assert!(IriRef::parse_with("http://xn--mxa.example/%CE%B2", Syntax::Uri).is_ok());
}

#[test]
fn relative_references() {
	let vectors = [
		("", true),
		("a", true),
		("//host", true),
		("?q", true),
		("s:", false),
		("s://h/p", false),
	];

	for (input, relative) in vectors {
		let reference = IriRef::parse(input).unwrap();
		assert_eq!(reference.is_relative_reference(), relative, "{input}");
		assert_eq!(reference.scheme().is_none(), relative)
	}
}
