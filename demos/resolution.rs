use iri::{Error, Iri, IriRef};

fn main() -> Result<(), Error> {
	let base_iri = Iri::parse("http://a/b/c/d;p?q")?;
	let iri_ref = IriRef::parse("g;x=1/../y")?;

	assert_eq!(iri_ref.resolved(&base_iri).to_string(), "http://a/b/c/y");

	// string-level resolution.
	let iri = iri::resolve("http://example.org/ros%C3%A9/", "../caf\u{e9}#menu")?;
	println!("{iri}");

	Ok(())
}
