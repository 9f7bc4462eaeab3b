use iri::{Error, Iri};

fn main() -> Result<(), Error> {
	let iri = Iri::parse("https://www.rust-lang.org/foo/bar?query#frag")?;

	println!("scheme: {}", iri.scheme());
	if let Some(authority) = iri.authority() {
		println!("authority: {authority}");
	}
	println!("path: {}", iri.path());
	if let Some(query) = iri.query() {
		println!("query: {query}");
	}
	if let Some(fragment) = iri.fragment() {
		println!("fragment: {fragment}");
	}

	Ok(())
}
