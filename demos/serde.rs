use iri::{Iri, IriRef};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Foo {
	iri: Iri,
}

#[derive(Debug, Serialize, Deserialize)]
struct Bar {
	iri_ref: IriRef,
}

fn main() {
	let foo: Foo = serde_json::from_str("{ \"iri\": \"https://example.org/foo\" }").unwrap();
	let bar: Bar = serde_json::from_str("{ \"iri_ref\": \"../bar\" }").unwrap();

	eprintln!("{:?}", foo);
	eprintln!("{:?}", bar);
	eprintln!("{}", bar.iri_ref.resolved(&foo.iri));
}
