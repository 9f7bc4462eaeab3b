use crate::common::pct_component;

pct_component! {
	/// IRI query, without the leading `?`.
	Query: Query, lowercase: false
}
