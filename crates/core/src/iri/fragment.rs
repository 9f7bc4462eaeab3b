use crate::common::pct_component;

pct_component! {
	/// IRI fragment, without the leading `#`.
	Fragment: Fragment, lowercase: false
}
