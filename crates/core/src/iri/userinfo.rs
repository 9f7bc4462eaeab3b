use crate::common::pct_component;

pct_component! {
	/// User information sub-component of an authority, before the `@`.
	UserInfo: UserInfo, lowercase: false
}
