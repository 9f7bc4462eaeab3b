use std::{fmt, marker::PhantomData, str::FromStr};

use crate::{Error, Iri, IriRef};

struct Visitor<T>(PhantomData<T>, &'static str);

impl<'de, T: FromStr<Err = Error>> serde::de::Visitor<'de> for Visitor<T> {
	type Value = T;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str(self.1)
	}

	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: serde::de::Error,
	{
		v.parse()
			.map_err(|_| E::invalid_value(serde::de::Unexpected::Str(v), &self))
	}
}

macro_rules! string_serde {
	($ident:ident, $expecting:literal) => {
		impl serde::Serialize for $ident {
			fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
			where
				S: serde::Serializer,
			{
				serializer.collect_str(self)
			}
		}

		impl<'de> serde::Deserialize<'de> for $ident {
			fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
			where
				D: serde::Deserializer<'de>,
			{
				deserializer.deserialize_str(Visitor(PhantomData, $expecting))
			}
		}
	};
}

string_serde!(Iri, "an IRI");
string_serde!(IriRef, "an IRI reference");
