//! Serde support for reasons (feature-gated)
//!
//! A single reason serializes as `{"code": 3, "message": "not whiskey"}` and an
//! aggregate as `{"reasons": [...]}`. Deserializing an aggregate with an empty
//! `reasons` list fails, so the non-empty invariant survives a round trip.
//!
//! # Example
//!
//! ```rust,ignore
//! use specifica::Reason;
//!
//! let json = serde_json::to_string(&Reason::new(3, "not whiskey")).unwrap();
//! assert_eq!(json, r#"{"code":3,"message":"not whiskey"}"#);
//!
//! let bad: Result<Reason, _> = serde_json::from_str(r#"{"reasons":[]}"#);
//! assert!(bad.is_err());
//! ```

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::{Kind, Reason};
use crate::NonEmptyVec;

const FIELDS: &[&str] = &["code", "message", "reasons"];

struct Children<'a>(&'a NonEmptyVec<Reason>);

impl Serialize for Children<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0)
    }
}

impl Serialize for Reason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.kind {
            Kind::Single { code, message } => {
                let mut state = serializer.serialize_struct("Reason", 2)?;
                state.serialize_field("code", code)?;
                state.serialize_field("message", message.as_ref())?;
                state.end()
            }
            Kind::Aggregate(reasons) => {
                let mut state = serializer.serialize_struct("Reason", 1)?;
                state.serialize_field("reasons", &Children(&**reasons))?;
                state.end()
            }
        }
    }
}

struct ReasonVisitor;

impl<'de> Visitor<'de> for ReasonVisitor {
    type Value = Reason;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a reason with `code` and `message`, or an aggregate with `reasons`")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Reason, A::Error> {
        let mut code: Option<i32> = None;
        let mut message: Option<String> = None;
        let mut reasons: Option<Vec<Reason>> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "code" => code = Some(map.next_value()?),
                "message" => message = Some(map.next_value()?),
                "reasons" => reasons = Some(map.next_value()?),
                other => return Err(de::Error::unknown_field(other, FIELDS)),
            }
        }

        match reasons {
            Some(_) if code.is_some() || message.is_some() => Err(de::Error::custom(
                "an aggregate reason cannot carry its own code or message",
            )),
            Some(reasons) => Reason::aggregate(reasons).map_err(de::Error::custom),
            None => {
                let message = message.ok_or_else(|| de::Error::missing_field("message"))?;
                Ok(Reason::new(code.unwrap_or(super::UNSPECIFIED), message))
            }
        }
    }
}

impl<'de> Deserialize<'de> for Reason {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_struct("Reason", FIELDS, ReasonVisitor)
    }
}
