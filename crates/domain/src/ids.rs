use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

// Identifiers are authored strings (scenario documents, request parameters),
// so every id type wraps a String and borrows as `str` for map lookups.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

// Scenario graph IDs
define_id!(ScenarioId);
define_id!(NodeId);
define_id!(ChoiceId);

// Progression IDs
define_id!(QuestId);

// Player IDs (guest-derived or authenticated)
define_id!(UserId);

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn ids_borrow_as_str_for_map_lookups() {
        let mut nodes = BTreeMap::new();
        nodes.insert(NodeId::new("start"), 1);

        assert_eq!(nodes.get("start"), Some(&1));
        assert_eq!(NodeId::from("start"), "start");
    }

    #[test]
    fn ids_serialize_transparently() {
        let json = serde_json::to_string(&QuestId::new("first_steps")).expect("serialize");
        assert_eq!(json, "\"first_steps\"");

        let id: UserId = serde_json::from_str("\"u1\"").expect("deserialize");
        assert_eq!(id.as_str(), "u1");
    }
}
