use crate::id::SemanticId;
use crate::prefix::Prefix;
use core::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

impl Serialize for SemanticId {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SemanticId {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdVisitor;

        impl de::Visitor<'_> for IdVisitor {
            type Value = SemanticId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a 32-character Base62 semantic id")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                SemanticId::parse(v).map_err(de::Error::custom)
            }
        }

        d.deserialize_str(IdVisitor)
    }
}

impl Serialize for Prefix {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Prefix {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PrefixVisitor;

        impl de::Visitor<'_> for PrefixVisitor {
            type Value = Prefix;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a 2-character alphanumeric prefix")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Prefix::new(v).map_err(de::Error::custom)
            }
        }

        d.deserialize_str(PrefixVisitor)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    fn prefix(s: &str) -> Prefix {
        Prefix::new(s).unwrap()
    }

    #[test]
    fn id_roundtrips_as_a_string() {
        #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
        struct Row {
            user_id: SemanticId,
        }

        let row = Row {
            user_id: SemanticId::random(prefix("US")),
        };
        let json = serde_json::to_string(&row).expect("serialize");
        assert_eq!(json, format!("{{\"user_id\":\"{}\"}}", row.user_id));

        let back: Row = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, row);
    }

    #[test]
    fn malformed_ids_are_rejected() {
        let err = serde_json::from_str::<SemanticId>("\"too-short\"").unwrap_err();
        assert!(err.to_string().contains("invalid id length"));

        let bad = format!("\"US{}!\"", "a".repeat(29));
        let err = serde_json::from_str::<SemanticId>(&bad).unwrap_err();
        assert!(err.to_string().contains("invalid id byte"));
    }

    #[test]
    fn prefix_roundtrips_and_validates() {
        let json = serde_json::to_string(&prefix("US")).unwrap();
        assert_eq!(json, "\"US\"");
        assert_eq!(serde_json::from_str::<Prefix>("\"US\"").unwrap(), prefix("US"));
        assert!(serde_json::from_str::<Prefix>("\"USR\"").is_err());
    }
}
