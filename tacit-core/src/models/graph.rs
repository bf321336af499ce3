use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use ts_rs::TS;

/// Node types understood by the external graph memory service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum EntityType {
    Decision,
    Preference,
    Solution,
    Pattern,
    Workflow,
    Technology,
    Tool,
}

/// Typed, directed edge label.
///
/// `ChoseOver` points from the chosen thing to the rejected alternative;
/// `Constraint`/`Tradeoff` point from the decision entity to a free-text
/// target. `Custom` carries caller-supplied relation types verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RelationType {
    Chose,
    Prefers,
    Mentions,
    ChoseOver,
    Constraint,
    Tradeoff,
    RelatesTo,
    Custom(String),
}

impl RelationType {
    /// Wire form, e.g. `CHOSE_OVER`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Chose => "CHOSE",
            Self::Prefers => "PREFERS",
            Self::Mentions => "MENTIONS",
            Self::ChoseOver => "CHOSE_OVER",
            Self::Constraint => "CONSTRAINT",
            Self::Tradeoff => "TRADEOFF",
            Self::RelatesTo => "RELATES_TO",
            Self::Custom(s) => s,
        }
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for RelationType {
    fn from(s: &str) -> Self {
        match s {
            "CHOSE" => Self::Chose,
            "PREFERS" => Self::Prefers,
            "MENTIONS" => Self::Mentions,
            "CHOSE_OVER" => Self::ChoseOver,
            "CONSTRAINT" => Self::Constraint,
            "TRADEOFF" => Self::Tradeoff,
            "RELATES_TO" => Self::RelatesTo,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl Serialize for RelationType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RelationType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct Visitor;
        impl de::Visitor<'_> for Visitor {
            type Value = RelationType;
            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a relation type string")
            }
            fn visit_str<E: de::Error>(self, v: &str) -> Result<RelationType, E> {
                Ok(RelationType::from(v))
            }
        }
        deserializer.deserialize_str(Visitor)
    }
}

/// A graph node mutation: name, type, and ordered observation lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GraphEntity {
    pub name: String,
    #[serde(rename = "entityType")]
    pub entity_type: EntityType,
    pub observations: Vec<String>,
}

/// A graph edge mutation between two node names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GraphRelation {
    pub from: String,
    pub to: String,
    #[serde(rename = "relationType")]
    #[ts(type = "string")]
    pub relation_type: RelationType,
}

impl GraphRelation {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        relation_type: RelationType,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            relation_type,
        }
    }
}
