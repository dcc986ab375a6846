//! Domain types for the Data Commons knowledge graph.
//!
//! These are the normalized values returned to callers; the raw wire shapes
//! live in [`crate::response`]. Everything here is an owned value object built
//! fresh from a single response.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ── Arcs ──────────────────────────────────────────────────────────

/// Direction of a property arc lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcDirection {
    /// Outgoing arcs (`->`): properties of the node.
    Out,
    /// Incoming arcs (`<-`): nodes pointing at this one.
    In,
}

impl ArcDirection {
    /// The wire token that prefixes a property expression.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Out => "->",
            Self::In => "<-",
        }
    }
}

/// A single property value attached to a node, with its source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyValue {
    #[serde(rename = "provenanceId")]
    pub provenance_id: String,
    pub value: String,
}

// ── Observations ──────────────────────────────────────────────────

/// A single statistical observation of a variable for an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Observation date as reported by the API (e.g. `"2021"`, `"2021-06"`).
    pub date: String,
    pub value: f64,
    #[serde(rename = "provenanceId")]
    pub provenance_id: String,
}

/// Observations grouped first by variable dcid, then by entity dcid,
/// in response order.
pub type ObservationsByVariable = BTreeMap<String, BTreeMap<String, Vec<Observation>>>;

// ── Entity resolution ─────────────────────────────────────────────

/// A candidate match returned by the resolution endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedCandidate {
    /// The dcid the input resolved to.
    pub dcid: String,
    /// Dominant entity type of the candidate; empty when the API omits it.
    #[serde(rename = "dominantType", default)]
    pub dominant_type: String,
}

// ── Structured queries ────────────────────────────────────────────

/// One result row: header label to cell value. Columns whose cell was
/// absent in the response do not appear in the map.
pub type QueryRow = BTreeMap<String, String>;

/// Tabular result of a SPARQL query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResult {
    /// Column labels, in the order the API returned them.
    pub header: Vec<String>,
    /// Rows in response order; each keyed by header label.
    pub rows: Vec<QueryRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_tokens() {
        assert_eq!(ArcDirection::Out.token(), "->");
        assert_eq!(ArcDirection::In.token(), "<-");
    }

    #[test]
    fn test_property_value_wire_names() {
        let pv = PropertyValue {
            provenance_id: "p1".to_string(),
            value: "California".to_string(),
        };
        let json = serde_json::to_value(&pv).unwrap();
        assert_eq!(json["provenanceId"], "p1");
        assert_eq!(json["value"], "California");
    }
}
