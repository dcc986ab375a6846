//! Raw wire shapes of the v2 API responses.
//!
//! Every field the API may omit is modeled as `Option` or given a default,
//! so a sparse response deserializes cleanly instead of needing dynamic
//! key-presence checks at each access site. Normalization into the domain
//! types of [`crate::types`] happens in the client crate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ── /v2/node ──────────────────────────────────────────────────────

/// Response of the node property endpoint, keyed by queried dcid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeResponse {
    #[serde(default)]
    pub data: BTreeMap<String, LinkedGraph>,
}

/// Arcs attached to a single node, keyed by property name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkedGraph {
    #[serde(default)]
    pub arcs: BTreeMap<String, ArcNodes>,
}

/// The target nodes of one property arc.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArcNodes {
    #[serde(default)]
    pub nodes: Vec<ArcNode>,
}

/// One endpoint of an arc. Terminal values carry `value`; node-valued arcs
/// carry `dcid` and possibly `name`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArcNode {
    #[serde(rename = "provenanceId", skip_serializing_if = "Option::is_none")]
    pub provenance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dcid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

// ── /v2/observation ───────────────────────────────────────────────

/// Response of the observation endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObservationResponse {
    #[serde(rename = "byVariable", default)]
    pub by_variable: Vec<VariableObservations>,
}

/// Observations of one statistical variable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VariableObservations {
    #[serde(default)]
    pub variable: String,
    #[serde(rename = "byEntity", default)]
    pub by_entity: Vec<EntityObservations>,
}

/// Observations of one variable for one entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityObservations {
    #[serde(default)]
    pub entity: String,
    #[serde(default)]
    pub observations: Vec<ObservationPoint>,
}

/// A single dated data point as it appears on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObservationPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(rename = "provenanceId", skip_serializing_if = "Option::is_none")]
    pub provenance_id: Option<String>,
}

// ── /v2/resolve ───────────────────────────────────────────────────

/// Response of the resolution endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolveResponse {
    #[serde(default)]
    pub entities: Vec<ResolvedEntity>,
}

/// Resolution candidates for one queried input node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolvedEntity {
    #[serde(default)]
    pub node: String,
    #[serde(default)]
    pub candidates: Vec<CandidateEntry>,
}

/// One candidate match. `dcid` is required to build a typed record;
/// `dominantType` may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dcid: Option<String>,
    #[serde(rename = "dominantType", skip_serializing_if = "Option::is_none")]
    pub dominant_type: Option<String>,
}

// ── /v2/sparql ────────────────────────────────────────────────────

/// Response of the structured query endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub header: Vec<String>,
    #[serde(default)]
    pub rows: Vec<QueryResponseRow>,
}

/// One result row; cells align positionally with the header.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryResponseRow {
    #[serde(default)]
    pub cells: Vec<QueryResponseCell>,
}

/// One result cell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryResponseCell {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "provenanceId", skip_serializing_if = "Option::is_none")]
    pub provenance_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_node_response_deserializes() {
        let resp: NodeResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(resp.data.is_empty());

        let resp: NodeResponse = serde_json::from_str(
            r#"{"data": {"geoId/06": {"arcs": {"name": {"nodes": [{"value": "California"}]}}}}}"#,
        )
        .unwrap();
        let nodes = &resp.data["geoId/06"].arcs["name"].nodes;
        assert_eq!(nodes[0].value.as_deref(), Some("California"));
        assert!(nodes[0].provenance_id.is_none());
    }

    #[test]
    fn test_observation_point_tolerates_missing_fields() {
        let point: ObservationPoint =
            serde_json::from_str(r#"{"date": "2021", "value": 39237836.0}"#).unwrap();
        assert_eq!(point.date.as_deref(), Some("2021"));
        assert_eq!(point.value, Some(39237836.0));
        assert!(point.provenance_id.is_none());
    }
}
