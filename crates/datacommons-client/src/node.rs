//! Node property lookups against `/v2/node`.

use std::collections::BTreeMap;

use datacommons_core::request::NodeRequest;
use datacommons_core::response::NodeResponse;
use datacommons_core::types::{ArcDirection, PropertyValue};

use crate::client::{Client, Result};

/// Build a direction-qualified property expression.
///
/// A single property is appended bare (`"->name"`); several are joined in a
/// bracketed list (`"->[name,latitude]"`).
pub fn property_expression(direction: ArcDirection, properties: &[String]) -> String {
    match properties {
        [single] => format!("{}{}", direction.token(), single),
        _ => format!("{}[{}]", direction.token(), properties.join(",")),
    }
}

impl Client {
    /// Look up property values for a set of nodes.
    ///
    /// Returns a flattened mapping of node dcid to the values found across
    /// the returned arcs, in response order. Nodes the API returned nothing
    /// for are absent from the map.
    pub async fn get_property_values(
        &self,
        nodes: &[String],
        direction: ArcDirection,
        properties: &[String],
    ) -> Result<BTreeMap<String, Vec<PropertyValue>>> {
        let request = NodeRequest {
            nodes: nodes.to_vec(),
            property: property_expression(direction, properties),
        };
        let response: NodeResponse = self.post("/v2/node", &request).await?;
        Ok(flatten_node_response(response))
    }
}

/// Walk `data.<dcid>.arcs.<property>.nodes[]`, keeping arc nodes that carry
/// both a provenance and a value.
fn flatten_node_response(response: NodeResponse) -> BTreeMap<String, Vec<PropertyValue>> {
    let mut result: BTreeMap<String, Vec<PropertyValue>> = BTreeMap::new();
    for (dcid, graph) in response.data {
        for (_property, arc) in graph.arcs {
            for node in arc.nodes {
                let (Some(provenance_id), Some(value)) = (node.provenance_id, node.value) else {
                    continue;
                };
                result
                    .entry(dcid.clone())
                    .or_default()
                    .push(PropertyValue { provenance_id, value });
            }
        }
    }
    result
}
