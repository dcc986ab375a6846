//! Entity resolution against `/v2/resolve`.

use std::collections::BTreeMap;

use datacommons_core::request::ResolveRequest;
use datacommons_core::response::ResolveResponse;
use datacommons_core::types::ResolvedCandidate;
use datacommons_core::DcError;

use crate::client::{Client, Result};

/// Build a composed resolution expression: follow `from_property` in from the
/// input, then `to_property` out to the target, e.g.
/// `resolve_expression("description", "dcid")` == `"<-description->dcid"`.
pub fn resolve_expression(from_property: &str, to_property: &str) -> String {
    format!("<-{from_property}->{to_property}")
}

impl Client {
    /// Resolve input nodes to knowledge graph dcids.
    ///
    /// `property` is either a single direction-qualified property
    /// (`"<-geoCoordinate"`) or a composed expression from
    /// [`resolve_expression`]. Candidates are grouped by the originating
    /// input node. A candidate without a dcid is a parse failure; a missing
    /// dominant type defaults to the empty string.
    pub async fn resolve(
        &self,
        nodes: &[String],
        property: &str,
    ) -> Result<BTreeMap<String, Vec<ResolvedCandidate>>> {
        let request = ResolveRequest {
            nodes: nodes.to_vec(),
            property: property.to_string(),
        };
        let response: ResolveResponse = self.post("/v2/resolve", &request).await?;
        collect_candidates(response)
    }
}

fn collect_candidates(
    response: ResolveResponse,
) -> Result<BTreeMap<String, Vec<ResolvedCandidate>>> {
    let mut result: BTreeMap<String, Vec<ResolvedCandidate>> = BTreeMap::new();
    for entity in response.entities {
        for candidate in entity.candidates {
            let Some(dcid) = candidate.dcid else {
                return Err(DcError::MissingField {
                    field: "dcid".to_string(),
                    context: format!("resolve candidate for node `{}`", entity.node),
                }
                .into());
            };
            result.entry(entity.node.clone()).or_default().push(ResolvedCandidate {
                dcid,
                dominant_type: candidate.dominant_type.unwrap_or_default(),
            });
        }
    }
    Ok(result)
}
