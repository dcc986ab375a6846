//! Observation queries against `/v2/observation`.

use std::collections::BTreeMap;

use datacommons_core::request::{
    ObservationDate, ObservationFilter, ObservationRequest, ObservationSelector,
};
use datacommons_core::response::ObservationResponse;
use datacommons_core::types::{Observation, ObservationsByVariable};

use crate::client::{Client, Result};

impl Client {
    /// Query observations of statistical variables for entities.
    ///
    /// `variable` and `entity` each select by dcids or by expression; empty
    /// selectors, dates, and filters are left out of the request body
    /// entirely. Results are grouped by variable dcid, then entity dcid, in
    /// response order.
    pub async fn get_observations(
        &self,
        select: &[String],
        variable: ObservationSelector,
        entity: ObservationSelector,
        date: ObservationDate,
        filter: Option<ObservationFilter>,
    ) -> Result<ObservationsByVariable> {
        let request = ObservationRequest {
            select: select.to_vec(),
            variable,
            entity,
            date,
            filter: filter.filter(|f| !f.is_empty()),
        };
        let response: ObservationResponse = self.post("/v2/observation", &request).await?;
        Ok(flatten_observation_response(response))
    }
}

/// Traverse `byVariable[].byEntity[].observations[]`, accumulating records
/// per (variable, entity) pair. Entries without a variable or entity key are
/// skipped, as are points without a value.
fn flatten_observation_response(response: ObservationResponse) -> ObservationsByVariable {
    let mut result: ObservationsByVariable = BTreeMap::new();
    for by_variable in response.by_variable {
        if by_variable.variable.is_empty() {
            continue;
        }
        for by_entity in by_variable.by_entity {
            if by_entity.entity.is_empty() {
                continue;
            }
            for point in by_entity.observations {
                let Some(value) = point.value else {
                    continue;
                };
                result
                    .entry(by_variable.variable.clone())
                    .or_default()
                    .entry(by_entity.entity.clone())
                    .or_default()
                    .push(Observation {
                        date: point.date.unwrap_or_default(),
                        value,
                        provenance_id: point.provenance_id.unwrap_or_default(),
                    });
            }
        }
    }
    result
}
