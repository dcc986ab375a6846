//! Structured queries against `/v2/sparql`.

use datacommons_core::request::QueryRequest;
use datacommons_core::response::QueryResponse;
use datacommons_core::types::{QueryResult, QueryRow};

use crate::client::{Client, Result};

impl Client {
    /// Run a SPARQL query and reconstruct the tabular result.
    ///
    /// Cells align positionally with the header; a row shorter than the
    /// header simply lacks the trailing columns in its mapping.
    pub async fn query(&self, query: &str) -> Result<QueryResult> {
        let request = QueryRequest {
            query: query.to_string(),
        };
        let response: QueryResponse = self.post("/v2/sparql", &request).await?;
        Ok(rebuild_table(response))
    }
}

fn rebuild_table(response: QueryResponse) -> QueryResult {
    let rows = response
        .rows
        .into_iter()
        .map(|row| {
            response
                .header
                .iter()
                .zip(row.cells)
                .filter_map(|(label, cell)| cell.value.map(|v| (label.clone(), v)))
                .collect::<QueryRow>()
        })
        .collect();
    QueryResult {
        header: response.header,
        rows,
    }
}
