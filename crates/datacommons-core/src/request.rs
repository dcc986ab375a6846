//! Request bodies for the v2 API endpoints.
//!
//! Each endpoint has one fixed request shape. The API treats absent and empty
//! fields differently, so optional members are skipped entirely when empty
//! rather than serialized as `""` or `[]`.

use serde::{Deserialize, Serialize};

// ── /v2/node ──────────────────────────────────────────────────────

/// Property lookup over a set of nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRequest {
    pub nodes: Vec<String>,
    /// Direction-qualified property expression, e.g. `"->name"` or
    /// `"->[name,latitude]"`.
    pub property: String,
}

// ── /v2/observation ───────────────────────────────────────────────

/// Selects nodes on one axis of an observation query, either by explicit
/// dcids or by a graph expression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationSelector {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dcids: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub expression: String,
}

impl ObservationSelector {
    pub fn dcids(dcids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            dcids: dcids.into_iter().map(Into::into).collect(),
            expression: String::new(),
        }
    }

    pub fn expression(expression: impl Into<String>) -> Self {
        Self {
            dcids: Vec::new(),
            expression: expression.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dcids.is_empty() && self.expression.is_empty()
    }
}

/// Date constraint on an observation query.
///
/// Serialized untagged: a single date as a string, several as a list, and
/// [`ObservationDate::All`] by omitting the field entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObservationDate {
    /// No date constraint; the field is left out of the request.
    #[default]
    All,
    Single(String),
    Multiple(Vec<String>),
}

impl ObservationDate {
    /// True when no usable constraint is present; such dates are omitted.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::All => true,
            Self::Single(d) => d.is_empty(),
            Self::Multiple(dates) => dates.is_empty(),
        }
    }
}

impl From<&str> for ObservationDate {
    fn from(date: &str) -> Self {
        if date.is_empty() {
            Self::All
        } else {
            Self::Single(date.to_string())
        }
    }
}

impl From<Vec<String>> for ObservationDate {
    fn from(dates: Vec<String>) -> Self {
        if dates.is_empty() {
            Self::All
        } else {
            Self::Multiple(dates)
        }
    }
}

/// Facet-level filter on an observation query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationFilter {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub facet_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub domains: Vec<String>,
}

impl ObservationFilter {
    pub fn is_empty(&self) -> bool {
        self.facet_ids.is_empty() && self.domains.is_empty()
    }
}

/// Observation query over variables and entities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationRequest {
    /// Columns to return, e.g. `["variable", "entity", "date", "value"]`.
    pub select: Vec<String>,
    #[serde(default, skip_serializing_if = "ObservationSelector::is_empty")]
    pub variable: ObservationSelector,
    #[serde(default, skip_serializing_if = "ObservationSelector::is_empty")]
    pub entity: ObservationSelector,
    #[serde(default, skip_serializing_if = "ObservationDate::is_empty")]
    pub date: ObservationDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<ObservationFilter>,
}

// ── /v2/resolve ───────────────────────────────────────────────────

/// Entity resolution request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveRequest {
    pub nodes: Vec<String>,
    /// Either a single direction-qualified property (`"<-description"`) or a
    /// composed from/to expression (`"<-description->dcid"`).
    pub property: String,
}

// ── /v2/sparql ────────────────────────────────────────────────────

/// Structured query request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}
