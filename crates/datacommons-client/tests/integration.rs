//! Integration tests against the live Data Commons API.
//!
//! These tests require a valid key in `DC_API_KEY`.
//! Run with: cargo test --package datacommons-client --test integration -- --ignored
//!
//! Skipped automatically if no key is configured.

use datacommons_client::{ApiError, Client};
use datacommons_core::request::{ObservationDate, ObservationSelector};
use datacommons_core::types::ArcDirection;

fn client_or_skip() -> Option<Client> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    match Client::from_env() {
        Ok(client) => Some(client),
        Err(e) => {
            eprintln!("Skipping integration test (no API key configured): {e}");
            None
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
#[ignore = "requires live Data Commons API — run with: cargo test --package datacommons-client --test integration -- --ignored"]
async fn test_get_property_values_live() -> anyhow::Result<()> {
    let Some(client) = client_or_skip() else {
        return Ok(());
    };

    let result = client
        .get_property_values(&strings(&["geoId/06"]), ArcDirection::Out, &strings(&["name"]))
        .await?;

    let values = &result["geoId/06"];
    assert!(values.iter().any(|v| v.value == "California"));
    Ok(())
}

#[tokio::test]
#[ignore = "requires live Data Commons API — run with: cargo test --package datacommons-client --test integration -- --ignored"]
async fn test_get_observations_live() -> anyhow::Result<()> {
    let Some(client) = client_or_skip() else {
        return Ok(());
    };

    let result = client
        .get_observations(
            &strings(&["variable", "entity", "date", "value"]),
            ObservationSelector::dcids(["Count_Person"]),
            ObservationSelector::dcids(["geoId/06"]),
            ObservationDate::from("2021"),
            None,
        )
        .await?;

    let observations = &result["Count_Person"]["geoId/06"];
    assert!(!observations.is_empty());
    assert_eq!(observations[0].date, "2021");
    Ok(())
}

#[tokio::test]
#[ignore = "requires live Data Commons API — run with: cargo test --package datacommons-client --test integration -- --ignored"]
async fn test_resolve_live() -> anyhow::Result<()> {
    let Some(client) = client_or_skip() else {
        return Ok(());
    };

    let result = client
        .resolve(
            &strings(&["Mountain View, CA"]),
            &datacommons_client::resolve_expression("description", "dcid"),
        )
        .await?;

    let candidates = &result["Mountain View, CA"];
    assert!(candidates.iter().any(|c| c.dcid == "geoId/0649670"));
    Ok(())
}

#[tokio::test]
#[ignore = "requires live Data Commons API — run with: cargo test --package datacommons-client --test integration -- --ignored"]
async fn test_query_live() -> anyhow::Result<()> {
    let Some(client) = client_or_skip() else {
        return Ok(());
    };

    let result = client
        .query(
            "SELECT ?name WHERE { ?state typeOf State . ?state dcid \"geoId/06\" . ?state name ?name }",
        )
        .await?;

    assert_eq!(result.header, vec!["?name"]);
    assert!(result.rows.iter().any(|row| row["?name"] == "California"));
    Ok(())
}

#[tokio::test]
#[ignore = "requires live Data Commons API — run with: cargo test --package datacommons-client --test integration -- --ignored"]
async fn test_bad_key_yields_status_error() {
    let Some(live) = client_or_skip() else {
        return;
    };

    // Same endpoint, deliberately invalid key: the failure must surface as a
    // typed status error, not an empty result.
    let mut config = live.config().clone();
    config.api_key = "invalid-key".to_string();
    let client = Client::new(config).unwrap();

    let err = client
        .get_property_values(&strings(&["geoId/06"]), ArcDirection::Out, &strings(&["name"]))
        .await
        .unwrap_err();

    match err {
        ApiError::Status { status, .. } => assert!(status == 401 || status == 403),
        other => panic!("expected status error, got: {other}"),
    }
}
