//! Long-running operation polling against a mock Resource Manager.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use arm_client::client::Client;
use arm_client::lifecycle::{Context, DoneReason};
use arm_client::pollers::{PollingError, PollingStatus};
use reqwest::Method;
use serde_json::json;

mod common;
use common::{start_mock_arm, test_config, MockResponse};

const VNET_ID: &str =
    "/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/rg1/providers/Microsoft.Network/virtualNetworks/vnet1";
const API_VERSION: &str = "2023-05-01";

/// PUT answered with 201 + Azure-AsyncOperation; the operation reports
/// `statuses` in turn; the resource GET returns the final body.
async fn async_operation_server(statuses: Vec<serde_json::Value>) -> common::MockServer {
    let polls = Arc::new(AtomicU32::new(0));
    start_mock_arm(move |req| match (req.method.as_str(), req.path.as_str()) {
        ("PUT", _) => MockResponse::json(
            201,
            json!({"name": "vnet1", "properties": {"provisioningState": "Updating"}}),
        )
        .header(
            "Azure-AsyncOperation",
            format!("{}/operations/op1?api-version={API_VERSION}", req.base_url()),
        )
        .header("Retry-After", "0"),
        ("GET", path) if path.starts_with("/operations/op1") => {
            let n = polls.fetch_add(1, Ordering::SeqCst) as usize;
            let status = statuses
                .get(n)
                .or(statuses.last())
                .cloned()
                .unwrap_or_else(|| json!({"status": "InProgress"}));
            MockResponse::json(200, status).header("Retry-After", "0")
        }
        ("GET", _) => MockResponse::json(
            200,
            json!({"name": "vnet1", "properties": {"provisioningState": "Succeeded"}}),
        ),
        _ => MockResponse::empty(400),
    })
    .await
}

#[tokio::test]
async fn test_async_operation_polls_until_succeeded() {
    let server = async_operation_server(vec![
        json!({"status": "InProgress"}),
        json!({"status": "InProgress"}),
        json!({"status": "Succeeded"}),
    ])
    .await;
    let client = Client::new(&test_config(&server)).unwrap();

    let result = client
        .create_or_update_then_poll(&Context::new(), VNET_ID, API_VERSION, &json!({"location": "westeurope"}))
        .await
        .unwrap()
        .expect("final resource");

    assert_eq!(server.count("GET", "/operations/op1"), 3);
    assert_eq!(result["properties"]["provisioningState"], "Succeeded");
    assert_eq!(server.count("GET", VNET_ID), 1);
}

#[tokio::test]
async fn test_async_operation_failure_returns_embedded_error() {
    let server = async_operation_server(vec![
        json!({"status": "InProgress"}),
        json!({"status": "Failed", "error": {"code": "InUseSubnetCannotBeDeleted", "message": "subnet in use"}}),
    ])
    .await;
    let client = Client::new(&test_config(&server)).unwrap();

    let err = client
        .create_or_update_then_poll(&Context::new(), VNET_ID, API_VERSION, &json!({}))
        .await
        .unwrap_err();

    match &err {
        PollingError::Failed { error: Some(detail) } => {
            assert_eq!(detail.code, "InUseSubnetCannotBeDeleted");
        }
        other => panic!("expected a failed operation, got {other:?}"),
    }
    assert!(err.to_string().contains("subnet in use"));
    assert_eq!(server.count("GET", VNET_ID), 0);
}

#[tokio::test]
async fn test_poller_reports_latest_status() {
    let server = async_operation_server(vec![json!({"status": "Canceled"})]).await;
    let client = Client::new(&test_config(&server)).unwrap();
    let ctx = Context::new();

    let response = client
        .create_or_update(&ctx, VNET_ID, API_VERSION, &json!({}))
        .await
        .unwrap();
    let mut poller = client.poller_for(&Method::PUT, &response).unwrap();
    assert_eq!(poller.name(), "azure_async_operation");

    let err = poller.poll_until_done(&ctx).await.unwrap_err();
    assert!(matches!(err, PollingError::Canceled { .. }));
    assert_eq!(poller.latest_status(), Some(PollingStatus::Canceled));
}

#[tokio::test]
async fn test_location_post_returns_result_body() {
    let polls = Arc::new(AtomicU32::new(0));
    let server = start_mock_arm(move |req| match req.method.as_str() {
        "POST" => MockResponse::empty(202)
            .header("Location", format!("{}/results/r1?api-version=2023-05-01", req.base_url()))
            .header("Retry-After", "0"),
        _ => {
            if polls.fetch_add(1, Ordering::SeqCst) == 0 {
                MockResponse::empty(202).header("Retry-After", "0")
            } else {
                MockResponse::json(200, json!({"keys": [{"keyName": "key1"}]}))
            }
        }
    })
    .await;
    let client = Client::new(&test_config(&server)).unwrap();

    let result = client
        .post_then_poll(&Context::new(), &format!("{VNET_ID}/listKeys"), API_VERSION, None)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(result["keys"][0]["keyName"], "key1");
    assert_eq!(server.count("GET", "/results/r1"), 2);
}

#[tokio::test]
async fn test_provisioning_state_polled_on_resource() {
    let gets = Arc::new(AtomicU32::new(0));
    let server = start_mock_arm(move |req| match req.method.as_str() {
        "PUT" => MockResponse::json(200, json!({"properties": {"provisioningState": "Creating"}})),
        _ => {
            let state = if gets.fetch_add(1, Ordering::SeqCst) < 1 {
                "Updating"
            } else {
                "Succeeded"
            };
            MockResponse::json(200, json!({"name": "vnet1", "properties": {"provisioningState": state}}))
                .header("Retry-After", "0")
        }
    })
    .await;
    let client = Client::new(&test_config(&server)).unwrap();

    let result = client
        .create_or_update_then_poll(&Context::new(), VNET_ID, API_VERSION, &json!({}))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(result["name"], "vnet1");
    assert_eq!(server.count("GET", VNET_ID), 2);
}

#[tokio::test]
async fn test_synchronous_put_needs_no_polling() {
    let server = start_mock_arm(|_| {
        MockResponse::json(200, json!({"name": "vnet1", "properties": {"provisioningState": "Succeeded"}}))
    })
    .await;
    let client = Client::new(&test_config(&server)).unwrap();

    let result = client
        .create_or_update_then_poll(&Context::new(), VNET_ID, API_VERSION, &json!({}))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(result["name"], "vnet1");
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn test_delete_polls_until_not_found() {
    let gets = Arc::new(AtomicU32::new(0));
    let server = start_mock_arm(move |req| match req.method.as_str() {
        "DELETE" => MockResponse::empty(202),
        _ => {
            if gets.fetch_add(1, Ordering::SeqCst) < 2 {
                MockResponse::json(200, json!({"name": "vnet1"}))
            } else {
                MockResponse::json(404, json!({"error": {"code": "ResourceNotFound", "message": "gone"}}))
            }
        }
    })
    .await;
    let client = Client::new(&test_config(&server)).unwrap();

    client
        .delete_then_poll(&Context::new(), VNET_ID, API_VERSION)
        .await
        .unwrap();

    assert_eq!(server.count("DELETE", VNET_ID), 1);
    assert_eq!(server.count("GET", VNET_ID), 3);
}

#[tokio::test]
async fn test_cancellation_stops_polling_promptly() {
    let server = start_mock_arm(|req| match req.method.as_str() {
        "PUT" => MockResponse::empty(202)
            .header("Azure-AsyncOperation", format!("{}/operations/slow", req.base_url()))
            .header("Retry-After", "0"),
        _ => MockResponse::json(200, json!({"status": "InProgress"})).header("Retry-After", "60"),
    })
    .await;
    let client = Client::new(&test_config(&server)).unwrap();

    let ctx = Context::new();
    let canceller = ctx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        canceller.cancel();
    });

    let started = Instant::now();
    let err = client
        .create_or_update_then_poll(&ctx, VNET_ID, API_VERSION, &json!({}))
        .await
        .unwrap_err();

    assert!(matches!(err, PollingError::ContextDone(DoneReason::Cancelled)));
    assert!(started.elapsed() < Duration::from_secs(10));
    assert_eq!(server.count("GET", "/operations/slow"), 1);
}

#[tokio::test]
async fn test_polling_deadline() {
    let server = start_mock_arm(|req| match req.method.as_str() {
        "PUT" => MockResponse::empty(202)
            .header("Location", format!("{}/operations/never", req.base_url()))
            .header("Retry-After", "0"),
        _ => MockResponse::empty(202).header("Retry-After", "1"),
    })
    .await;
    let client = Client::new(&test_config(&server)).unwrap();

    let ctx = Context::new().with_timeout(Duration::from_millis(300));
    let err = client
        .create_or_update_then_poll(&ctx, VNET_ID, API_VERSION, &json!({}))
        .await
        .unwrap_err();

    assert!(matches!(err, PollingError::ContextDone(DoneReason::DeadlineExceeded)));
}

/// PUT answered with 202 + Azure-AsyncOperation; each operation poll plays
/// the next step of `script`, where `None` drops the connection.
async fn flaky_operation_server(script: Vec<Option<serde_json::Value>>) -> common::MockServer {
    let polls = Arc::new(AtomicU32::new(0));
    start_mock_arm(move |req| match req.method.as_str() {
        "PUT" => MockResponse::empty(202)
            .header("Azure-AsyncOperation", format!("{}/operations/flaky", req.base_url()))
            .header("Retry-After", "0"),
        _ if req.path.starts_with("/operations/flaky") => {
            let n = polls.fetch_add(1, Ordering::SeqCst) as usize;
            match script.get(n).cloned().flatten() {
                Some(body) => MockResponse::json(200, body).header("Retry-After", "0"),
                None => MockResponse::hang_up(),
            }
        }
        _ => MockResponse::json(200, json!({"name": "vnet1"})),
    })
    .await
}

/// One attempt per request, so every drop reaches the poller.
fn single_attempt_client(server: &common::MockServer, max_dropped: u32) -> Client {
    let mut config = test_config(server);
    config.retries.max_attempts = 1;
    config.polling.max_dropped_connections = max_dropped;
    Client::new(&config).unwrap()
}

#[tokio::test]
async fn test_dropped_connections_within_limit_are_tolerated() {
    let server = flaky_operation_server(vec![None, None, None, Some(json!({"status": "Succeeded"}))]).await;
    let client = single_attempt_client(&server, 3);

    let result = client
        .create_or_update_then_poll(&Context::new(), VNET_ID, API_VERSION, &json!({}))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(result["name"], "vnet1");
    assert_eq!(server.count("GET", "/operations/flaky"), 4);
}

#[tokio::test]
async fn test_too_many_dropped_connections_fail() {
    let server = flaky_operation_server(vec![None, None, None, None, Some(json!({"status": "Succeeded"}))]).await;
    let client = single_attempt_client(&server, 3);

    let err = client
        .create_or_update_then_poll(&Context::new(), VNET_ID, API_VERSION, &json!({}))
        .await
        .unwrap_err();

    match err {
        PollingError::Client(e) => assert!(e.is_transport(), "expected a transport error, got {e:?}"),
        other => panic!("expected a client error, got {other:?}"),
    }
    assert_eq!(server.count("GET", "/operations/flaky"), 4);
}

#[tokio::test]
async fn test_dropped_connection_count_resets_after_a_poll() {
    let server = flaky_operation_server(vec![
        None,
        None,
        Some(json!({"status": "InProgress"})),
        None,
        None,
        Some(json!({"status": "Succeeded"})),
    ])
    .await;
    let client = single_attempt_client(&server, 2);

    client
        .create_or_update_then_poll(&Context::new(), VNET_ID, API_VERSION, &json!({}))
        .await
        .unwrap();

    assert_eq!(server.count("GET", "/operations/flaky"), 6);
}
