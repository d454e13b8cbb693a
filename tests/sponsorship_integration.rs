use brightid_attestation::prelude::*;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CONTEXT_ID: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

fn sponsor_key() -> SigningKeyMaterial {
    SigningKeyMaterial::from_bytes(&[7u8; 32]).unwrap()
}

fn client_for(server: &MockServer) -> BrightIdClient {
    BrightIdClient::builder()
        .base_url(&server.uri())
        .signing_key(sponsor_key())
        .build()
        .unwrap()
}

async fn mount_app(server: &MockServer, status: u16, unused: i64) {
    Mock::given(method("GET"))
        .and(path("/apps/Gitcoin"))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({
            "data": {
                "id": "Gitcoin",
                "name": "Gitcoin",
                "context": "Gitcoin",
                "assignedSponsorships": 100,
                "unusedSponsorships": unused,
                "testing": false
            }
        })))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_operations(server: &MockServer, response: ResponseTemplate, expected: u64) {
    Mock::given(method("POST"))
        .and(path("/operations"))
        .respond_with(response)
        .expect(expected)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_sponsorship_succeeds_with_quota() {
    let server = MockServer::start().await;
    mount_app(&server, 200, 5).await;
    mount_operations(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"data": {"hash": "op-hash-123"}})),
        1,
    )
    .await;

    let outcome = client_for(&server)
        .sponsorships()
        .unwrap()
        .trigger(CONTEXT_ID)
        .await;

    assert_eq!(outcome.status, SponsorshipStatus::Success);
    assert_eq!(outcome.reason, "op-hash-123");
}

#[tokio::test]
async fn test_acknowledgment_without_hash_still_succeeds() {
    let server = MockServer::start().await;
    mount_app(&server, 200, 1).await;
    mount_operations(&server, ResponseTemplate::new(200).set_body_json(json!({"data": {}})), 1).await;

    let outcome = client_for(&server)
        .sponsorships()
        .unwrap()
        .trigger(CONTEXT_ID)
        .await;

    assert!(outcome.is_success());
    assert_eq!(outcome.reason, "sponsorship submitted");
}

#[tokio::test]
async fn test_no_sponsorships_left_skips_submission() {
    let server = MockServer::start().await;
    mount_app(&server, 200, 0).await;
    mount_operations(&server, ResponseTemplate::new(200), 0).await;

    let outcome = client_for(&server)
        .sponsorships()
        .unwrap()
        .trigger(CONTEXT_ID)
        .await;

    assert_eq!(outcome, SponsorshipOutcome::error("no available sponsorships"));
}

#[tokio::test]
async fn test_quota_failure_skips_submission() {
    let server = MockServer::start().await;
    mount_app(&server, 500, 5).await;
    mount_operations(&server, ResponseTemplate::new(200), 0).await;

    let outcome = client_for(&server)
        .sponsorships()
        .unwrap()
        .trigger(CONTEXT_ID)
        .await;

    assert_eq!(outcome.status, SponsorshipStatus::Error);
    assert_eq!(outcome.reason, "quota check failed");
}

#[tokio::test]
async fn test_rejected_submission_fails() {
    let server = MockServer::start().await;
    mount_app(&server, 200, 5).await;
    mount_operations(
        &server,
        ResponseTemplate::new(403).set_body_json(json!({
            "error": true,
            "errorNum": 7,
            "errorMessage": "app has no unused sponsorships"
        })),
        1,
    )
    .await;

    let outcome = client_for(&server)
        .sponsorships()
        .unwrap()
        .trigger(CONTEXT_ID)
        .await;

    assert_eq!(outcome.status, SponsorshipStatus::Fail);
    assert_eq!(outcome.reason, "sponsorship submission failed");
}

#[tokio::test]
async fn test_posted_operation_is_signed_canonically() {
    let server = MockServer::start().await;
    mount_app(&server, 200, 5).await;
    mount_operations(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"data": {"hash": "h"}})),
        1,
    )
    .await;

    let client = client_for(&server);
    assert!(client.sponsorships().unwrap().trigger(CONTEXT_ID).await.is_success());

    let requests = server.received_requests().await.unwrap();
    let post = requests
        .iter()
        .find(|r| r.method.as_str() == "POST")
        .unwrap();
    let body: Value = serde_json::from_slice(&post.body).unwrap();

    let keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["name", "app", "contextId", "timestamp", "v", "sig"]);
    assert_eq!(body["name"], "Sponsor");
    assert_eq!(body["app"], "Gitcoin");
    assert_eq!(body["contextId"], CONTEXT_ID);
    assert_eq!(body["v"], 5);
    assert!(body["timestamp"].as_i64().unwrap() > 1_600_000_000_000);

    let message = canonicalize(&body).unwrap();
    let signature = body["sig"].as_str().unwrap();
    assert!(verify_detached(&message, signature, &sponsor_key().verifying_key()));

    let other = SigningKeyMaterial::from_bytes(&[8u8; 32]).unwrap();
    assert!(!verify_detached(&message, signature, &other.verifying_key()));
}

#[tokio::test]
async fn test_submit_bypasses_quota() {
    let server = MockServer::start().await;
    mount_operations(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"data": {"hash": "h"}})),
        1,
    )
    .await;

    let receipt = client_for(&server)
        .sponsorships()
        .unwrap()
        .submit(CONTEXT_ID)
        .await
        .unwrap();

    assert!(receipt.accepted);
    assert_eq!(receipt.operation_hash.as_deref(), Some("h"));
}

#[tokio::test]
async fn test_app_info_reads_counters() {
    let server = MockServer::start().await;
    mount_app(&server, 200, 42).await;

    let client = client_for(&server);
    let app = client.quota().app_info(client.app()).await.unwrap();

    assert_eq!(app.unused_sponsorships, Some(42));
    assert_eq!(app.assigned_sponsorships, Some(100));
    assert_eq!(app.testing, Some(false));
}

#[tokio::test]
async fn test_unreachable_node_reports_quota_failure() {
    let client = BrightIdClient::builder()
        .base_url("http://127.0.0.1:1")
        .signing_key(sponsor_key())
        .build()
        .unwrap();

    let outcome = client.sponsorships().unwrap().trigger(CONTEXT_ID).await;

    assert_eq!(outcome, SponsorshipOutcome::error("quota check failed"));
}
