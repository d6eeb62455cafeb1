//! Integration tests against a running service instance.
//!
//! All tests are ignored by default; start the service and run:
//! cargo test --test live_api -- --ignored

use aero_core::{Coord, FamilyParams, RunwayType, SurfaceDefinitionRequest};
use aero_sdk::client::ProfileUpdate;
use aero_sdk::AeroClient;

fn service_url() -> String {
    std::env::var("AERO_TEST_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".to_string())
}

fn unique_username() -> String {
    format!("sdk-test-{}", chrono::Utc::now().timestamp_micros())
}

fn ols_request(airport: &str) -> SurfaceDefinitionRequest {
    SurfaceDefinitionRequest {
        name: "RWY 09/27".to_string(),
        airport_name: airport.to_string(),
        t1: Coord {
            lat: 51.464901,
            lon: -0.486772,
            alt: 22.86,
        },
        t2: Coord {
            lat: 51.465,
            lon: -0.434075,
            alt: 23.47,
        },
        arp_alt_m: 25.3,
        params: FamilyParams::Ols {
            runway_type: RunwayType::Precision,
        },
    }
}

#[tokio::test]
#[ignore]
async fn test_register_login_and_profile_roundtrip() {
    let mut client = AeroClient::new(service_url());
    let username = unique_username();

    client
        .register(&username, "hunter2hunter2", false)
        .await
        .expect("register");
    client
        .login(&username, "hunter2hunter2")
        .await
        .expect("login");
    assert!(client.token().is_some());

    let account = client.me().await.expect("profile");
    assert_eq!(account.username, username);
    assert!(!account.is_premium);

    let email = format!("{}@example.com", username);
    let updated = client
        .update_profile(&ProfileUpdate {
            email: Some(email.clone()),
            password: None,
        })
        .await
        .expect("profile update");
    assert_eq!(updated.email.as_deref(), Some(email.as_str()));
}

#[tokio::test]
#[ignore]
async fn test_guest_create_and_analyze() {
    let client = AeroClient::new(service_url());
    let surface = client
        .create_surface(&ols_request("EGLL"))
        .await
        .expect("create surface");
    assert!(!surface.geometry.is_empty());

    let result = client
        .analyze(
            Coord {
                lat: 51.475,
                lon: -0.44,
                alt: 50.0,
            },
            &aero_core::AnalysisTarget::Surface {
                surface_id: surface.id.clone(),
            },
        )
        .await
        .expect("analyze");
    assert_eq!(result.penetration, result.margin < 0.0);
    assert!(!result.all_surfaces.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_quota_refusal_reaches_client_verbatim() {
    let mut client = AeroClient::new(service_url());
    let username = unique_username();
    client
        .register(&username, "hunter2hunter2", false)
        .await
        .expect("register");
    client
        .login(&username, "hunter2hunter2")
        .await
        .expect("login");

    client
        .create_surface(&ols_request("AP-0"))
        .await
        .expect("first airport accepted");
    // Free accounts hold one airport grouping; a second name must be refused
    let refusal = client.create_surface(&ols_request("AP-1")).await;
    match refusal {
        Err(aero_sdk::SdkError::Service { detail, .. }) => assert!(!detail.is_empty()),
        other => panic!("expected a service refusal, got {:?}", other.map(|s| s.id)),
    }
}

#[tokio::test]
#[ignore]
async fn test_audit_log_roundtrip() {
    let mut client = AeroClient::new(service_url());
    let username = unique_username();
    client
        .register(&username, "hunter2hunter2", true)
        .await
        .expect("register premium");
    client
        .login(&username, "hunter2hunter2")
        .await
        .expect("login");

    let entry = aero_core::AuditLogEntry {
        timestamp: chrono::Utc::now(),
        airport_name: "EGLL".to_string(),
        owner: aero_core::Owner::Account(1),
        lat: 51.475,
        lon: -0.44,
        alt: 50.0,
        limiting_surface: "Approach".to_string(),
        margin: -5.0,
        penetration: true,
    };
    client.append_audit(&entry).await.expect("append audit");

    let entries = client.read_audit().await.expect("read audit");
    assert!(entries
        .iter()
        .any(|e| e.airport_name == "EGLL" && e.limiting_surface == "Approach" && e.penetration));
}

#[tokio::test]
#[ignore]
async fn test_public_surface_search_is_open() {
    let client = AeroClient::new(service_url());
    // Works without any credential; an empty result set is acceptable
    client
        .search_public_surfaces("heathrow")
        .await
        .expect("public search");
}
