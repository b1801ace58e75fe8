#![cfg(not(coverage))]

use super::*;
use httpmock::prelude::*;
use serde_json::json;
use std::collections::BTreeSet;

fn dashboard_json(id: i64, title: &str, roles: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "url": format!("https://x/{}", id),
        "allowed_roles": roles
    })
}

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api"))
}

#[tokio::test]
async fn auth_endpoints_round_trip_through_backend_shapes() {
    let server = MockServer::start_async().await;

    let verify = server.mock(|when, then| {
        when.method(POST)
            .path("/api/verify-token")
            .json_body(json!({ "token": "t1" }));
        then.status(200)
            .json_body(json!({ "valid": true, "email": "a@b.com", "role": "admin" }));
    });
    let send = server.mock(|when, then| {
        when.method(POST)
            .path("/api/send-otp")
            .json_body(json!({ "email": "a@b.com" }));
        then.status(200).body("OTP sent");
    });
    let login = server.mock(|when, then| {
        when.method(POST)
            .path("/api/verify-otp")
            .json_body(json!({ "email": "a@b.com", "otp": "123456" }));
        then.status(200).json_body(json!({
            "message": LOGIN_SUCCESS_MESSAGE,
            "token": "t2",
            "role": "user1"
        }));
    });
    let logout = server.mock(|when, then| {
        when.method(POST)
            .path("/api/logout")
            .header("authorization", "Bearer t2");
        then.status(200).json_body(json!({}));
    });

    let api = api_client(&server);

    let verification = api.verify_token("t1").await.unwrap();
    assert!(verification.valid);
    assert_eq!(verification.email.as_deref(), Some("a@b.com"));
    assert_eq!(verification.role, Some(Role::Admin));

    api.send_otp("a@b.com").await.unwrap();

    let response = api.verify_otp("a@b.com", "123456").await.unwrap();
    assert_eq!(response.token.as_deref(), Some("t2"));
    assert_eq!(response.role, Some(Role::User));

    api.logout("t2").await.unwrap();

    verify.assert_hits(1);
    send.assert_hits(1);
    login.assert_hits(1);
    logout.assert_hits(1);
}

#[tokio::test]
async fn invalid_otp_surfaces_as_auth_failure() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/verify-otp");
        then.status(401).json_body(json!({ "message": "Invalid OTP" }));
    });

    let err = api_client(&server)
        .verify_otp("a@b.com", "000000")
        .await
        .unwrap_err();
    assert!(err.is_auth_failure());
    assert_eq!(err.error, "Invalid OTP");
}

#[tokio::test]
async fn dashboard_endpoints_send_bearer_and_bodies() {
    let server = MockServer::start_async().await;

    let list = server.mock(|when, then| {
        when.method(GET)
            .path("/api/dashboards")
            .header("authorization", "Bearer t1");
        then.status(200).json_body(json!([
            dashboard_json(1, "Sales", "[\"user1\"]"),
            dashboard_json(2, "Ops", "")
        ]));
    });
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/api/dashboards")
            .header("authorization", "Bearer t1")
            .json_body(json!({
                "title": "Sales",
                "url": "https://x/1",
                "allowedRoles": ["user1"]
            }));
        then.status(201).json_body(json!({ "id": 1 }));
    });
    let update = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/dashboards/2")
            .header("authorization", "Bearer t1")
            .json_body(json!({
                "title": "Ops v2",
                "url": "https://x/2",
                "allowedRoles": []
            }));
        then.status(200).body("");
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE)
            .path("/api/dashboards/2")
            .header("authorization", "Bearer t1");
        then.status(204);
    });

    let api = api_client(&server);
    api.create_dashboard(
        "t1",
        &DashboardPayload {
            title: "Sales".into(),
            url: "https://x/1".into(),
            allowed_roles: vec!["user1".into()],
        },
    )
    .await
    .unwrap();

    let dashboards = api.list_dashboards("t1").await.unwrap();
    assert_eq!(dashboards.len(), 2);
    assert_eq!(
        dashboards[0].allowed_roles,
        BTreeSet::from(["user1".to_string()])
    );
    assert!(dashboards[1].allowed_roles.is_empty());

    api.update_dashboard(
        "t1",
        2,
        &DashboardPayload {
            title: "Ops v2".into(),
            url: "https://x/2".into(),
            allowed_roles: Vec::new(),
        },
    )
    .await
    .unwrap();
    api.delete_dashboard("t1", 2).await.unwrap();

    list.assert_hits(1);
    create.assert_hits(1);
    update.assert_hits(1);
    delete.assert_hits(1);
}

#[tokio::test]
async fn authorized_calls_without_token_skip_network() {
    let server = MockServer::start_async().await;
    let list = server.mock(|when, then| {
        when.method(GET).path("/api/dashboards");
        then.status(200).json_body(json!([]));
    });
    let logout = server.mock(|when, then| {
        when.method(POST).path("/api/logout");
        then.status(200);
    });

    let api = api_client(&server);
    assert!(api.list_dashboards("").await.unwrap_err().is_auth_failure());
    assert!(api.logout(" ").await.unwrap_err().is_auth_failure());

    list.assert_hits(0);
    logout.assert_hits(0);
}

#[tokio::test]
async fn non_admin_mutation_maps_to_forbidden() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(DELETE).path("/api/dashboards/9");
        then.status(403).json_body(json!({ "error": "Admins only" }));
    });

    let err = api_client(&server)
        .delete_dashboard("t1", 9)
        .await
        .unwrap_err();
    assert_eq!(err.code, ApiError::FORBIDDEN);
    assert_eq!(err.error, "Admins only");
}

#[tokio::test]
async fn transport_failure_maps_to_request_failed() {
    // Nothing listens on the discard port.
    let api = ApiClient::new_with_base_url("http://127.0.0.1:9");
    let err = api.send_otp("a@b.com").await.unwrap_err();
    assert_eq!(err.code, ApiError::REQUEST_FAILED);
}
