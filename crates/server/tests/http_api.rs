use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use configs::DatabaseConfig;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use server::{build_app, connect_and_migrate, ServerState};

/// App backed by its own throwaway SQLite file.
async fn test_app() -> anyhow::Result<Router> {
    let path = std::env::temp_dir().join(format!("cmms-http-{}.db", Uuid::new_v4()));
    let cfg = DatabaseConfig { url: format!("sqlite://{}?mode=rwc", path.display()), ..DatabaseConfig::default() };
    let db = connect_and_migrate(&cfg).await?;
    Ok(build_app(ServerState::new(db)))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder.header("content-type", "application/json").body(Body::from(v.to_string()))?,
        None => builder.body(Body::empty())?,
    };
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap_or(Value::Null) };
    Ok((status, json))
}

async fn create_org(app: &Router, name: &str) -> anyhow::Result<String> {
    let (status, org) = send(app, "POST", "/v1/organizations", Some(json!({ "name": name }))).await?;
    assert_eq!(status, StatusCode::CREATED);
    Ok(org["id"].as_str().unwrap_or_default().to_string())
}

#[tokio::test]
async fn health_pings_the_database() -> anyhow::Result<()> {
    let app = test_app().await?;
    let (status, body) = send(&app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
    Ok(())
}

#[tokio::test]
async fn asset_create_rename_delete_then_not_found() -> anyhow::Result<()> {
    let app = test_app().await?;
    let org = create_org(&app, "Acme").await?;

    let (status, created) = send(
        &app,
        "POST",
        "/v1/assets",
        Some(json!({ "organization_id": org, "name": "Pump A", "serial_number": "P-100" })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Pump A");
    assert_eq!(created["created_at"], created["updated_at"]);
    let id = created["id"].as_str().unwrap_or_default().to_string();

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let (status, renamed) = send(&app, "PATCH", &format!("/v1/assets/{id}"), Some(json!({ "name": "Pump B" }))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(renamed["name"], "Pump B");
    assert_eq!(renamed["serial_number"], "P-100");
    assert_eq!(renamed["created_at"], created["created_at"]);
    assert_ne!(renamed["updated_at"], created["updated_at"]);

    let (status, fetched) = send(&app, "GET", &format!("/v1/assets/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Pump B");

    let (status, deleted) = send(&app, "DELETE", &format!("/v1/assets/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["name"], "Pump B");

    let (status, body) = send(&app, "GET", &format!("/v1/assets/{id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let (status, _) = send(&app, "PATCH", &format!("/v1/assets/{id}"), Some(json!({ "name": "Pump C" }))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "DELETE", &format!("/v1/assets/{id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn invalid_payloads_are_rejected_before_the_service() -> anyhow::Result<()> {
    let app = test_app().await?;
    let org = create_org(&app, "Acme").await?;

    let (status, body) = send(&app, "POST", "/v1/assets", Some(json!({ "organization_id": org, "name": "" }))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["details"]["name"].is_array());

    let (status, body) =
        send(&app, "POST", "/v1/users", Some(json!({ "organization_id": org, "email": "not-an-email", "name": "X" }))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["details"]["email"].is_array());

    let (status, body) = send(&app, "POST", "/v1/assets", Some(json!({ "name": "no org" }))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let req = Request::builder()
        .method("POST")
        .uri("/v1/assets")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))?;
    let resp = app.clone().oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        "POST",
        "/v1/work-orders",
        Some(json!({ "organization_id": org, "title": "Fix", "priority": "urgent" })),
    )
    .await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["message"].as_str().unwrap_or_default().contains("priority"));
    Ok(())
}

#[tokio::test]
async fn listing_filters_by_organization_and_pages() -> anyhow::Result<()> {
    let app = test_app().await?;
    let acme = create_org(&app, "Acme").await?;
    let globex = create_org(&app, "Globex").await?;

    for i in 0..3 {
        let body = json!({ "organization_id": acme, "name": format!("Area {i}") });
        assert_eq!(send(&app, "POST", "/v1/locations", Some(body)).await?.0, StatusCode::CREATED);
    }
    let body = json!({ "organization_id": globex, "name": "Elsewhere" });
    assert_eq!(send(&app, "POST", "/v1/locations", Some(body)).await?.0, StatusCode::CREATED);

    let (_, all) = send(&app, "GET", "/v1/locations", None).await?;
    assert_eq!(all.as_array().map(Vec::len), Some(4));

    let (_, acme_only) = send(&app, "GET", &format!("/v1/locations?organization_id={acme}"), None).await?;
    let names: Vec<_> = acme_only.as_array().into_iter().flatten().filter_map(|l| l["name"].as_str()).collect();
    assert_eq!(names, ["Area 0", "Area 1", "Area 2"]);

    let (_, page) = send(&app, "GET", &format!("/v1/locations?organization_id={acme}&page=2&per_page=2"), None).await?;
    assert_eq!(page.as_array().map(Vec::len), Some(1));
    assert_eq!(page[0]["name"], "Area 2");
    Ok(())
}

#[tokio::test]
async fn work_orders_carry_comments_and_assignees() -> anyhow::Result<()> {
    let app = test_app().await?;
    let org = create_org(&app, "Acme").await?;
    let (_, tech) = send(
        &app,
        "POST",
        "/v1/users",
        Some(json!({ "organization_id": org, "email": "tech@acme.test", "name": "Tech", "role": "technician" })),
    )
    .await?;
    let tech_id = tech["id"].as_str().unwrap_or_default().to_string();

    let (status, wo) = send(&app, "POST", "/v1/work-orders", Some(json!({ "organization_id": org, "title": "Grease bearings" }))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(wo["status"], "open");
    assert_eq!(wo["priority"], "none");
    assert_eq!(wo["comments"], json!([]));
    let id = wo["id"].as_str().unwrap_or_default().to_string();

    let (status, assigned) =
        send(&app, "PUT", &format!("/v1/work-orders/{id}/assignees"), Some(json!({ "user_ids": [tech_id] }))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(assigned["assignee_ids"], json!([tech_id]));

    let (status, commented) = send(
        &app,
        "POST",
        &format!("/v1/work-orders/{id}/comments"),
        Some(json!({ "author_id": tech_id, "body": "Done on line 2" })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(commented["comments"][0]["body"], "Done on line 2");

    let (_, fetched) = send(&app, "GET", &format!("/v1/work-orders/{id}"), None).await?;
    assert_eq!(fetched["comments"].as_array().map(Vec::len), Some(1));
    assert_eq!(fetched["assignee_ids"], json!([tech_id]));

    let (status, _) = send(&app, "POST", &format!("/v1/work-orders/{}/comments", Uuid::new_v4()), Some(json!({ "body": "x" }))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn purchase_orders_parse_due_dates() -> anyhow::Result<()> {
    let app = test_app().await?;
    let org = create_org(&app, "Acme").await?;
    let (_, vendor) = send(&app, "POST", "/v1/vendors", Some(json!({ "organization_id": org, "name": "Parts Co" }))).await?;
    let vendor_id = vendor["id"].as_str().unwrap_or_default().to_string();

    let (status, po) = send(
        &app,
        "POST",
        "/v1/purchase-orders",
        Some(json!({
            "organization_id": org,
            "vendor_id": vendor_id,
            "title": "Filters",
            "line_items": [{ "description": "HEPA filter", "quantity": 10, "unit_cost": 12.5 }],
            "shipping": { "name": "Receiving", "address": "Dock 1" },
            "due_date": "2024-12-01"
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(po["status"], "draft");
    assert_eq!(po["shipping"]["address"], "Dock 1");
    assert!(po["due_date"].as_str().unwrap_or_default().starts_with("2024-12-01T00:00:00"));
    let id = po["id"].as_str().unwrap_or_default().to_string();

    let (status, body) =
        send(&app, "PATCH", &format!("/v1/purchase-orders/{id}"), Some(json!({ "due_date": "someday" }))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, patched) = send(&app, "PATCH", &format!("/v1/purchase-orders/{id}"), Some(json!({ "notes": "rush" }))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["due_date"], po["due_date"]);
    Ok(())
}

#[tokio::test]
async fn notifications_live_in_memory() -> anyhow::Result<()> {
    let app = test_app().await?;
    let org = Uuid::new_v4();
    let (status, n) = send(
        &app,
        "POST",
        "/v1/notifications",
        Some(json!({ "organization_id": org, "title": "PM due", "body": "Compressor 3" })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(n["read"], false);
    let id = n["id"].as_str().unwrap_or_default().to_string();

    let (status, read) = send(&app, "PATCH", &format!("/v1/notifications/{id}"), Some(json!({ "read": true }))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(read["read"], true);
    assert_eq!(read["title"], "PM due");

    let (_, listed) = send(&app, "GET", &format!("/v1/notifications?organization_id={org}"), None).await?;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    assert_eq!(send(&app, "DELETE", &format!("/v1/notifications/{id}"), None).await?.0, StatusCode::OK);
    assert_eq!(send(&app, "GET", &format!("/v1/notifications/{id}"), None).await?.0, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn malformed_ids_and_queries_get_json_errors() -> anyhow::Result<()> {
    let app = test_app().await?;

    let (status, body) = send(&app, "GET", "/v1/assets/not-a-uuid", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let (status, body) = send(&app, "PUT", "/v1/work-orders/123/assignees", Some(json!({ "user_ids": [] }))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let (status, body) = send(&app, "GET", "/v1/assets?page=abc", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["message"].is_string());
    Ok(())
}
