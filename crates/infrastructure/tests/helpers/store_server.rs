#![allow(dead_code)]

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Serves a fixed record/certificate data set the way the config service does.
pub async fn spawn_store_server() -> SocketAddr {
    let app = Router::new()
        .route("/dns/records/{kind}", get(records))
        .route("/certificates", get(certificates))
        .route("/broken/dns/records/{kind}", get(broken))
        .route("/garbage/dns/records/{kind}", get(garbage));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// An address nothing listens on.
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

async fn records(
    Path(kind): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let domain = params.get("domain").cloned().unwrap_or_default();
    if domain != "example.com" {
        return Json(json!([])).into_response();
    }

    let body: Value = match kind.as_str() {
        "aname" => json!([
            {"name": "example.com", "ttl": 60, "address": "192.0.2.20"},
            {"name": "example.com", "ttl": 60, "address": "192.0.2.10"}
        ]),
        "mx" => json!([
            {"name": "example.com", "ttl": 300, "preference": 10, "exchange": "mail.example.com"}
        ]),
        "soa" => json!([
            {
                "name": "example.com",
                "ttl": 3600,
                "primary_name_server": "ns1.example.com",
                "responsible_mailbox": "hostmaster.example.com",
                "serial": 2024060101,
                "refresh": 7200,
                "retry": 3600,
                "expire": 1209600,
                "minimum": 300
            }
        ]),
        _ => return StatusCode::NOT_FOUND.into_response(),
    };

    Json(body).into_response()
}

async fn certificates(Query(params): Query<HashMap<String, String>>) -> Response {
    let owner = params.get("owner").cloned().unwrap_or_default();
    let include_data = params.get("includeData").map(String::as_str) == Some("true");

    if owner != "example.com" {
        return Json(json!([])).into_response();
    }

    let data = |encoded: &str| {
        if include_data {
            Value::String(encoded.to_string())
        } else {
            Value::Null
        }
    };

    Json(json!([
        {"id": 1, "owner": "example.com", "data": data("MIIB"), "status": "ENABLED"},
        {"id": 2, "owner": "example.com", "data": data("MIIC"), "status": "ENABLED"}
    ]))
    .into_response()
}

async fn broken() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable").into_response()
}

async fn garbage() -> Response {
    (StatusCode::OK, "<html>not json</html>").into_response()
}
