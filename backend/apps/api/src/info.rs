//! Informational Pages
//!
//! JSON stand-ins for the public pages; actual rendering is the
//! frontend's job.

use axum::Json;
use serde_json::json;

/// GET /
pub async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "name": "Car Hub",
        "links": ["/register", "/login", "/cars", "/car-info", "/exchange-rates", "/location"],
    }))
}

/// GET /register
pub async fn register_page() -> Json<serde_json::Value> {
    Json(json!({
        "page": "register",
        "submitTo": "/register",
        "fields": [
            "userName", "email", "password",
            "firstName", "lastName", "age", "country", "gender",
        ],
    }))
}

/// GET /login
pub async fn login_page() -> Json<serde_json::Value> {
    Json(json!({
        "page": "login",
        "submitTo": "/login",
        "fields": ["userName", "password"],
    }))
}

/// GET /location
pub async fn location() -> Json<serde_json::Value> {
    Json(json!({
        "page": "location",
        "message": "",
    }))
}
