//! Integration tests for Shelfline.
//!
//! # Running Tests
//!
//! ```bash
//! # Create the schema and start the server
//! cargo run -p shelfline-cli -- migrate
//! cargo run -p shelfline-server
//!
//! # Run the ignored end-to-end tests
//! cargo test -p shelfline-integration-tests -- --ignored
//! ```
//!
//! Each test drives the HTTP boundary with a cookie-holding `reqwest`
//! client, one client per session. Redirects are followed by default, so a
//! form post resolves to the dashboard JSON it redirects to.

#![cfg_attr(not(test), forbid(unsafe_code))]

use reqwest::{Client, redirect};
use serde_json::Value;

/// Base URL for the server (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("SHELFLINE_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// A fresh session: cookie store enabled, redirects followed.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// A client that surfaces redirects instead of following them.
#[must_use]
pub fn no_redirect_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

/// Register a user without a profile picture; the response is the dashboard
/// JSON after the redirect.
pub async fn register_user(client: &Client, username: &str, email: &str) -> Value {
    let form = reqwest::multipart::Form::new()
        .text("username", username.to_string())
        .text("email", email.to_string());

    let resp = client
        .post(format!("{}/users", base_url()))
        .multipart(form)
        .send()
        .await
        .expect("Failed to register user");
    assert!(resp.status().is_success());

    resp.json().await.expect("Dashboard response was not JSON")
}

/// Add a product through the form endpoint; returns the dashboard JSON.
pub async fn add_product(client: &Client, name: &str, cost: &str) -> Value {
    let resp = client
        .post(format!("{}/products", base_url()))
        .form(&[("name", name), ("cost", cost)])
        .send()
        .await
        .expect("Failed to add product");
    assert!(resp.status().is_success());

    resp.json().await.expect("Dashboard response was not JSON")
}

/// Fetch the dashboard JSON for the client's session.
pub async fn dashboard(client: &Client) -> Value {
    let resp = client
        .get(format!("{}/", base_url()))
        .send()
        .await
        .expect("Failed to fetch dashboard");
    assert!(resp.status().is_success());

    resp.json().await.expect("Dashboard response was not JSON")
}

/// Pull a product id out of a dashboard payload by product name.
#[must_use]
pub fn product_id_by_name(dashboard: &Value, name: &str) -> Option<i64> {
    dashboard["products"]
        .as_array()?
        .iter()
        .find(|p| p["name"] == name)?["id"]
        .as_i64()
}
