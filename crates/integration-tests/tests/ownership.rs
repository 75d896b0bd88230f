//! Ownership-scoping and cascade tests across independent sessions.
//!
//! These tests require:
//! - A running `PostgreSQL` database with the schema created
//!   (cargo run -p shelfline-cli -- migrate)
//! - The server running (cargo run -p shelfline-server)
//! - `SHELFLINE_DATABASE_URL` (or `DATABASE_URL`) pointing at the same
//!   database as the server, for direct store verification
//!
//! Run with: cargo test -p shelfline-integration-tests -- --ignored

use sqlx::PgPool;
use uuid::Uuid;

use shelfline_core::UserId;
use shelfline_integration_tests::{
    add_product, base_url, client, dashboard, product_id_by_name, register_user,
};
use shelfline_server::db::UserRepository;

fn unique_email() -> String {
    format!("{}@example.com", Uuid::new_v4())
}

async fn store_pool() -> PgPool {
    let url = std::env::var("SHELFLINE_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .expect("SHELFLINE_DATABASE_URL must point at the server's database");
    PgPool::connect(&url)
        .await
        .expect("Failed to connect to database")
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn totals_never_mix_sessions() {
    let alice = client();
    let bob = client();
    register_user(&alice, "alice", &unique_email()).await;
    register_user(&bob, "bob", &unique_email()).await;

    add_product(&alice, "Alice Widget", "10.00").await;
    let bob_view = add_product(&bob, "Bob Widget", "99.00").await;

    let alice_view = dashboard(&alice).await;
    assert_eq!(alice_view["totals"]["count"], 1);
    assert_eq!(alice_view["totals"]["total"], "10.00");
    assert_eq!(bob_view["totals"]["count"], 1);
    assert_eq!(bob_view["totals"]["total"], "99.00");

    // Bob's dashboard never lists Alice's product
    assert!(product_id_by_name(&bob_view, "Alice Widget").is_none());
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn foreign_product_edit_is_a_not_found_notice() {
    let alice = client();
    let bob = client();
    register_user(&alice, "alice", &unique_email()).await;
    register_user(&bob, "bob", &unique_email()).await;

    let alice_view = add_product(&alice, "Heirloom", "50.00").await;
    let id = product_id_by_name(&alice_view, "Heirloom").expect("product missing");

    // Bob tries to edit Alice's product
    let resp = bob
        .post(format!("{}/products/{id}", base_url()))
        .form(&[("name", "Stolen"), ("cost", "0.01")])
        .send()
        .await
        .expect("Failed to post edit");
    assert!(resp.status().is_success());
    let bob_view: serde_json::Value = resp.json().await.expect("not JSON");
    assert_eq!(bob_view["notice"], "Product not found!");

    // Alice's product is unchanged
    let alice_view = dashboard(&alice).await;
    assert!(product_id_by_name(&alice_view, "Heirloom").is_some());
    assert_eq!(alice_view["totals"]["total"], "50.00");
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn foreign_product_delete_is_a_no_op() {
    let alice = client();
    let bob = client();
    register_user(&alice, "alice", &unique_email()).await;
    register_user(&bob, "bob", &unique_email()).await;

    let alice_view = add_product(&alice, "Keepsake", "5.00").await;
    let id = product_id_by_name(&alice_view, "Keepsake").expect("product missing");

    // Bob's delete matches zero rows and reports success anyway
    let resp = bob
        .post(format!("{}/products/{id}/delete", base_url()))
        .send()
        .await
        .expect("Failed to post delete");
    assert!(resp.status().is_success());

    let alice_view = dashboard(&alice).await;
    assert!(product_id_by_name(&alice_view, "Keepsake").is_some());
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn deleting_a_user_cascades_to_their_products() {
    let doomed = client();
    let view = register_user(&doomed, "mallory", &unique_email()).await;
    add_product(&doomed, "Orphan One", "1.00").await;
    add_product(&doomed, "Orphan Two", "2.00").await;

    let user_id = view["user"]["id"].as_i64().expect("user id missing");
    let user_id = UserId::new(i32::try_from(user_id).expect("user id out of range"));

    let pool = store_pool().await;
    let users = UserRepository::new(&pool);
    assert!(users.delete(user_id).await.expect("Failed to delete user"));

    let remaining: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE owner_id = $1")
            .bind(user_id)
            .fetch_one(&pool)
            .await
            .expect("Failed to count products");
    assert_eq!(remaining, 0, "cascade must remove every owned product");
}
