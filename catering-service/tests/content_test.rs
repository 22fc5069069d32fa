//! End-to-end behaviour against a live MongoDB.
//!
//! Run with `cargo test -- --ignored` once MongoDB is reachable at
//! `TEST_DATABASE_URL` (default `mongodb://localhost:27017`).

mod common;

use catering_service::models::{GalleryImage, MenuItem, Testimonial};
use common::TestApp;
use mongodb::bson::doc;
use serde_json::json;

#[tokio::test]
#[ignore = "Requires MongoDB at localhost:27017"]
async fn seeding_twice_inserts_defaults_once() {
    let app = TestApp::spawn().await;

    for _ in 0..2 {
        let response = app.seed().await;
        assert!(response.status().is_success());
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "status": "ok" }));
    }

    assert_eq!(app.store.count_documents("menuitem").await.unwrap(), 3);
    assert_eq!(app.store.count_documents("testimonial").await.unwrap(), 3);
    assert_eq!(app.store.count_documents("galleryimage").await.unwrap(), 6);

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "Requires MongoDB at localhost:27017"]
async fn seeded_content_is_served() {
    let app = TestApp::spawn().await;
    app.seed().await;

    let menu: Vec<MenuItem> = serde_json::from_value(app.get_json("/menu").await).unwrap();
    let mut titles: Vec<&str> = menu.iter().map(|m| m.title.as_str()).collect();
    titles.sort_unstable();
    assert_eq!(
        titles,
        vec![
            "Black Truffle Arancini",
            "Butter-Poached Lobster",
            "Valrhona Chocolate Tart"
        ]
    );

    let lobster = menu
        .iter()
        .find(|m| m.title == "Butter-Poached Lobster")
        .unwrap();
    assert_eq!(lobster.category, "Mains");
    assert_eq!(lobster.tags, vec!["seafood"]);

    let arancini = menu
        .iter()
        .find(|m| m.title == "Black Truffle Arancini")
        .unwrap();
    assert_eq!(arancini.category, "Canapés");
    assert_eq!(arancini.tags, vec!["vegetarian", "signature"]);

    let testimonials: Vec<Testimonial> =
        serde_json::from_value(app.get_json("/testimonials").await).unwrap();
    assert_eq!(testimonials.len(), 3);
    assert!(testimonials.iter().any(|t| t.name == "Sofia N."));

    let gallery: Vec<GalleryImage> =
        serde_json::from_value(app.get_json("/gallery").await).unwrap();
    assert_eq!(gallery.len(), 6);

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "Requires MongoDB at localhost:27017"]
async fn reads_strip_unrecognized_fields() {
    let app = TestApp::spawn().await;
    app.store
        .create_document(
            "galleryimage",
            &doc! {
                "url": "https://example.com/cake.jpg",
                "alt": "Wedding cake",
                "photographer": "internal only",
            },
        )
        .await
        .unwrap();

    let gallery = app.get_json("/gallery").await;
    assert_eq!(
        gallery,
        json!([{ "url": "https://example.com/cake.jpg", "alt": "Wedding cake" }])
    );

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "Requires MongoDB at localhost:27017"]
async fn malformed_stored_document_fails_the_read() {
    let app = TestApp::spawn().await;
    app.store
        .create_document(
            "menuitem",
            &doc! {
                "description": "No title on this one",
                "category": "Mains",
                "image_url": "https://example.com/dish.jpg",
            },
        )
        .await
        .unwrap();

    let response = app.client.get(app.url("/menu")).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains("title"), "{}", detail);

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "Requires MongoDB at localhost:27017"]
async fn contact_is_stored() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/contact"))
        .json(&json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "+44 20 7946 0000",
            "guest_count": 80,
            "message": "Summer garden party"
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "status": "received" }));

    let stored = app.store.get_documents("contactinquiry").await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].get_str("email").unwrap(), "jane@example.com");
    assert_eq!(stored[0].get_i64("guest_count").unwrap(), 80);
    assert!(stored[0].get_datetime("created_at").is_ok());

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "Requires MongoDB at localhost:27017"]
async fn rejected_contact_is_not_stored() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/contact"))
        .json(&json!({ "email": "jane@example.com", "message": "No name" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 422);

    assert_eq!(app.store.count_documents("contactinquiry").await.unwrap(), 0);

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "Requires MongoDB at localhost:27017"]
async fn diagnostics_list_collections() {
    let app = TestApp::spawn().await;
    app.seed().await;

    let report = app.get_json("/test").await;
    assert_eq!(report["database"], "✅ Connected & Working");
    assert_eq!(report["connection_status"], "Connected");
    assert_eq!(report["database_url"], "✅ Set");
    assert_eq!(report["database_name"], app.db_name.as_str());

    let collections = report["collections"].as_array().unwrap();
    assert!(collections.len() <= 10);
    assert!(collections.iter().any(|c| c == "menuitem"));

    app.cleanup().await;
}
