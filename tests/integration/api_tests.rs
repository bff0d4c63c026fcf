//! API integration tests against a running server

use rand::Rng;
use reqwest::Client;
use serde_json::Value;

const BASE_URL: &str = "http://localhost:8080";

fn random_phone() -> String {
    let mut rng = rand::thread_rng();
    format!(
        "+7({:03})-{:03}-{:02}-{:02}",
        rng.gen_range(0..1000),
        rng.gen_range(0..1000),
        rng.gen_range(0..100),
        rng.gen_range(0..100)
    )
}

async fn post_form(client: &Client, path: &str, form: &[(&str, String)]) -> reqwest::Response {
    client
        .post(format!("{}{}", BASE_URL, path))
        .form(form)
        .send()
        .await
        .expect("Failed to send request")
}

async fn create_author(client: &Client) -> i64 {
    let response = post_form(
        client,
        "/authors",
        &[
            ("first-name", "Stanislaw".to_string()),
            ("last-name", "Lem".to_string()),
        ],
    )
    .await;
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No author ID")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_author_book_review_scenario() {
    let client = Client::new();
    let author_id = create_author(&client).await;

    // Random title keeps the duplicate check out of the way on reruns
    let title = format!("Solaris {}", rand::thread_rng().gen_range(0..1_000_000));
    let response = post_form(
        &client,
        "/books",
        &[
            ("title", title.clone()),
            ("publish-year", "1961".to_string()),
            ("authors", author_id.to_string()),
        ],
    )
    .await;
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let book_id = body["id"].as_i64().expect("No book ID");
    assert_eq!(body["authors"][0]["id"], author_id);

    let response = client
        .get(format!("{}/authors/{}", BASE_URL, author_id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["books"]
        .as_array()
        .expect("No books")
        .iter()
        .any(|b| b["id"] == book_id));

    let response = post_form(
        &client,
        "/readers",
        &[
            ("first-name", "Kris".to_string()),
            ("last-name", "Kelvin".to_string()),
            ("phone", random_phone()),
        ],
    )
    .await;
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let reader_id = body["id"].as_i64().expect("No reader ID");

    let review = [
        ("reader-id", reader_id.to_string()),
        ("content", "Hard to put down".to_string()),
    ];
    let response = post_form(&client, &format!("/books/{}/reviews", book_id), &review).await;
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["date"],
        chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
    );

    let response = post_form(&client, &format!("/books/{}/reviews", book_id), &review).await;
    assert_eq!(response.status(), 409);

    // Cleanup
    for path in [
        format!("/readers/{}", reader_id),
        format!("/books/{}", book_id),
        format!("/authors/{}", author_id),
    ] {
        let _ = client.delete(format!("{}{}", BASE_URL, path)).send().await;
    }
}

#[tokio::test]
#[ignore]
async fn test_create_reader_invalid_phone() {
    let client = Client::new();

    let response = post_form(
        &client,
        "/readers",
        &[
            ("first-name", "Kris".to_string()),
            ("last-name", "Kelvin".to_string()),
            ("phone", "89001234567".to_string()),
        ],
    )
    .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["message"],
        "The phone number must be in this format: +7(xxx)-xxx-xx-xx"
    );
}

#[tokio::test]
#[ignore]
async fn test_delete_missing_author() {
    let client = Client::new();

    let response = client
        .delete(format!("{}/authors/{}", BASE_URL, i64::MAX))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], 404);
}
