//! End-to-end HTTP boundary test: run the router in-process on an ephemeral
//! port, drive it with a real client, and check status codes and bodies.
//! Uses the in-memory store so no database is needed.

use serde_json::{json, Value as JsonValue};
use std::sync::Arc;
use tutor_intake::transport;
use tutor_intake::{ApplicationStore, MemApplicationStore, TutorApplication};

async fn spawn_server() -> String {
    let store = Arc::new(MemApplicationStore::new()) as Arc<dyn ApplicationStore>;
    let app_state = transport::http::AppState { store };
    let router = transport::http::create_router(app_state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

fn ali_khan() -> JsonValue {
    json!({
        "fullName": "Ali Khan",
        "gender": "male",
        "city": "Lahore",
        "area": "DHA",
        "subjects": ["Tajweed"],
        "teachingMode": "online",
        "islamicQualification": "Qari",
        "experienceYears": 5,
        "demoClassAvailable": "yes",
        "daysAvailable": ["Monday"],
        "preferredTimeSlots": ["Morning"],
        "shortBio": "I have taught Tajweed for five years with great results.",
        "confirmAccuracy": true,
        "phoneNumber": "03001234567"
    })
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_create_and_fetch_application() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/applications", base_url))
        .json(&ali_khan())
        .send()
        .await?;
    assert_eq!(resp.status(), 201);
    let stored: TutorApplication = resp.json().await?;
    assert_eq!(stored.id, 1);
    assert_eq!(stored.record.full_name, "Ali Khan");
    assert_eq!(stored.record.phone_number, "03001234567");

    // Point lookup round-trips the stored record.
    let resp = client
        .get(format!("{}/api/applications/{}", base_url, stored.id))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    let fetched: TutorApplication = resp.json().await?;
    assert_eq!(fetched, stored);

    let resp = client
        .get(format!("{}/api/applications/999", base_url))
        .send()
        .await?;
    assert_eq!(resp.status(), 404);
    let body: JsonValue = resp.json().await?;
    assert_eq!(body["message"], "Application not found");

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_validation_failure_reports_field() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let mut input = ali_khan();
    input
        .as_object_mut()
        .unwrap()
        .insert("confirmAccuracy".to_string(), json!(false));
    let resp = client
        .post(format!("{}/api/applications", base_url))
        .json(&input)
        .send()
        .await?;
    assert_eq!(resp.status(), 400);
    let body: JsonValue = resp.json().await?;
    assert_eq!(body["field"], "confirmAccuracy");
    assert!(body["message"].is_string());

    // Nothing was persisted for the rejected submission.
    let resp = client
        .get(format!("{}/api/applications", base_url))
        .send()
        .await?;
    let listed: Vec<TutorApplication> = resp.json().await?;
    assert!(listed.is_empty());

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_malformed_json_body_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/applications", base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(resp.status(), 400);
    let body: JsonValue = resp.json().await?;
    assert!(body["message"].is_string());

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_listing_returns_newest_first() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    for name in ["First Applicant", "Second Applicant", "Third Applicant"] {
        let mut input = ali_khan();
        input
            .as_object_mut()
            .unwrap()
            .insert("fullName".to_string(), json!(name));
        let resp = client
            .post(format!("{}/api/applications", base_url))
            .json(&input)
            .send()
            .await?;
        assert_eq!(resp.status(), 201);
    }

    let resp = client
        .get(format!("{}/api/applications", base_url))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    let listed: Vec<TutorApplication> = resp.json().await?;
    let names: Vec<&str> = listed.iter().map(|a| a.record.full_name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Third Applicant", "Second Applicant", "First Applicant"]
    );
    let ids: Vec<i32> = listed.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_healthcheck() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{}/health", base_url)).send().await?;
    assert_eq!(resp.status(), 200);
    let body: JsonValue = resp.json().await?;
    assert_eq!(body["status"], "ok");

    Ok(())
}
