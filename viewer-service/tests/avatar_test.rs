mod common;

use axum::http::StatusCode;
use common::TestApp;
use reqwest::multipart;
use viewer_service::services::AVATAR_ID_MODULUS;

fn image_form(bytes: Vec<u8>, file_name: &str) -> multipart::Form {
    multipart::Form::new().part(
        "file",
        multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("image/png")
            .unwrap(),
    )
}

fn parse_avatar_id(id: &str) -> u64 {
    id.strip_prefix("avatar_")
        .unwrap_or_else(|| panic!("unexpected avatar id: {id}"))
        .parse()
        .unwrap_or_else(|_| panic!("non-numeric avatar id: {id}"))
}

async fn upload(app: &TestApp, form: multipart::Form) -> reqwest::Response {
    reqwest::Client::new()
        .post(app.url("/api/upload_avatar"))
        .multipart(form)
        .send()
        .await
        .expect("Failed to execute request.")
}

#[tokio::test]
async fn upload_avatar_returns_id_and_filename() {
    let app = TestApp::spawn().await;

    let response = upload(&app, image_form(vec![7; 512], "me.png")).await;

    assert_eq!(StatusCode::OK, response.status());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["filename"], "me.png");
    assert_eq!(body["status"], "uploaded");
    let id = parse_avatar_id(body["avatar_id"].as_str().unwrap());
    assert!(id < AVATAR_ID_MODULUS);
}

#[tokio::test]
async fn identical_bytes_get_identical_ids() {
    let app = TestApp::spawn().await;
    let bytes = b"\x89PNG\r\n\x1a\nsame avatar twice".to_vec();

    let first: serde_json::Value = upload(&app, image_form(bytes.clone(), "a.png"))
        .await
        .json()
        .await
        .unwrap();
    let second: serde_json::Value = upload(&app, image_form(bytes, "b.png"))
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(first["avatar_id"], second["avatar_id"]);
    assert_eq!(second["filename"], "b.png");
}

#[tokio::test]
async fn other_parts_are_ignored() {
    let app = TestApp::spawn().await;
    let form = multipart::Form::new()
        .text("note", "profile picture")
        .part(
            "file",
            multipart::Part::bytes(vec![1, 2, 3]).file_name("tiny.gif"),
        );

    let response = upload(&app, form).await;

    assert_eq!(StatusCode::OK, response.status());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["filename"], "tiny.gif");
}

#[tokio::test]
async fn missing_file_part_is_rejected() {
    let app = TestApp::spawn().await;
    let form = multipart::Form::new().text("avatar", "not a file");

    let response = upload(&app, form).await;

    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, response.status());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["detail"], "Field required: file");
}

async fn post_raw_multipart(app: &TestApp, body: &'static str) -> reqwest::Response {
    reqwest::Client::new()
        .post(app.url("/api/upload_avatar"))
        .header("content-type", "multipart/form-data; boundary=XYZ")
        .body(body)
        .send()
        .await
        .expect("Failed to execute request.")
}

#[tokio::test]
async fn text_value_named_file_is_not_an_upload() {
    let app = TestApp::spawn().await;

    let response = post_raw_multipart(
        &app,
        "--XYZ\r\nContent-Disposition: form-data; name=\"file\"\r\n\r\nhello\r\n--XYZ--\r\n",
    )
    .await;

    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, response.status());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["detail"], "Expected an uploaded file in field: file");
}

#[tokio::test]
async fn truncated_file_part_is_a_bad_request() {
    let app = TestApp::spawn().await;

    // Stream ends inside the file part, with no closing boundary.
    let response = post_raw_multipart(
        &app,
        "--XYZ\r\nContent-Disposition: form-data; name=\"file\"; filename=\"a.png\"\r\nContent-Type: image/png\r\n\r\nhello",
    )
    .await;

    assert_eq!(StatusCode::BAD_REQUEST, response.status());
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn non_multipart_body_is_rejected() {
    let app = TestApp::spawn().await;

    let response = reqwest::Client::new()
        .post(app.url("/api/upload_avatar"))
        .json(&serde_json::json!({"file": "nope"}))
        .send()
        .await
        .unwrap();

    assert!(response.status().is_client_error());
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn oversized_upload_is_refused() {
    let app = TestApp::spawn_with(|config| config.server.max_upload_bytes = 1024).await;

    let response = upload(&app, image_form(vec![0; 8 * 1024], "huge.png")).await;

    assert_eq!(StatusCode::PAYLOAD_TOO_LARGE, response.status());
}

#[tokio::test]
async fn avatar_list_ignores_uploads() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let before: serde_json::Value = client
        .get(app.url("/api/avatars"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    upload(&app, image_form(vec![9; 128], "new.png")).await;

    let after: serde_json::Value = client
        .get(app.url("/api/avatars"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(before, after);
    assert_eq!(
        after,
        serde_json::json!({
            "avatars": [
                {"id": "avatar_1", "name": "Avatar 1", "thumbnail": "/static/avatar1.jpg"},
                {"id": "avatar_2", "name": "Avatar 2", "thumbnail": "/static/avatar2.jpg"},
                {"id": "avatar_3", "name": "Avatar 3", "thumbnail": "/static/avatar3.jpg"},
            ]
        })
    );
}
