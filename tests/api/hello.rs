use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn hello_returns_a_greeting_for_valid_data() -> Result<(), anyhow::Error> {
    // 준비
    let test_app = TestApp::spawn_app().await?;

    // 실행
    let response = test_app
        .post_hello(&json!({ "name": "Alice", "age": 30 }))
        .await?;

    // 확인
    assert_eq!(response.status(), http::StatusCode::OK);
    let body: serde_json::Value = response.json().await?;
    assert_eq!(body, json!({ "message": "Alice, ваш возраст - 30" }));

    Ok(())
}

#[tokio::test]
async fn hello_accepts_the_boundaries() -> Result<(), anyhow::Error> {
    // 테스트 데이터
    let test_cases = vec![
        json!({ "name": "Bob", "age": 18 }),
        json!({ "name": "Аксиния", "age": 110 }),
        json!({ "name": "a".repeat(20), "age": 50 }),
    ];
    // 준비
    let test_app = TestApp::spawn_app().await?;

    for body in test_cases {
        // 실행
        let response = test_app.post_hello(&body).await?;

        // 확인
        assert_eq!(
            response.status(),
            http::StatusCode::OK,
            "The API did not return 200 OK when the payload was {}.",
            body
        );
    }

    Ok(())
}

#[tokio::test]
async fn hello_returns_a_422_when_fields_are_present_but_invalid() -> Result<(), anyhow::Error> {
    // 테스트 데이터
    let test_cases = vec![
        (json!({ "name": "Al", "age": 30 }), "name too short"),
        (json!({ "name": "a".repeat(21), "age": 30 }), "name too long"),
        (json!({ "name": "Alice", "age": 17 }), "too young"),
        (json!({ "name": "Alice", "age": 111 }), "too old"),
    ];
    // 준비
    let test_app = TestApp::spawn_app().await?;

    for (body, description) in test_cases {
        // 실행
        let response = test_app.post_hello(&body).await?;

        // 확인
        assert_eq!(
            response.status(),
            http::StatusCode::UNPROCESSABLE_ENTITY,
            "The API did not fail with 422 when the payload was {}.",
            description
        );
    }

    Ok(())
}

#[tokio::test]
async fn hello_returns_a_422_when_data_is_missing_or_mistyped() -> Result<(), anyhow::Error> {
    // 테스트 데이터
    let test_cases = vec![
        (json!({ "name": "Alice" }), "missing the age"),
        (json!({ "age": 30 }), "missing the name"),
        (json!({}), "missing both name and age"),
        (json!({ "name": "Alice", "age": "thirty" }), "age is not a number"),
        (json!({ "name": "Alice", "age": 30.5 }), "age is not an integer"),
    ];
    // 준비
    let test_app = TestApp::spawn_app().await?;

    for (body, description) in test_cases {
        // 실행
        let response = test_app.post_hello(&body).await?;

        // 확인
        assert_eq!(
            response.status(),
            http::StatusCode::UNPROCESSABLE_ENTITY,
            "The API did not fail with 422 when the payload was {}.",
            description
        );
    }

    Ok(())
}

#[tokio::test]
async fn hello_rejects_a_body_that_is_not_json() -> Result<(), anyhow::Error> {
    // 준비
    let test_app = TestApp::spawn_app().await?;
    let uri = test_app.uri()?.join("hello")?;

    // 실행
    let malformed = test_app
        .client
        .post(uri.clone())
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body("{\"name\": ")
        .send()
        .await?;
    let form = test_app
        .client
        .post(uri)
        .header(
            reqwest::header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body("name=Alice&age=30")
        .send()
        .await?;

    // 확인
    assert_eq!(malformed.status(), http::StatusCode::BAD_REQUEST);
    assert_eq!(form.status(), http::StatusCode::UNSUPPORTED_MEDIA_TYPE);

    Ok(())
}
