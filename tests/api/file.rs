use crate::helpers::TestApp;

#[tokio::test]
async fn file_route_sends_attachment_with_computed_name() -> Result<(), anyhow::Error> {
    // 테스트 데이터
    let test_cases = vec![
        ("photo-png", "photo.png"),
        ("my-cool_photo-jpeg", "my-cool_photo.jpeg"),
        ("A1-JPG", "A1.jpg"),
        ("_-bmp", "_.bmp"),
        ("x--Jpg", "x-.jpg"),
    ];
    // 준비
    let test_app = TestApp::spawn_app().await?;
    let expected_body = test_app.read_resource("for_download/sample.png")?;

    for (segment, file_name) in test_cases {
        // 실행
        let response = test_app.get(&format!("file/{}", segment)).await?;

        // 확인
        assert_eq!(
            response.status(),
            http::StatusCode::OK,
            "The API did not return 200 OK for /file/{}.",
            segment
        );
        assert_eq!(
            response.headers()[reqwest::header::CONTENT_TYPE],
            "application/octet-stream"
        );
        assert_eq!(
            response.headers()[reqwest::header::CONTENT_DISPOSITION],
            format!("attachment; filename=\"{}\"", file_name).as_str()
        );
        assert_eq!(response.bytes().await?.to_vec(), expected_body);
    }

    Ok(())
}

#[tokio::test]
async fn file_route_rejects_invalid_names_and_extensions() -> Result<(), anyhow::Error> {
    // 테스트 데이터
    let test_cases = vec![
        ("photo-gif", "unknown extension"),
        ("photo-jp", "extension too short"),
        ("photo-jpegg", "extension too long"),
        ("photo-", "empty extension"),
        ("-png", "empty name"),
        ("pho.to-png", "dot in name"),
        ("pho%20to-png", "space in name"),
        ("%D1%84-png", "non-ascii name"),
        ("photopng", "no separator"),
    ];
    // 준비
    let test_app = TestApp::spawn_app().await?;

    for (segment, description) in test_cases {
        // 실행
        let response = test_app.get(&format!("file/{}", segment)).await?;

        // 확인
        assert!(
            response.status().is_client_error(),
            "The API did not fail with a client error when the segment had {} (got {}).",
            description,
            response.status()
        );
    }

    Ok(())
}

#[tokio::test]
async fn validation_failure_is_a_422_with_details() -> Result<(), anyhow::Error> {
    // 준비
    let test_app = TestApp::spawn_app().await?;

    // 실행
    let response = test_app.get("file/photo-gif").await?;

    // 확인
    assert_eq!(response.status(), http::StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = response.json().await?;
    assert!(body["detail"]["extension"].is_array());
    assert!(body["detail"].get("name").is_none());

    Ok(())
}

#[tokio::test]
async fn query_form_sends_attachment_with_computed_name() -> Result<(), anyhow::Error> {
    // 준비
    let test_app = TestApp::spawn_app().await?;

    // 실행
    let response = test_app.get("file?name=cover_2024&extension=PNG").await?;

    // 확인
    assert_eq!(response.status(), http::StatusCode::OK);
    assert_eq!(
        response.headers()[reqwest::header::CONTENT_DISPOSITION],
        "attachment; filename=\"cover_2024.png\""
    );

    Ok(())
}

#[tokio::test]
async fn query_form_rejects_invalid_or_missing_parameters() -> Result<(), anyhow::Error> {
    // 테스트 데이터
    let test_cases = vec![
        ("file?name=photo&extension=tiff", "unknown extension"),
        ("file?name=ph%2Foto&extension=png", "slash in name"),
        ("file?name=&extension=png", "empty name"),
        ("file?name=photo", "missing extension"),
        ("file", "missing both"),
    ];
    // 준비
    let test_app = TestApp::spawn_app().await?;

    for (path, description) in test_cases {
        // 실행
        let response = test_app.get(path).await?;

        // 확인
        assert!(
            response.status().is_client_error(),
            "The API did not fail with a client error for {} (got {}).",
            description,
            response.status()
        );
    }

    Ok(())
}
