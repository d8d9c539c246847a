use crate::helpers::TestApp;

#[tokio::test]
async fn root_returns_the_index_page() -> Result<(), anyhow::Error> {
    // 준비
    let test_app = TestApp::spawn_app().await?;

    // 실행
    let response = test_app.get("").await?;

    // 확인
    assert_eq!(response.status(), http::StatusCode::OK);
    assert!(response.headers()[reqwest::header::CONTENT_TYPE]
        .to_str()?
        .starts_with("text/html"));
    let expected = String::from_utf8(test_app.read_resource("index.html")?)?;
    assert_eq!(response.text().await?, expected);

    Ok(())
}

#[tokio::test]
async fn resources_are_mounted_as_static_files() -> Result<(), anyhow::Error> {
    // 준비
    let test_app = TestApp::spawn_app().await?;

    // 실행
    let response = test_app.get("resources/for_download/cover.png").await?;

    // 확인
    assert_eq!(response.status(), http::StatusCode::OK);
    assert_eq!(
        response.headers()[reqwest::header::CONTENT_TYPE],
        "image/png"
    );
    assert_eq!(
        response.bytes().await?.to_vec(),
        test_app.read_resource("for_download/cover.png")?
    );

    Ok(())
}

#[tokio::test]
async fn missing_static_file_returns_404() -> Result<(), anyhow::Error> {
    // 준비
    let test_app = TestApp::spawn_app().await?;

    // 실행
    let response = test_app.get("resources/for_download/moon.png").await?;

    // 확인
    assert_eq!(response.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn head_request_returns_headers_only() -> Result<(), anyhow::Error> {
    // 준비
    let test_app = TestApp::spawn_app().await?;

    // 실행
    let response = test_app
        .client
        .head(test_app.uri()?)
        .send()
        .await?;

    // 확인
    assert_eq!(response.status(), http::StatusCode::OK);
    assert!(response.headers()[reqwest::header::CONTENT_TYPE]
        .to_str()?
        .starts_with("text/html"));
    assert!(response.bytes().await?.is_empty());

    Ok(())
}
