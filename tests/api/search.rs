use crate::helpers::TestApp;

#[tokio::test]
async fn known_names_return_the_file() -> Result<(), anyhow::Error> {
    // 준비
    let test_app = TestApp::spawn_app().await?;

    for (name, file) in [("ufo", "for_download/ufo.png"), ("cover", "for_download/cover.png")] {
        // 실행
        let response = test_app.get(&format!("search/{}", name)).await?;

        // 확인
        assert_eq!(response.status(), http::StatusCode::OK);
        assert_eq!(
            response.headers()[reqwest::header::CONTENT_TYPE],
            "image/png"
        );
        assert_eq!(response.bytes().await?.to_vec(), test_app.read_resource(file)?);
    }

    Ok(())
}

#[tokio::test]
async fn unknown_name_returns_404_with_a_message() -> Result<(), anyhow::Error> {
    // 준비
    let test_app = TestApp::spawn_app().await?;

    // 실행
    let response = test_app.get("search/anything-else").await?;

    // 확인
    assert_eq!(response.status(), http::StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["message"], "File `anything-else` not found");

    Ok(())
}

#[tokio::test]
async fn range_request_returns_partial_content() -> Result<(), anyhow::Error> {
    // 준비
    let test_app = TestApp::spawn_app().await?;

    // 실행
    let response = test_app
        .client
        .get(test_app.uri()?.join("search/ufo")?)
        .header(reqwest::header::RANGE, "bytes=0-9")
        .send()
        .await?;

    // 확인
    assert_eq!(response.status(), http::StatusCode::PARTIAL_CONTENT);
    let expected = test_app.read_resource("for_download/ufo.png")?;
    assert_eq!(response.bytes().await?.to_vec(), expected[..10].to_vec());

    Ok(())
}
