use axum::{
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::{domain::FIXTURE, error::ApiError, xml::to_xml};

const TEXT_MESSAGE: &str = "<h2>TEXT + GET >>> Hello, Marolok!</h2><br>\
                            Message: Hello, Marolok!</br>\
                            API type: GET</br>\
                            Content type: text";

const HTML_MESSAGE: &str = "<h2>HTML + POST >>> Hello, Marolok!</h2><br>\
                            Message: Hello, Marolok!</br>\
                            API type: GET</br>\
                            Content type: HTML";

// `&'static str`은 `text/plain; charset=utf-8`로 응답한다.
// 구조체를 반환하면 JSON이 되므로 문자열 그대로 반환해야 한다.
// curl -v http://127.0.0.1:8000/text
pub async fn text() -> &'static str {
    TEXT_MESSAGE
}

// curl -v http://127.0.0.1:8000/html
pub async fn html() -> Html<&'static str> {
    Html(HTML_MESSAGE)
}

// curl -v http://127.0.0.1:8000/json
pub async fn json() -> impl IntoResponse {
    Json(FIXTURE)
}

// curl -v http://127.0.0.1:8000/xml
#[tracing::instrument(name = "Encoding the fixture as XML.")]
pub async fn xml() -> Result<Response, ApiError> {
    let body = to_xml(&FIXTURE).map_err(|e| ApiError::UnexpectedError(e.into()))?;
    Ok((
        [(http::header::CONTENT_TYPE, "application/xml")],
        body,
    )
        .into_response())
}
