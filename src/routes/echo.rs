use axum::{extract::Path, Json};
use axum_extra::extract::Query;

#[derive(Debug, serde::Deserialize)]
pub struct EchoQuery {
    // 반복되는 `test_q`를 순서대로 모은다. 없으면 빈 리스트
    #[serde(default)]
    test_q: Vec<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct EchoResponse {
    path: String,
    query: Vec<String>,
}

// curl -v 'http://127.0.0.1:8000/your/req/abc?test_q=1&test_q=2'
// => {"path":"abc","query":["1","2"]}
#[tracing::instrument(
    name = "Echoing the request parameters.",
    skip_all,
    fields(test_p = %test_p, test_q = ?query.test_q)
)]
pub async fn echo_request(
    Path(test_p): Path<String>,
    Query(query): Query<EchoQuery>,
) -> Json<EchoResponse> {
    tracing::info!("Echoing.");
    Json(EchoResponse {
        path: test_p,
        query: query.test_q,
    })
}
