use std::sync::Arc;

use axum::{extract::State, response::Response};
use http::{HeaderMap, Method};

use crate::{error::ApiError, resources::Resources};

// curl -v http://127.0.0.1:8000/ => index.html
// curl -I http://127.0.0.1:8000/ => 헤더만
pub async fn index(
    State(resources): State<Arc<Resources>>,
    method: Method,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    resources
        .serve(resources.index_page(), &method, &headers)
        .await
}
