use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Response,
};
use http::{HeaderMap, Method};

use crate::{error::ApiError, resources::Resources};

// curl -v http://127.0.0.1:8000/search/ufo => 200 OK image/png
// curl -v -H 'Range: bytes=0-9' http://127.0.0.1:8000/search/ufo => 206 Partial Content
// curl -v http://127.0.0.1:8000/search/moon => 404 Not Found {"message": ...}
#[tracing::instrument(name = "Searching a file.", skip(resources, method, headers))]
pub async fn search_file(
    State(resources): State<Arc<Resources>>,
    method: Method,
    headers: HeaderMap,
    Path(file_name): Path<String>,
) -> Result<Response, ApiError> {
    match resources.find(&file_name) {
        Some(path) => {
            tracing::info!(path = %path.display(), "Found in the catalog.");
            resources.serve(path, &method, &headers).await
        }
        None => Err(ApiError::NotFound(format!("File `{}`", file_name))),
    }
}
