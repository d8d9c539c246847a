use std::sync::Arc;

use axum::{extract::State, response::Response};
use http::{HeaderMap, Method};

use crate::{
    domain::{DownloadRequest, DownloadSegment},
    error::ApiError,
    extract::{ValidatedPath, ValidatedQuery},
    resources::Resources,
};

// curl -v http://127.0.0.1:8000/file/photo-png
// => 200 OK, Content-Disposition: attachment; filename="photo.png"
// curl -v http://127.0.0.1:8000/file/photo-gif => 422 Unprocessable Entity
pub async fn download_file(
    State(resources): State<Arc<Resources>>,
    method: Method,
    headers: HeaderMap,
    ValidatedPath(segment): ValidatedPath<DownloadSegment>,
) -> Result<Response, ApiError> {
    send_file(&resources, &method, &headers, segment.into()).await
}

// curl -v 'http://127.0.0.1:8000/file?name=photo&extension=png'
pub async fn download_file_by_query(
    State(resources): State<Arc<Resources>>,
    method: Method,
    headers: HeaderMap,
    ValidatedQuery(request): ValidatedQuery<DownloadRequest>,
) -> Result<Response, ApiError> {
    send_file(&resources, &method, &headers, request).await
}

#[tracing::instrument(
    name = "Sending a file.",
    skip_all,
    fields(file_name = %request.file_name())
)]
async fn send_file(
    resources: &Resources,
    method: &Method,
    headers: &HeaderMap,
    request: DownloadRequest,
) -> Result<Response, ApiError> {
    resources
        .download(resources.download_source(), &request.file_name(), method, headers)
        .await
}
