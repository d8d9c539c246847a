use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use axum::{
    body::Body,
    response::{IntoResponse, Response},
};
use http::{header, HeaderMap, HeaderValue, Method, Request, StatusCode};
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::{error::ApiError, settings::ResourceSettings};

/// 설정에서 읽은 경로를 리소스 디렉터리 기준으로 풀어 둔 것
/// 요청 사이에 읽기만 하므로 `Arc`로 공유한다.
#[derive(Debug, Clone)]
pub struct Resources {
    directory: PathBuf,
    mount_path: String,
    index_page: PathBuf,
    download_source: PathBuf,
    catalog: HashMap<String, PathBuf>,
}

impl Resources {
    pub fn from_settings(settings: &ResourceSettings) -> Self {
        let directory = PathBuf::from(&settings.directory);
        let catalog = settings
            .catalog
            .iter()
            .map(|(name, path)| (name.clone(), directory.join(path)))
            .collect();
        Self {
            mount_path: settings.mount_path.clone(),
            index_page: directory.join(&settings.index_page),
            download_source: directory.join(&settings.download_source),
            catalog,
            directory,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn mount_path(&self) -> &str {
        &self.mount_path
    }

    pub fn index_page(&self) -> &Path {
        &self.index_page
    }

    pub fn download_source(&self) -> &Path {
        &self.download_source
    }

    /// 검색 가능한 이름이면 파일 경로를 반환한다.
    pub fn find(&self, name: &str) -> Option<&Path> {
        self.catalog.get(name).map(PathBuf::as_path)
    }

    /// 파일을 그대로 응답한다.
    /// `Content-Type`은 확장자로 추측한다.
    ///
    /// 들어온 요청의 메서드와 헤더를 `ServeFile`에 넘기므로
    /// `HEAD`, `Range`, `If-Modified-Since`가 그대로 처리된다.
    #[tracing::instrument(name = "Serving a file.", skip(self, headers))]
    pub async fn serve(
        &self,
        path: &Path,
        method: &Method,
        headers: &HeaderMap,
    ) -> Result<Response, ApiError> {
        let mut request = Request::new(Body::empty());
        *request.method_mut() = method.clone();
        *request.headers_mut() = headers.clone();

        let response = match ServeFile::new(path).oneshot(request).await {
            Ok(response) => response,
            Err(infallible) => match infallible {},
        };

        // 설정된 파일이 디스크에 없는 것은 클라이언트의 잘못이 아니다.
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::UnexpectedError(anyhow::anyhow!(
                "{} is missing on disk",
                path.display()
            )));
        }

        Ok(response.into_response())
    }

    /// 파일을 첨부 파일로 내려보낸다.
    pub async fn download(
        &self,
        path: &Path,
        file_name: &str,
        method: &Method,
        headers: &HeaderMap,
    ) -> Result<Response, ApiError> {
        let mut response = self.serve(path, method, headers).await?;

        let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{}\"", file_name))
            .map_err(|e| ApiError::UnexpectedError(e.into()))?;
        let headers = response.headers_mut();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/octet-stream"),
        );
        headers.insert(header::CONTENT_DISPOSITION, disposition);

        Ok(response)
    }
}
