use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::QueryRejection;
use http::StatusCode;

use crate::utils::error_chain_fmt;

// 핸들러와 추출기가 공통으로 사용하는 오류 타입
// 변형마다 응답 상태 코드가 정해진다.
#[derive(thiserror::Error)]
pub enum ApiError {
    // => 422
    #[error("Validation Error")]
    ValidationError(#[from] validator::ValidationErrors),

    // 추출기가 요청을 역직렬화하지 못한 경우, 상태 코드는 거부 사유를 따른다.
    #[error("Json Rejection")]
    JsonRejection(#[from] JsonRejection),

    #[error("Query Rejection")]
    QueryRejection(#[from] QueryRejection),

    #[error("Path Rejection")]
    PathRejection(#[from] PathRejection),

    // => 404
    #[error("{0} not found")]
    NotFound(String),

    // => 500
    #[error("Unexpected Error")]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::JsonRejection(rejection) => rejection.status(),
            ApiError::QueryRejection(_) => StatusCode::BAD_REQUEST,
            ApiError::PathRejection(rejection) => rejection.status(),
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::Span::current()
            .record("error", tracing::field::display(&self))
            .record("error_detail", tracing::field::debug(&self));

        let status = self.status();
        let body = match &self {
            ApiError::ValidationError(errors) => {
                serde_json::json!({ "detail": validation_detail(errors) })
            }
            ApiError::JsonRejection(rejection) => {
                serde_json::json!({ "detail": rejection.body_text() })
            }
            ApiError::QueryRejection(rejection) => {
                serde_json::json!({ "detail": rejection.to_string() })
            }
            ApiError::PathRejection(rejection) => {
                serde_json::json!({ "detail": rejection.body_text() })
            }
            ApiError::NotFound(_) => serde_json::json!({ "message": self.to_string() }),
            ApiError::UnexpectedError(_) => {
                tracing::error!(error = %self, error.debug = ?self);
                return status.into_response();
            }
        };
        tracing::warn!(error = %self, status = %status);

        (status, Json(body)).into_response()
    }
}

// 필드마다 위반한 규칙을 나열한다.
// `{"name": [{"code": "length", "message": null, "params": {...}}]}`
fn validation_detail(errors: &validator::ValidationErrors) -> serde_json::Value {
    let detail = errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let rules = errors
                .iter()
                .map(|e| {
                    serde_json::json!({
                        "code": e.code,
                        "message": e.message,
                        "params": e.params,
                    })
                })
                .collect();
            (field.to_string(), serde_json::Value::Array(rules))
        })
        .collect::<serde_json::Map<_, _>>();
    serde_json::Value::Object(detail)
}
