use once_cell::sync::Lazy;
use regex::Regex;
use validator::{Validate, ValidationErrors};

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("Invalid file name pattern."));

static EXTENSION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i:jpg|jpeg|png|bmp)$").expect("Invalid extension pattern."));

/// 내려받을 파일의 이름과 확장자
/// 쿼리 형식(`/file?name=..&extension=..`)은 이 타입으로 바로 역직렬화된다.
#[derive(Debug, Clone, serde::Deserialize, Validate)]
pub struct DownloadRequest {
    #[validate(length(min = 1), regex(path = *NAME_PATTERN))]
    pub name: String,
    #[validate(length(min = 3, max = 4), regex(path = *EXTENSION_PATTERN))]
    pub extension: String,
}

impl DownloadRequest {
    /// 응답의 `Content-Disposition`에 실을 파일 이름
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.extension.to_lowercase())
    }
}

/// 경로 형식(`/file/{name}-{type}`)의 세그먼트
/// 이름에도 `-`가 올 수 있으므로 마지막 `-`를 기준으로 나눈다.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(try_from = "String")]
pub struct DownloadSegment(DownloadRequest);

impl TryFrom<String> for DownloadSegment {
    type Error = String;
    fn try_from(segment: String) -> Result<Self, Self::Error> {
        match segment.rsplit_once('-') {
            Some((name, extension)) => Ok(Self(DownloadRequest {
                name: name.to_owned(),
                extension: extension.to_owned(),
            })),
            None => Err(format!(
                "`{}` does not match the `{{name}}-{{type}}` form.",
                segment
            )),
        }
    }
}

impl Validate for DownloadSegment {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.0.validate()
    }
}

impl From<DownloadSegment> for DownloadRequest {
    fn from(segment: DownloadSegment) -> Self {
        segment.0
    }
}
