use std::{collections::HashMap, fs::File, path::PathBuf, str::FromStr};

use serde_aux::prelude::deserialize_number_from_string;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;

use crate::{resources::Resources, startup::Server};

#[derive(serde::Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub resources: ResourceSettings,
    pub log: LogSettings,
}

#[derive(serde::Deserialize)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

/// 디스크에 있는 정적 파일에 대한 설정
/// `directory`를 제외한 경로는 모두 `directory` 기준의 상대 경로다.
#[derive(serde::Deserialize)]
pub struct ResourceSettings {
    pub directory: String,
    pub mount_path: String,
    pub index_page: String,
    pub download_source: String,
    // `/search/{file_name}`에서 찾을 수 있는 이름과 파일
    pub catalog: HashMap<String, String>,
}

#[derive(serde::Deserialize)]
pub struct LogSettings {
    pub directory: String,
    pub file_name: String,
    pub level: String,
}

/// 애플리케이션이 사용할 수 있는 런타임 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Settings {
    pub fn get_settings() -> Result<Self, config::ConfigError> {
        let base_path = std::env::current_dir().map_err(|e| {
            config::ConfigError::Message(format!("Failed to determine the current directory: {e}"))
        })?;
        let settings_directory = base_path.join("settings");

        // 실행 환경을 식별한다.
        // 지정되지 않았으면 `local`로 기본 설정한다.
        let environment: Environment = std::env::var("APP_ENVIRONMENT")
            .unwrap_or("local".into())
            .as_str()
            .try_into()
            .map_err(config::ConfigError::Message)?;
        let environment_filename = format!("{}.json", environment.as_str());

        let settings = config::Config::builder()
            .add_source(config::File::from(settings_directory.join("base.json")))
            .add_source(config::File::from(
                settings_directory.join(environment_filename),
            ))
            // `APP_APPLICATION__PORT=5001` => `Settings.application.port`
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;
        settings.try_deserialize::<Settings>()
    }

    pub async fn build_server(&self) -> Result<Server, anyhow::Error> {
        Server::build(self).await
    }
}

impl ApplicationSettings {
    pub fn get_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub async fn get_listener(&self) -> Result<TcpListener, std::io::Error> {
        TcpListener::bind(self.get_address()).await
    }
}

impl ResourceSettings {
    pub fn get_resources(&self) -> Resources {
        Resources::from_settings(self)
    }
}

impl LogSettings {
    /// 설정된 레벨을 읽지 못하면 `INFO`를 사용한다.
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.level).unwrap_or(LevelFilter::INFO)
    }

    pub fn file_path(&self) -> PathBuf {
        PathBuf::from(&self.directory).join(&self.file_name)
    }

    /// 로그 파일을 추가 모드로 연다.
    /// 디렉터리가 없으면 만든다.
    pub fn open_file(&self) -> Result<File, std::io::Error> {
        std::fs::create_dir_all(&self.directory)?;
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.file_path())
    }
}

impl Environment {
    fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<&str> for Environment {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
