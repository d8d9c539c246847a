use std::{
    future::{Future, IntoFuture},
    net::SocketAddr,
    sync::Arc,
};

use axum::{body::Body, routing, Router};
use http::Request;
use tokio::net::TcpListener;
use tower_http::{
    services::ServeDir,
    trace::{MakeSpan, TraceLayer},
};
use tracing::{Level, Span};

use crate::{
    layers::LogLayer,
    resources::Resources,
    routes::{
        download_file, download_file_by_query, echo_request, health_check, hello, html, index,
        json, search_file, text, xml,
    },
    settings::Settings,
};

pub struct Server {
    tcp_listener: TcpListener,
    router: Router,
}

impl Server {
    pub async fn build(settings: &Settings) -> Result<Self, anyhow::Error> {
        let tcp_listener = settings.application.get_listener().await?;
        let resources = settings.resources.get_resources();
        Ok(Self::new(tcp_listener, resources))
    }

    pub fn new(tcp_listener: TcpListener, resources: Resources) -> Self {
        Self {
            tcp_listener,
            router: build_router(resources),
        }
    }

    // 포트를 0으로 지정하면 OS가 할당한 주소를 여기서 알 수 있다.
    pub fn local_addr(&self) -> Result<SocketAddr, std::io::Error> {
        self.tcp_listener.local_addr()
    }

    // `run`은 더 이상 바이너리 엔트리 포인트가 아니므로, 퓨처를 반환해서 테스트에서 `tokio::spawn`할 수 있다.
    pub fn run(self) -> impl Future<Output = Result<(), std::io::Error>> {
        axum::serve(self.tcp_listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .into_future()
    }
}

pub fn build_router(resources: Resources) -> Router {
    let mount_path = resources.mount_path().to_owned();
    let static_files = ServeDir::new(resources.directory());

    Router::new()
        .route("/", routing::get(index))
        .route("/health_check", routing::get(health_check))
        // `/file/{name}-{type}`: 한 세그먼트를 추출기가 나눈다.
        .route(
            "/file/:file",
            routing::get(download_file).layer(LogLayer::new("download_file")),
        )
        .route(
            "/file",
            routing::get(download_file_by_query).layer(LogLayer::new("download_file_by_query")),
        )
        .route(
            "/search/:file_name",
            routing::get(search_file).layer(LogLayer::new("search_file")),
        )
        .route(
            "/your/req/:test_p",
            routing::get(echo_request).layer(LogLayer::new("echo_request")),
        )
        .route("/text", routing::get(text))
        .route("/html", routing::get(html))
        .route("/json", routing::get(json))
        .route("/get/json", routing::get(json))
        .route("/xml", routing::get(xml))
        .route("/get/xml", routing::get(xml))
        .route(
            "/hello",
            routing::post(hello).layer(LogLayer::new("hello")),
        )
        .nest_service(&mount_path, static_files)
        .layer(TraceLayer::new_for_http().make_span_with(AddRequestID))
        .with_state(Arc::new(resources))
}

// Ctrl-C를 받으면 처리 중인 요청을 마치고 종료한다.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for the shutdown signal.");
        // 신호를 받을 수 없으면 종료하지 않는다.
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down the server.");
}

// https://docs.rs/tower-http/0.5.2/src/tower_http/trace/make_span.rs.html#65-68의 코드를 참조했음
#[derive(Clone)]
struct AddRequestID;

impl MakeSpan<Body> for AddRequestID {
    fn make_span(&mut self, request: &Request<Body>) -> Span {
        tracing::span!(
            Level::INFO,
            "request",
            request_id = %uuid::Uuid::new_v4(),
            method = %request.method(),
            uri = %request.uri(),
            version = ?request.version(),
            error = tracing::field::Empty,
            error_detail = tracing::field::Empty,
        )
    }
}
