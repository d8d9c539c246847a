use std::task::{Context, Poll};

use futures_util::future::BoxFuture;
use http::Request;
use tower::{Layer, Service};

/// 핸들러 호출 전후로 로그를 남기는 레이어
/// 응답과 오류는 그대로 전달한다.
///
/// ```ignore
/// routing::get(download_file).layer(LogLayer::new("download_file"))
/// ```
#[derive(Clone, Copy, Debug)]
pub struct LogLayer {
    target: &'static str,
}

impl LogLayer {
    pub fn new(target: &'static str) -> Self {
        Self { target }
    }
}

// 로그를 구현하는 서비스 구현
#[derive(Clone, Debug)]
pub struct LogService<S> {
    target: &'static str,
    service: S,
}

impl<S> Layer<S> for LogLayer {
    type Service = LogService<S>;

    fn layer(&self, service: S) -> Self::Service {
        LogService {
            target: self.target,
            service,
        }
    }
}

impl<S, B> Service<Request<B>> for LogService<S>
where
    S: Service<Request<B>>,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<S::Response, S::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&mut self, request: Request<B>) -> Self::Future {
        let target = self.target;
        tracing::info!(
            handler = target,
            method = %request.method(),
            path = %request.uri().path(),
            query = request.uri().query().unwrap_or_default(),
            "Calling handler."
        );

        let future = self.service.call(request);
        Box::pin(async move {
            let result = future.await;
            tracing::info!(
                handler = target,
                succeeded = result.is_ok(),
                "Handler finished."
            );
            result
        })
    }
}
