use std::{
    fmt,
    fs::File,
    str::FromStr,
    sync::{Mutex, Once},
};

use tracing::{dispatcher::set_global_default, level_filters::LevelFilter, Event, Subscriber};
use tracing_log::LogTracer;
use tracing_subscriber::{
    fmt::{
        format::Writer, FmtContext, FormatEvent, FormatFields, FormattedFields, MakeWriter,
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    EnvFilter, Registry,
};

/// 여러 레이어들을 하나의 `tracing` subscriber로 구성한다.
/// 콘솔(`sink`)에 쓰고, `log_file`이 있으면 같은 형식으로 파일에도 쓴다.
///
/// # 구현 노트
///
/// `impl Subscriber`를 반환 타입으로 사용해서 반환된 subscriber의 실제 타입에 관한 설명을 피한다.
/// 반환된 subscriber를 `init_tracing_subscriber`로 나중에 전달하기 위해 명시적으로 `Send`이고 `Sync`임을 알려야 한다.
pub fn get_tracing_subscriber<Sink>(
    env_filter: LevelFilter,
    sink: Sink,
    log_file: Option<File>,
) -> impl Subscriber + Send + Sync
where
    // higher-ranked trait bound: 모든 라이프타임 `'a`에 대해 `MakeWriter`를 구현한다.
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    // RUST_LOG 환경 변수가 설정되어 있지 않으면 `env_filter` 레벨 및 그 이상을 출력한다.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or(
        EnvFilter::from_str("tower_http=debug,axum::rejection=trace")
            .unwrap_or_default()
            .add_directive(env_filter.into()),
    );

    // 두 레이어가 span 필드 버퍼를 공유하므로 둘 다 ANSI 색상 코드를 끈다.
    let console_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .event_format(LineFormat)
        .with_writer(sink);
    // `Option<Layer>`도 `Layer`다.
    let file_layer = log_file.map(|file| {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .event_format(LineFormat)
            .with_writer(Mutex::new(file))
    });

    Registry::default()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
}

/// subscriber를 글로벌 기본값으로 등록해서 span 데이터를 처리한다.
/// 한차례만 실행된다.
pub fn init_tracing_subscriber(tracing_subscriber: impl Subscriber + Send + Sync) {
    static ONCE: Once = Once::new();

    ONCE.call_once(|| {
        set_global_default(tracing_subscriber.into()).expect("Failed to set subscriber.");
        LogTracer::builder().init().expect("Failed to set logger.");
    })
}

/// `timestamp [level] module [line: N] >> message` 형식의 한 줄 로그
///
/// 이벤트가 span 안에서 발생하면 바깥 span부터 `name{fields}: ` 형태로 메시지 앞에 붙는다.
/// 요청 ID나 `#[tracing::instrument]`가 기록한 핸들러 인자가 여기에 나온다.
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();
        write!(
            writer,
            "{} [{}] {} ",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            metadata.level(),
            metadata.module_path().unwrap_or_else(|| metadata.target()),
        )?;
        match metadata.line() {
            Some(line) => write!(writer, "[line: {}] >> ", line)?,
            None => write!(writer, "[line: -] >> ")?,
        }

        if let Some(scope) = ctx.event_scope() {
            for span in scope.from_root() {
                write!(writer, "{}", span.name())?;
                let extensions = span.extensions();
                if let Some(fields) = extensions.get::<FormattedFields<N>>() {
                    if !fields.is_empty() {
                        write!(writer, "{{{}}}", fields)?;
                    }
                }
                write!(writer, ": ")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// 테스트에서 기록된 로그를 읽기 위한 `MakeWriter`
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct LogBuffer(std::sync::Arc<Mutex<Vec<u8>>>);

#[cfg(test)]
impl LogBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

#[cfg(test)]
impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
