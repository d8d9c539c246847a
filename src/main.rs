use routing_demo_axum::{
    settings::Settings,
    telemetry::{get_tracing_subscriber, init_tracing_subscriber},
};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // 구성을 읽을 수 없으면 패닉에 빠진다.
    let settings = Settings::get_settings().expect("Failed to read configuration.");

    // 콘솔과 파일에 같은 형식으로 기록한다.
    let log_file = settings.log.open_file()?;
    let tracing_subscriber =
        get_tracing_subscriber(settings.log.level_filter(), std::io::stdout, Some(log_file));
    init_tracing_subscriber(tracing_subscriber);

    let server = settings.build_server().await?;
    tracing::info!(address = %server.local_addr()?, "Starting Server");
    server.run().await?;

    Ok(())
}
