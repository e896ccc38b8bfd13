use metrics_exporter_prometheus::PrometheusBuilder;
use mock_service::MockConfig;
use std::net::SocketAddr;
use tracing::warn;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("mock_service=info,tower_http=info"));
    FmtSubscriber::builder().with_env_filter(filter).init();

    let metrics_addr: SocketAddr = "0.0.0.0:8082".parse()?;
    if let Err(err) = PrometheusBuilder::new()
        .with_http_listener(metrics_addr)
        .install()
    {
        warn!("Prometheus exporter unavailable: {err}");
    }

    tokio::spawn(mock_service::tps_measure_task());

    let addr: SocketAddr = "0.0.0.0:8081".parse()?;
    mock_service::run(addr, MockConfig::default()).await
}
