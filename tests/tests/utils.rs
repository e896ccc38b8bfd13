use goose::config::GooseConfiguration;
use gumdrop::Options;
use mock_service::{MockConfig, Recorder};
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::error;
use tracing_subscriber::FmtSubscriber;

#[allow(unused)]
pub fn init() {
    static ONCE_LOCK: OnceLock<()> = OnceLock::new();

    ONCE_LOCK.get_or_init(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            default_panic(info);
            error!("Panic occurred: {info:?}");
        }));

        let _ = FmtSubscriber::builder()
            .with_env_filter("bigfoo=debug,mock_service=debug,goose=info")
            .try_init();
    });
}

/// Start a mock service on an ephemeral port, returning its base URL.
#[allow(unused)]
pub async fn mock(config: MockConfig) -> (String, Recorder) {
    let (addr, recorder) = mock_service::spawn("127.0.0.1:0".parse().unwrap(), config)
        .await
        .unwrap();
    (format!("http://{addr}"), recorder)
}

/// The payload shipped next to the bigfoo binary.
#[allow(unused)]
pub fn shipped_payload() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("bigfoo")
        .join("request16K.json")
}

/// A short, quiet goose run against `host`.
#[allow(unused)]
pub fn goose_configuration(host: &str, users: usize, run_time_secs: usize) -> GooseConfiguration {
    let users = users.to_string();
    let run_time = run_time_secs.to_string();
    let args = [
        "--quiet",
        "--host",
        host,
        "--users",
        users.as_str(),
        "--hatch-rate",
        "10",
        "--run-time",
        run_time.as_str(),
        "--no-reset-metrics",
        "--no-telnet",
        "--no-websocket",
    ];

    GooseConfiguration::parse_args_default(&args[..]).unwrap()
}
