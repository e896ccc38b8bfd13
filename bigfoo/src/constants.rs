use std::time::Duration;

/// Path every simulated user POSTs to.
pub const BIGFOO_PATH: &str = "/bigfoorequest";

/// Headers sent with every request.
pub const BIGFOO_HEADERS: [(&str, &str); 2] = [
    ("Content-type", "application/json"),
    ("Accept", "application/json"),
];

/// Payload file, relative to the working directory.
pub const DEFAULT_PAYLOAD_PATH: &str = "request16K.json";

/// Environment variable overriding [`DEFAULT_PAYLOAD_PATH`].
pub const PAYLOAD_ENV: &str = "BIGFOO_PAYLOAD";

pub const DEFAULT_HOST: &str = "http://localhost:8081";
pub const DEFAULT_USERS: usize = 20;
pub const DEFAULT_HATCH_RATE: f64 = 100.;
pub const DEFAULT_RUN_TIME: Duration = Duration::from_secs(180);

pub(crate) const SCENARIO_NAME: &str = "BigfooUser";
pub(crate) const TRANSACTION_NAME: &str = "bigfoorequest";
