use crate::constants::{
    DEFAULT_HATCH_RATE, DEFAULT_HOST, DEFAULT_PAYLOAD_PATH, DEFAULT_RUN_TIME, DEFAULT_USERS,
    PAYLOAD_ENV,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

/// Settings for a bigfoo load test.
///
/// Everything apart from `payload_path` is handed to goose as a *default*, so the matching goose
/// command-line flags (`--host`, `--users`, `--hatch-rate`, `--run-time`) still take precedence.
#[derive(Clone, Debug)]
pub struct AttackConfig {
    pub payload_path: PathBuf,
    pub host: String,
    pub users: usize,
    pub hatch_rate: f64,
    pub run_time: Duration,
}

impl Default for AttackConfig {
    fn default() -> Self {
        Self {
            payload_path: PathBuf::from(DEFAULT_PAYLOAD_PATH),
            host: DEFAULT_HOST.to_string(),
            users: DEFAULT_USERS,
            hatch_rate: DEFAULT_HATCH_RATE,
            run_time: DEFAULT_RUN_TIME,
        }
    }
}

impl AttackConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, with the payload path taken from `BIGFOO_PAYLOAD` when set.
    pub fn from_env() -> Self {
        Self::default().payload_override(std::env::var_os(PAYLOAD_ENV))
    }

    pub fn payload_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.payload_path = path.into();
        self
    }

    pub fn host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    pub fn users(mut self, users: usize) -> Self {
        self.users = users;
        self
    }

    pub fn hatch_rate(mut self, hatch_rate: f64) -> Self {
        self.hatch_rate = hatch_rate;
        self
    }

    pub fn run_time(mut self, run_time: Duration) -> Self {
        self.run_time = run_time;
        self
    }

    fn payload_override(self, value: Option<OsString>) -> Self {
        match value {
            Some(path) if !path.is_empty() => self.payload_path(path),
            _ => self,
        }
    }

    /// These values only apply where no goose flag was given.
    pub fn describe_defaults(&self) -> String {
        format!(
            "defaults (goose flags take precedence) host={}, users={}, hatch_rate={}, run_time={}",
            self.host,
            self.users,
            self.hatch_rate,
            humantime::format_duration(self.run_time),
        )
    }

    // Goose takes the hatch rate as a string so fractional rates survive.
    pub(crate) fn hatch_rate_arg(&self) -> String {
        self.hatch_rate.to_string()
    }

    // Goose counts run time in whole seconds and treats zero as "run until stopped", so any
    // fraction rounds up.
    pub(crate) fn run_time_secs(&self) -> usize {
        self.run_time.as_secs_f64().ceil() as usize
    }
}
