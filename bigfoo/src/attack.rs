//! Bigfoo load test runner
//!
//! Loads the payload, hands the single scenario to goose and waits for goose to finish. Goose
//! owns everything in between: spawning users at the hatch rate, pacing, stopping after the run
//! time, and collecting metrics.
use crate::config::AttackConfig;
use crate::error::BigfooError;
use crate::payload::Payload;
use crate::scenario::bigfoo_scenario;
use crate::stats::RunStatistics;
use crate::transaction::BigfooRequest;
use goose::config::GooseConfiguration;
use goose::prelude::*;
use std::sync::Arc;
use std::time::Instant;
#[allow(unused)]
use tracing::{debug, error, info, instrument, warn};

/// Default bigfoo runner.
///
/// # Example
///
/// ```no_run
/// use bigfoo::prelude::*;
///
/// #[tokio::main]
/// async fn main() -> Result<(), BigfooError> {
///     let stats = BigfooAttack::from_env().run().await?;
///     println!("{stats}");
///     Ok(())
/// }
/// ```
pub struct BigfooAttack {
    config: AttackConfig,
    configuration: Option<GooseConfiguration>,
}

impl Default for BigfooAttack {
    fn default() -> Self {
        Self::new(AttackConfig::default())
    }
}

impl BigfooAttack {
    pub fn new(config: AttackConfig) -> Self {
        BigfooAttack {
            config,
            configuration: None,
        }
    }

    /// Default settings, honoring `BIGFOO_PAYLOAD`. Goose flags are parsed from the process
    /// arguments when the attack runs.
    ///
    /// ```ignore
    /// $ BIGFOO_PAYLOAD=small.json ./bigfoo -u 50 -r 10 -t 5m -H http://10.0.0.7:8081
    /// ```
    pub fn from_env() -> Self {
        Self::new(AttackConfig::from_env())
    }

    /// Use an explicit goose configuration instead of parsing process arguments.
    pub fn with_configuration(mut self, configuration: GooseConfiguration) -> Self {
        self.configuration = Some(configuration);
        self
    }

    pub fn config(&self) -> &AttackConfig {
        &self.config
    }

    #[instrument(name = "bigfoo", skip_all, fields(payload = %self.config.payload_path.display()))]
    pub async fn run(self) -> Result<RunStatistics, BigfooError> {
        // Nothing is sent unless the payload is in memory first.
        let payload = Payload::load(&self.config.payload_path).await?;
        let request = Arc::new(BigfooRequest::new(payload));

        let attack = match self.configuration {
            Some(configuration) => GooseAttack::initialize_with_config(configuration)?,
            None => GooseAttack::initialize()?,
        };

        info!("Starting load test with {}", self.config.describe_defaults());

        let start = Instant::now();
        let metrics = attack
            .set_default(GooseDefault::Host, self.config.host.as_str())?
            .set_default(GooseDefault::Users, self.config.users)?
            .set_default(GooseDefault::HatchRate, self.config.hatch_rate_arg().as_str())?
            .set_default(GooseDefault::RunTime, self.config.run_time_secs())?
            .register_scenario(bigfoo_scenario(request))
            .execute()
            .await?;

        let stats = RunStatistics::from_metrics(&metrics, start.elapsed());
        info!("Load test complete: {stats}");
        if stats.requests() == 0 {
            warn!("No requests were recorded.");
        }

        Ok(stats)
    }
}
