use goose::metrics::GooseMetrics;
use std::fmt;
use std::time::Duration;

/// Minimal statistics for a finished load test
///
/// A sliver of what goose already reports; used for the closing log line and by callers which
/// want to assert on the outcome of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunStatistics {
    pub success_count: usize,
    pub fail_count: usize,
    pub elapsed: Duration,
}

impl RunStatistics {
    pub fn from_metrics(metrics: &GooseMetrics, elapsed: Duration) -> Self {
        let (success_count, fail_count) = metrics
            .requests
            .values()
            .fold((0, 0), |(success, fail), aggregate| {
                (success + aggregate.success_count, fail + aggregate.fail_count)
            });

        Self {
            success_count,
            fail_count,
            elapsed,
        }
    }

    pub fn requests(&self) -> usize {
        self.success_count + self.fail_count
    }

    pub fn error_rate(&self) -> f64 {
        match self.requests() {
            0 => 0.,
            total => self.fail_count as f64 / total as f64,
        }
    }

    pub fn tps(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0. {
            self.requests() as f64 / secs
        } else {
            0.
        }
    }
}

impl fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Whole milliseconds keep humantime from printing nanosecond noise.
        let elapsed = Duration::from_millis(self.elapsed.as_millis() as u64);
        write!(
            f,
            "Requests={}, Success={}, Fail={}, ErrorRate={:.2}, TPS={:.2}, Elapsed={}",
            self.requests(),
            self.success_count,
            self.fail_count,
            self.error_rate(),
            self.tps(),
            humantime::format_duration(elapsed),
        )
    }
}
