use chrono::{DateTime, Utc};

use crate::config::CountdownConfig;
use crate::Result;

const SECONDS_PER_DAY: i64 = 24 * 3600;

/// Whole days remaining until a fixed UTC instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    label: String,
    target: DateTime<Utc>,
}

impl Countdown {
    pub fn new(label: impl Into<String>, target: DateTime<Utc>) -> Self {
        Self {
            label: label.into(),
            target,
        }
    }

    pub fn from_config(config: &CountdownConfig) -> Result<Self> {
        let target = DateTime::parse_from_rfc3339(&config.target)?.with_timezone(&Utc);
        Ok(Self::new(config.label.clone(), target))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    /// Days left at `now`, rounded down; 0 once the target has passed
    pub fn days_until(&self, now: DateTime<Utc>) -> i64 {
        let remaining = self.target.signed_duration_since(now).num_seconds();
        if remaining <= 0 {
            return 0;
        }
        remaining / SECONDS_PER_DAY
    }

    pub fn days_remaining(&self) -> i64 {
        self.days_until(Utc::now())
    }
}
