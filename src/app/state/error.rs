use chrono::{DateTime, Duration, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
}

/// Transient message shown in the footer until it expires.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub severity: Severity,
}

impl Notice {
    const TTL_SECS: i64 = 4;

    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: Local::now(),
            severity,
        }
    }

    pub fn is_expired(&self, now: DateTime<Local>) -> bool {
        now - self.timestamp >= Duration::seconds(Self::TTL_SECS)
    }
}
