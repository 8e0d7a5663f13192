use serde::{Deserialize, Serialize};

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info     => "INFO",
            LogLevel::Warning  => "WARN",
            LogLevel::Error    => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    /// `true` for levels worth surfacing prominently.
    #[must_use]
    pub fn is_anomalous(&self) -> bool {
        matches!(self, LogLevel::Error | LogLevel::Critical)
    }
}

/// One line from the recent-activity log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub component: String,
    pub message: String,
}

impl LogEntry {
    fn new(timestamp: &str, level: LogLevel, component: &str, message: &str) -> Self {
        Self {
            timestamp: timestamp.to_string(),
            level,
            component: component.to_string(),
            message:   message.to_string(),
        }
    }

    /// Canonical single-line rendering, e.g.
    /// `[2023-10-27 08:00:01] INFO SAN-01: Volume vol_users mounted successfully.`
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "[{}] {} {}: {}",
            self.timestamp,
            self.level.as_str(),
            self.component,
            self.message
        )
    }
}

/// The recent log excerpt shown in the console and handed to the AI analyst
/// as context.
#[must_use]
pub fn recent_entries() -> Vec<LogEntry> {
    vec![
        LogEntry::new(
            "2023-10-27 08:00:01",
            LogLevel::Info,
            "SAN-01",
            "Volume vol_users mounted successfully.",
        ),
        LogEntry::new(
            "2023-10-27 08:15:23",
            LogLevel::Warning,
            "OBJ-01",
            "High latency detected on shard-42 (250ms).",
        ),
        LogEntry::new(
            "2023-10-27 08:16:05",
            LogLevel::Error,
            "OBJ-01",
            "Connection timeout to replication peer 192.168.1.55.",
        ),
        LogEntry::new(
            "2023-10-27 08:20:00",
            LogLevel::Info,
            "NAS-01",
            "Snapshot backup_daily_01 created.",
        ),
        LogEntry::new(
            "2023-10-27 08:45:12",
            LogLevel::Critical,
            "RAID-CTRL",
            "Drive 3 in Slot 2 reporting SMART errors. Rebuild pending.",
        ),
        LogEntry::new(
            "2023-10-27 09:00:00",
            LogLevel::Info,
            "SYSTEM",
            "Scheduled maintenance tasks started.",
        ),
    ]
}

/// Join entries into the free-text context blob consumed by the analyst.
#[must_use]
pub fn render_context(entries: &[LogEntry]) -> String {
    entries
        .iter()
        .map(LogEntry::render)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_blob_carries_every_line() {
        let entries = recent_entries();
        let blob = render_context(&entries);

        assert_eq!(blob.lines().count(), entries.len());
        assert!(blob.contains("CRITICAL RAID-CTRL: Drive 3 in Slot 2"));
        assert!(blob.contains("[2023-10-27 08:00:01] INFO SAN-01:"));
    }

    #[test]
    fn anomalous_levels_flagged() {
        assert!(LogLevel::Critical.is_anomalous());
        assert!(LogLevel::Error.is_anomalous());
        assert!(!LogLevel::Warning.is_anomalous());
    }
}
