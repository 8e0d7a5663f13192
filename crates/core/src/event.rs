use crate::metrics::MetricsWindow;

/// All messages that can flow through the application event channel.
///
/// Sources:
/// - Metrics feed task  → `WindowAdvanced`
/// - Analyst query task → `AnalystReply`
#[derive(Debug, Clone)]
pub enum Message {
    /// Fresh metrics window published by the background feed task.
    WindowAdvanced(MetricsWindow),
    /// Completed AI reply for the pending analyst query.
    AnalystReply(String),
}
