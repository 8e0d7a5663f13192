use ratatui::style::Color;
use sentinel_inventory::security::Severity;
use sentinel_inventory::{LogLevel, NodeStatus};

/// Accent used for focus highlights and panel borders.
pub const ACCENT: Color = Color::Cyan;
/// Dimmed text (labels, footnotes).
pub const DIM: Color = Color::DarkGray;
/// Status-bar background.
pub const BAR_BG: Color = Color::Rgb(20, 20, 20);

#[must_use]
pub fn level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Info     => Color::Gray,
        LogLevel::Warning  => Color::Yellow,
        LogLevel::Error    => Color::Red,
        LogLevel::Critical => Color::LightRed,
    }
}

#[must_use]
pub fn status_color(status: NodeStatus) -> Color {
    match status {
        NodeStatus::Healthy  => Color::Green,
        NodeStatus::Degraded => Color::Yellow,
        NodeStatus::Offline  => Color::Red,
    }
}

#[must_use]
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::High   => Color::Red,
        Severity::Medium => Color::Yellow,
        Severity::Pass   => Color::Green,
    }
}
