use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, BorderType, Borders, Cell, Gauge, Paragraph, Row, Table, Tabs, Wrap,
    },
    Frame,
};
use sentinel_core::metrics::{Sample, IOPS_BOUNDS, LATENCY_BOUNDS, THROUGHPUT_BOUNDS};
use sentinel_inventory::NodeStatus;

use crate::app::{App, Role, View};
use crate::theme;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3), // view tabs
                Constraint::Min(10),   // active view
                Constraint::Length(1), // status bar
            ]
            .as_ref(),
        )
        .split(frame.size());

    render_tabs(frame, app, chunks[0]);
    match app.view {
        View::Overview => render_overview(frame, app, chunks[1]),
        View::Security => render_security(frame, app, chunks[1]),
        View::Analyst  => render_analyst(frame, app, chunks[1]),
    }
    render_status_bar(frame, app, chunks[2]);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = View::ALL.iter().map(|view| Line::from(view.title())).collect();
    let selected = View::ALL.iter().position(|view| *view == app.view).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" SENTINEL Storage Console "),
        );
    frame.render_widget(tabs, area);
}

// ── Overview ──────────────────────────────────────────────────────────────────

fn render_overview(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(5), // metric cards
                Constraint::Min(8),    // trend charts
                Constraint::Length(7), // node table
            ]
            .as_ref(),
        )
        .split(area);

    render_metric_cards(frame, app, rows[0]);
    render_trend_charts(frame, app, rows[1]);
    render_node_table(frame, app, rows[2]);
}

fn render_metric_cards(frame: &mut Frame, app: &App, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4].as_ref())
        .split(area);

    let latest = app.window.latest();

    let iops = Paragraph::new(vec![
        Line::from(Span::styled("Total IOPS", Style::default().fg(theme::DIM))),
        Line::from(Span::styled(
            format_thousands(latest.iops),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("dynamic load", Style::default().fg(Color::Green))),
    ])
    .block(card_block());
    frame.render_widget(iops, cards[0]);

    // High latency gets flagged in yellow, matching the alerting threshold.
    let latency_color = if latest.latency > 3.0 { Color::Yellow } else { Color::White };
    let latency = Paragraph::new(vec![
        Line::from(Span::styled("Avg Latency", Style::default().fg(theme::DIM))),
        Line::from(Span::styled(
            format!("{:.2}ms", latest.latency),
            Style::default().fg(latency_color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("optimal range", Style::default().fg(Color::Green))),
    ])
    .block(card_block());
    frame.render_widget(latency, cards[1]);

    let used: f64 = app.nodes.iter().map(|n| n.used_tb).sum();
    let capacity: f64 = app.nodes.iter().map(|n| n.capacity_tb).sum();
    let pool = Gauge::default()
        .block(card_block().title(" Storage Used "))
        .gauge_style(Style::default().fg(Color::LightRed))
        .ratio(if capacity > 0.0 { used / capacity } else { 0.0 })
        .label(format!("{:.1} / {:.1} PB", used / 1_000.0, capacity / 1_000.0));
    frame.render_widget(pool, cards[2]);

    let degraded: Vec<_> = app
        .nodes
        .iter()
        .filter(|n| n.status != NodeStatus::Healthy)
        .collect();
    let footnote = degraded
        .first()
        .map(|n| format!("{}: {}", n.id, n.raid_status))
        .unwrap_or_else(|| "all nodes nominal".to_string());
    let alerts = Paragraph::new(vec![
        Line::from(Span::styled("Active Alerts", Style::default().fg(theme::DIM))),
        Line::from(Span::styled(
            degraded.len().to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(footnote, Style::default().fg(theme::DIM))),
    ])
    .block(card_block());
    frame.render_widget(alerts, cards[3]);
}

fn render_trend_charts(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::ACCENT))
        .title(" Performance Trend (rolling 24h) ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ]
            .as_ref(),
        )
        .split(inner);

    render_series(frame, charts[0], " IOPS ", Color::Blue, app.window.samples(), |s| s.iops, IOPS_BOUNDS);
    render_series(frame, charts[1], " Throughput (MB/s) ", Color::Green, app.window.samples(), |s| s.throughput, THROUGHPUT_BOUNDS);
    render_series(frame, charts[2], " Latency (ms) ", Color::Magenta, app.window.samples(), |s| s.latency, LATENCY_BOUNDS);
}

fn render_series(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    color: Color,
    samples: &[Sample],
    value: impl Fn(&Sample) -> f64,
    (lo, hi): (f64, f64),
) {
    let canvas = Canvas::default()
        .block(Block::default().title(title).title_style(Style::default().fg(color)))
        .marker(Marker::Braille)
        .x_bounds([0.0, samples.len() as f64])
        .y_bounds([lo, hi])
        .paint(|ctx| {
            for (i, sample) in samples.iter().enumerate() {
                ctx.draw(&CanvasLine {
                    x1: i as f64,
                    y1: lo,
                    x2: i as f64,
                    y2: value(sample),
                    color,
                });
            }
        });
    frame.render_widget(canvas, area);
}

fn render_node_table(frame: &mut Frame, app: &App, area: Rect) {
    let header_cells = ["Node", "Name", "Status", "Capacity", "Temp", "RAID", "Firmware", "Disks"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)));
    let header = Row::new(header_cells).height(1);

    let rows = app.nodes.iter().map(|node| {
        let disks_color = if node.has_degraded_disks() { Color::Yellow } else { Color::Green };
        Row::new(vec![
            Cell::from(node.id.clone()),
            Cell::from(node.name.clone()),
            Cell::from(node.status.badge())
                .style(Style::default().fg(theme::status_color(node.status))),
            Cell::from(format!(
                "{:>3.0}% ({:.0}/{:.0} TB)",
                node.capacity_fraction() * 100.0,
                node.used_tb,
                node.capacity_tb
            )),
            Cell::from(format!("{:.0}C", node.temp_c)),
            Cell::from(node.raid_status.clone()),
            Cell::from(node.firmware.clone()),
            Cell::from(format!("{}/{} online", node.online_disks, node.total_disks))
                .style(Style::default().fg(disks_color)),
        ])
        .height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(7),
            Constraint::Min(20),
            Constraint::Length(9),
            Constraint::Length(19),
            Constraint::Length(5),
            Constraint::Min(20),
            Constraint::Length(9),
            Constraint::Length(13),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Detailed Node Status "),
    );
    frame.render_widget(table, area);
}

// ── Security ──────────────────────────────────────────────────────────────────

fn render_security(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(8)].as_ref())
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(34), Constraint::Percentage(33), Constraint::Percentage(33)].as_ref())
        .split(rows[0]);

    for (card, chunk) in app.posture.cards.iter().zip(cards.iter()) {
        let widget = Paragraph::new(vec![
            Line::from(Span::styled(card.area.clone(), Style::default().fg(theme::DIM))),
            Line::from(Span::styled(
                card.headline.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(card.detail.clone(), Style::default().fg(theme::DIM))),
        ])
        .block(card_block());
        frame.render_widget(widget, *chunk);
    }

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(rows[1]);

    let findings: Vec<Line> = app
        .posture
        .findings
        .iter()
        .map(|finding| {
            Line::from(vec![
                Span::styled(
                    format!("[{:^6}] ", finding.severity.badge()),
                    Style::default()
                        .fg(theme::severity_color(finding.severity))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(finding.summary.clone()),
            ])
        })
        .collect();
    let assessment = Paragraph::new(findings).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" Vulnerability Assessment (Scan {}) ", app.posture.scan_id)),
    );
    frame.render_widget(assessment, panels[0]);

    let compliance_rows = app.posture.compliance.iter().map(|item| {
        Row::new(vec![
            Cell::from(item.framework.clone())
                .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Cell::from(item.detail.clone()).style(Style::default().fg(theme::DIM)),
            Cell::from(item.status.clone()).style(Style::default().fg(Color::Green)),
        ])
        .height(1)
    });
    let compliance = Table::new(
        compliance_rows,
        [Constraint::Length(15), Constraint::Min(20), Constraint::Length(10)],
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Compliance Status "),
    );
    frame.render_widget(compliance, panels[1]);
}

// ── Analyst ───────────────────────────────────────────────────────────────────

fn render_analyst(frame: &mut Frame, app: &App, area: Rect) {
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)].as_ref())
        .split(area);

    let log_lines: Vec<Line> = app
        .logs
        .iter()
        .map(|entry| {
            let mut style = Style::default().fg(theme::level_color(entry.level));
            if entry.level.is_anomalous() {
                style = style.add_modifier(Modifier::BOLD);
            }
            Line::from(Span::styled(entry.render(), style))
        })
        .collect();
    let logs = Paragraph::new(log_lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" System Logs (Live) "),
    );
    frame.render_widget(logs, panes[0]);

    let chat_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(3)].as_ref())
        .split(panes[1]);

    let mut lines: Vec<Line> = Vec::new();
    for message in &app.chat {
        let (tag, color) = match message.role {
            Role::User  => ("you", Color::Blue),
            Role::Model => ("sentinel", Color::Green),
        };
        lines.push(Line::from(Span::styled(
            format!("{} {}", message.timestamp.format("%H:%M:%S"), tag),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        for text_line in message.text.lines() {
            lines.push(Line::from(format!("  {text_line}")));
        }
        lines.push(Line::from(""));
    }
    if app.awaiting_reply {
        lines.push(Line::from(Span::styled(
            "Analyzing log patterns...",
            Style::default().fg(theme::DIM),
        )));
    }

    // Pin the view to the latest exchange.
    let visible = chat_chunks[0].height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(visible) as u16;
    let history = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Diagnostics Chat "),
        );
    frame.render_widget(history, chat_chunks[0]);

    let prompt_title = if app.awaiting_reply {
        " waiting for analysis "
    } else {
        " Ask about system latency, RAID status, or backup integrity "
    };
    let input = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Span::raw(app.input.as_str()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(prompt_title),
    );
    frame.render_widget(input, chat_chunks[1]);
}

// ── Status bar ────────────────────────────────────────────────────────────────

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let latest = app.window.latest();
    let content = Line::from(vec![
        Span::styled(
            " LIVE UPDATES: ACTIVE ",
            Style::default()
                .bg(Color::Green)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled("slot ", Style::default().fg(theme::DIM)),
        Span::raw(latest.label()),
        Span::raw(" | "),
        Span::styled("range ", Style::default().fg(theme::DIM)),
        Span::raw(format!(
            "iops {:>3.0}%  lat {:>3.0}%  tput {:>3.0}%",
            latest.iops_fraction() * 100.0,
            latest.latency_fraction() * 100.0,
            latest.throughput_fraction() * 100.0
        )),
        Span::raw(" | "),
        Span::styled("SOC 2", Style::default().fg(Color::Green)),
        Span::raw("  "),
        Span::styled("ISO 27001", Style::default().fg(Color::Blue)),
        Span::raw(" | Tab: switch view | Esc: quit | "),
        Span::raw(Local::now().format("%H:%M:%S").to_string()),
    ]);
    frame.render_widget(
        Paragraph::new(content).style(Style::default().bg(theme::BAR_BG)),
        area,
    );
}

fn card_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

/// Format a count with thousands separators, e.g. `18432` → `"18,432"`.
fn format_thousands(value: f64) -> String {
    let digits = (value.round() as i64).to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_thousands_groups_digits() {
        assert_eq!(format_thousands(18_432.4), "18,432");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1_000_000.0), "1,000,000");
    }
}
