use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::format::{format_duration, format_memory, format_percent};
use crate::system::snapshot::{Reading, SystemSnapshot};
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, snapshot: &SystemSnapshot, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.overlay_border))
        .title(Span::styled(
            " sysglance ",
            Style::default()
                .fg(theme.header_accent_fg)
                .bg(theme.header_accent_bg)
                .add_modifier(Modifier::BOLD),
        ));

    let lines = vec![
        metric_line(
            "CPU Usage",
            reading_text(&snapshot.cpu_usage_percent, |p| format_percent(*p)),
            snapshot.cpu_usage_percent.is_stale(),
            theme,
        ),
        metric_line(
            "Memory",
            reading_text(&snapshot.memory, format_memory),
            snapshot.memory.is_stale(),
            theme,
        ),
        metric_line(
            "Uptime",
            reading_text(&snapshot.uptime_seconds, |s| format_duration(*s)),
            snapshot.uptime_seconds.is_stale(),
            theme,
        ),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// `N/A` for readings that never arrived; stale values are marked.
pub fn reading_text<T>(reading: &Reading<T>, format: impl Fn(&T) -> String) -> String {
    match reading {
        Reading::Fresh(v) => format(v),
        Reading::Stale(v) => format!("{} (stale)", format(v)),
        Reading::Unavailable => "N/A".to_string(),
    }
}

fn metric_line(label: &str, value: String, stale: bool, theme: &Theme) -> Line<'static> {
    let value_fg = if stale {
        theme.stale_fg
    } else {
        theme.text_primary
    };
    Line::from(vec![
        Span::styled(
            format!(" {label}: "),
            Style::default()
                .fg(theme.label_fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(value, Style::default().fg(value_fg)),
    ])
}
