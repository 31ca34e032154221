use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

use crate::format::{format_duration, truncate_unicode};
use crate::system::process::ProcessRecord;
use crate::ui::theme::Theme;

const RAM_COLUMN_WIDTH: u16 = 10;
const UPTIME_COLUMN_WIDTH: u16 = 14;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    processes: &[&ProcessRecord],
    enumeration_failed: bool,
    name_width: u16,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.overlay_border))
        .title(Span::styled(
            format!(" Top {} by memory ", processes.len()),
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::BOLD),
        ));

    if enumeration_failed {
        let message = Paragraph::new(Span::styled(
            " Process table unavailable",
            Style::default().fg(theme.status_err),
        ))
        .block(block);
        frame.render_widget(message, area);
        return;
    }

    let header = Row::new(["PROCESS NAME", "RAM (MB)", "UPTIME"]).style(
        Style::default()
            .fg(theme.table_header_fg)
            .add_modifier(Modifier::BOLD),
    );

    let rows = processes
        .iter()
        .map(|p| Row::new(row_cells(p, name_width).map(Cell::from)));

    let table = Table::new(
        rows,
        [
            Constraint::Length(name_width),
            Constraint::Length(RAM_COLUMN_WIDTH),
            Constraint::Length(UPTIME_COLUMN_WIDTH),
        ],
    )
    .header(header)
    .style(Style::default().fg(theme.text_primary))
    .block(block);

    frame.render_widget(table, area);
}

/// Name truncated to the column, memory right-aligned, age as h/m/s.
pub fn row_cells(process: &ProcessRecord, name_width: u16) -> [String; 3] {
    [
        truncate_unicode(&process.name, name_width as usize),
        format!("{:>width$}", process.memory_mb, width = RAM_COLUMN_WIDTH as usize - 2),
        format_duration(process.age_seconds),
    ]
}
