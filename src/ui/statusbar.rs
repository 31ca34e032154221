use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{ResolvedKeybinds, key_label};
use crate::system::snapshot::SystemSnapshot;
use crate::ui::theme::Theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    snapshot: &SystemSnapshot,
    keybinds: &ResolvedKeybinds,
    theme: &Theme,
) {
    let bg_style = Style::default().bg(theme.statusbar_bg);

    let quit = key_label(keybinds.quit);
    let refresh = key_label(keybinds.refresh);
    let help = key_label(keybinds.help);

    let mut spans = Vec::new();
    spans.extend(pill_spans(&quit, "Quit", theme));
    spans.extend(pill_spans(&refresh, "Refresh", theme));
    spans.extend(pill_spans(&help, "Help", theme));

    if let Some(warning) = warning(snapshot) {
        spans.push(Span::styled(
            format!("  {warning}"),
            Style::default()
                .fg(theme.status_err)
                .add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(bg_style), area);
}

/// Degraded data the user should know about, worst first.
pub fn warning(snapshot: &SystemSnapshot) -> Option<&'static str> {
    if snapshot.processes.is_failed() {
        Some("process list unavailable")
    } else if snapshot.has_stale_readings() {
        Some("some readings are stale")
    } else {
        None
    }
}

fn pill_spans<'a>(key: &str, desc: &'a str, theme: &Theme) -> Vec<Span<'a>> {
    vec![
        Span::raw(" "),
        Span::styled(
            format!(" {key} "),
            Style::default()
                .fg(theme.pill_key_fg)
                .bg(theme.pill_key_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {desc}"),
            Style::default().fg(theme.pill_desc_fg).bg(theme.surface_bg),
        ),
    ]
}
