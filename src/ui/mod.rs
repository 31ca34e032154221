pub mod header;
pub mod help;
pub mod process_table;
pub mod statusbar;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::App;

/// Draws the latest snapshot. Performs no sampling of its own.
pub fn draw<S>(frame: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    header::render(frame, chunks[0], &app.snapshot, &app.theme);

    let processes = app.visible_processes();
    process_table::render(
        frame,
        chunks[1],
        &processes,
        app.snapshot.processes.is_failed(),
        app.name_width,
        &app.theme,
    );

    statusbar::render(frame, chunks[2], &app.snapshot, &app.keybinds, &app.theme);

    // Help overlay is drawn last so it sits on top
    if app.show_help() {
        help::render(frame, frame.area(), &app.help_entries(), &app.theme);
    }
}
