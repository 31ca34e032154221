use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::config::{Config, parse_key};
use crate::system::collector::Collector;
use crate::system::process::{ProcessRecord, top_by_memory};
use crate::system::snapshot::SystemSnapshot;
use crate::system::source::TelemetrySource;
use crate::system::sysinfo_source::SysinfoSource;
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Help,
}

#[derive(Debug, Clone)]
pub struct ResolvedKeybinds {
    pub quit: KeyCode,
    pub refresh: KeyCode,
    pub help: KeyCode,
}

impl ResolvedKeybinds {
    pub fn from_config(kb: &crate::config::KeybindsConfig) -> Self {
        Self {
            quit: parse_key(&kb.quit).unwrap_or(KeyCode::Char('q')),
            refresh: parse_key(&kb.refresh).unwrap_or(KeyCode::Char('r')),
            help: parse_key(&kb.help).unwrap_or(KeyCode::Char('?')),
        }
    }

    /// Returns (key_label, description) pairs for all configurable keybinds.
    pub fn help_entries(&self) -> Vec<(String, &'static str)> {
        vec![
            (key_label(self.quit), "Quit"),
            (key_label(self.refresh), "Refresh now"),
            (key_label(self.help), "Toggle help"),
            ("Ctrl+C".to_string(), "Quit (always)"),
        ]
    }
}

pub fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Bksp".to_string(),
        KeyCode::Delete => "Del".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => "?".to_string(),
    }
}

/// Owns the collector and the most recent snapshot. Drawing reads
/// `snapshot` only; every OS query happens inside `refresh_data`.
pub struct App<S = SysinfoSource> {
    pub running: bool,
    pub collector: Collector<S>,
    pub snapshot: SystemSnapshot,
    pub input_mode: InputMode,
    pub top_processes: usize,
    pub name_width: u16,
    pub theme: Theme,
    pub keybinds: ResolvedKeybinds,
}

impl App {
    pub fn new(config: &Config) -> Self {
        App::with_collector(config, Collector::new())
    }
}

impl<S: TelemetrySource> App<S> {
    /// Takes the first sample right away so there is something to draw.
    pub fn with_collector(config: &Config, mut collector: Collector<S>) -> Self {
        let snapshot = collector.refresh();

        App {
            running: true,
            collector,
            snapshot,
            input_mode: InputMode::Normal,
            top_processes: config.general.top_processes,
            name_width: config.general.name_width.max(4),
            theme: Theme::from_config(&config.colors.theme),
            keybinds: ResolvedKeybinds::from_config(&config.keybinds),
        }
    }

    /// Periodic sample; the only path that advances the CPU baseline.
    pub fn refresh_data(&mut self) {
        self.snapshot = self.collector.refresh();
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::Refresh => self.snapshot = self.collector.refresh_keep_cpu(),
            Action::ToggleHelp => {
                self.input_mode = if self.input_mode == InputMode::Help {
                    InputMode::Normal
                } else {
                    InputMode::Help
                };
            }
            Action::None => {}
        }
    }
}

impl<S> App<S> {
    /// The heaviest processes of the current snapshot, in display order.
    pub fn visible_processes(&self) -> Vec<&ProcessRecord> {
        top_by_memory(&self.snapshot.processes.records, self.top_processes)
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        // Ctrl+C always quits (hardwired safety)
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.input_mode {
            InputMode::Normal => self.map_key_normal(key),
            InputMode::Help => self.map_key_help(key),
        }
    }

    fn map_key_normal(&self, key: KeyEvent) -> Action {
        let code = key.code;
        let kb = &self.keybinds;

        if code == kb.quit {
            return Action::Quit;
        }
        if code == kb.refresh {
            return Action::Refresh;
        }
        if code == kb.help {
            return Action::ToggleHelp;
        }
        Action::None
    }

    fn map_key_help(&self, key: KeyEvent) -> Action {
        let code = key.code;
        // In help mode, only the help key and Esc dismiss, everything else is ignored
        if code == self.keybinds.help || code == KeyCode::Esc {
            return Action::ToggleHelp;
        }
        Action::None
    }

    pub fn show_help(&self) -> bool {
        self.input_mode == InputMode::Help
    }

    pub fn help_entries(&self) -> Vec<(String, &'static str)> {
        self.keybinds.help_entries()
    }
}
