use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::system::memory::MemoryInfo;

pub fn truncate_unicode(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            if max_width > 0 {
                result.push('\u{2026}');
            }
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

/// `3725` -> `1h 2m 5s`. Hours are not folded into days.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours}h {minutes}m {secs}s")
}

pub fn format_memory(info: &MemoryInfo) -> String {
    format!("{} MB free / {} MB total", info.free_mb, info.total_mb)
}

pub fn format_percent(percent: f32) -> String {
    format!("{percent:.1}%")
}
