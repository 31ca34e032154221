use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    pub header_accent_bg: Color,
    pub header_accent_fg: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub label_fg: Color,
    pub table_header_fg: Color,
    pub stale_fg: Color,
    pub status_err: Color,
    pub statusbar_bg: Color,
    pub overlay_border: Color,
    pub pill_key_bg: Color,
    pub pill_key_fg: Color,
    pub pill_desc_fg: Color,
    pub surface_bg: Color,
}

impl Theme {
    pub fn from_config(theme_name: &str) -> Self {
        match theme_name.to_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn dark() -> Self {
        Theme {
            name: "dark",
            header_accent_bg: Color::Green,
            header_accent_fg: Color::Black,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            label_fg: Color::Yellow,
            table_header_fg: Color::Cyan,
            stale_fg: Color::DarkGray,
            status_err: Color::Red,
            statusbar_bg: Color::DarkGray,
            overlay_border: Color::DarkGray,
            pill_key_bg: Color::Green,
            pill_key_fg: Color::Black,
            pill_desc_fg: Color::White,
            surface_bg: Color::Reset,
        }
    }

    pub fn light() -> Self {
        Theme {
            name: "light",
            header_accent_bg: Color::Blue,
            header_accent_fg: Color::White,
            text_primary: Color::Black,
            text_secondary: Color::DarkGray,
            label_fg: Color::Rgb(140, 70, 0),
            table_header_fg: Color::Blue,
            stale_fg: Color::Gray,
            status_err: Color::Red,
            statusbar_bg: Color::Rgb(230, 230, 230),
            overlay_border: Color::Gray,
            pill_key_bg: Color::Blue,
            pill_key_fg: Color::White,
            pill_desc_fg: Color::Black,
            surface_bg: Color::Rgb(240, 240, 240),
        }
    }
}
