use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    Dark,
    Light,
}

impl ThemeKind {
    pub fn from_config_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "light" => ThemeKind::Light,
            _ => ThemeKind::Dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub kind: ThemeKind,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub overlay_border: Color,
    pub focus_border: Color,
    pub header_accent_fg: Color,
    pub header_accent_bg: Color,
    pub value_fg: Color,
    pub statusbar_bg: Color,
    pub surface_bg: Color,
    pub pill_key_fg: Color,
    pub pill_key_bg: Color,
    pub pill_desc_fg: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            kind: ThemeKind::Dark,
            text_primary: Color::Rgb(0xcd, 0xd6, 0xf4),
            text_secondary: Color::Rgb(0x9a, 0xa5, 0xce),
            overlay_border: Color::Rgb(0x58, 0x5b, 0x70),
            focus_border: Color::Rgb(0xcb, 0xa6, 0xf7),
            header_accent_fg: Color::Rgb(0x1e, 0x1e, 0x2e),
            header_accent_bg: Color::Rgb(0x89, 0xb4, 0xfa),
            value_fg: Color::Rgb(0xa6, 0xe3, 0xa1),
            statusbar_bg: Color::Rgb(0x18, 0x18, 0x25),
            surface_bg: Color::Rgb(0x31, 0x32, 0x44),
            pill_key_fg: Color::Rgb(0x1e, 0x1e, 0x2e),
            pill_key_bg: Color::Rgb(0xf9, 0xe2, 0xaf),
            pill_desc_fg: Color::Rgb(0xba, 0xc2, 0xde),
        }
    }

    pub fn light() -> Self {
        Theme {
            kind: ThemeKind::Light,
            text_primary: Color::Rgb(0x4c, 0x4f, 0x69),
            text_secondary: Color::Rgb(0x6c, 0x6f, 0x85),
            overlay_border: Color::Rgb(0x9c, 0xa0, 0xb0),
            focus_border: Color::Rgb(0x88, 0x39, 0xef),
            header_accent_fg: Color::Rgb(0xef, 0xf1, 0xf5),
            header_accent_bg: Color::Rgb(0x1e, 0x66, 0xf5),
            value_fg: Color::Rgb(0x40, 0xa0, 0x2b),
            statusbar_bg: Color::Rgb(0xdc, 0xe0, 0xe8),
            surface_bg: Color::Rgb(0xcc, 0xd0, 0xda),
            pill_key_fg: Color::Rgb(0xef, 0xf1, 0xf5),
            pill_key_bg: Color::Rgb(0xdf, 0x8e, 0x1d),
            pill_desc_fg: Color::Rgb(0x5c, 0x5f, 0x77),
        }
    }

    pub fn from_config(name: &str) -> Self {
        match ThemeKind::from_config_str(name) {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::dark()
    }
}
