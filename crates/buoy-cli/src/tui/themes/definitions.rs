//! Built-in theme definitions

use ratatui::style::Color;

use super::Theme;

/// Uses the terminal's native colors
pub fn terminal() -> Theme {
    Theme {
        name: "terminal".to_string(),
        display_name: "Terminal".to_string(),
        bg_color: Color::Reset,
        text_color: Color::Reset,
        dim_color: Color::DarkGray,
        border_color: Color::DarkGray,
        title_color: Color::Cyan,
        accent_color: Color::Cyan,
        success_color: Color::Green,
        warning_color: Color::Yellow,
        error_color: Color::Red,
        info_color: Color::Blue,
    }
}

/// Default theme - deep water blues
pub fn buoy() -> Theme {
    Theme {
        name: "buoy".to_string(),
        display_name: "Buoy".to_string(),
        bg_color: Color::Rgb(13, 27, 42),
        text_color: Color::Rgb(224, 225, 221),
        dim_color: Color::Rgb(119, 141, 169),
        border_color: Color::Rgb(65, 90, 119),
        title_color: Color::Rgb(152, 193, 217),
        accent_color: Color::Rgb(238, 108, 77),
        success_color: Color::Rgb(128, 199, 132),
        warning_color: Color::Rgb(240, 180, 100),
        error_color: Color::Rgb(230, 100, 100),
        info_color: Color::Rgb(110, 180, 230),
    }
}

pub fn tokyo_night() -> Theme {
    Theme {
        name: "tokyo-night".to_string(),
        display_name: "Tokyo Night".to_string(),
        bg_color: Color::Rgb(26, 27, 38),
        text_color: Color::Rgb(192, 202, 245),
        dim_color: Color::Rgb(86, 95, 137),
        border_color: Color::Rgb(59, 66, 97),
        title_color: Color::Rgb(187, 154, 247),
        accent_color: Color::Rgb(122, 162, 247),
        success_color: Color::Rgb(158, 206, 106),
        warning_color: Color::Rgb(224, 175, 104),
        error_color: Color::Rgb(247, 118, 142),
        info_color: Color::Rgb(125, 207, 255),
    }
}

pub fn dracula() -> Theme {
    Theme {
        name: "dracula".to_string(),
        display_name: "Dracula".to_string(),
        bg_color: Color::Rgb(40, 42, 54),
        text_color: Color::Rgb(248, 248, 242),
        dim_color: Color::Rgb(98, 114, 164),
        border_color: Color::Rgb(68, 71, 90),
        title_color: Color::Rgb(255, 121, 198),
        accent_color: Color::Rgb(189, 147, 249),
        success_color: Color::Rgb(80, 250, 123),
        warning_color: Color::Rgb(241, 250, 140),
        error_color: Color::Rgb(255, 85, 85),
        info_color: Color::Rgb(139, 233, 253),
    }
}

pub fn nord() -> Theme {
    Theme {
        name: "nord".to_string(),
        display_name: "Nord".to_string(),
        bg_color: Color::Rgb(46, 52, 64),
        text_color: Color::Rgb(236, 239, 244),
        dim_color: Color::Rgb(76, 86, 106),
        border_color: Color::Rgb(67, 76, 94),
        title_color: Color::Rgb(143, 188, 187),
        accent_color: Color::Rgb(136, 192, 208),
        success_color: Color::Rgb(163, 190, 140),
        warning_color: Color::Rgb(235, 203, 139),
        error_color: Color::Rgb(191, 97, 106),
        info_color: Color::Rgb(129, 161, 193),
    }
}
