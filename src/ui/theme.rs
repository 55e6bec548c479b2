use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub digit_key: Color,
    pub operator_key: Color,   // Orange
    pub function_key: Color,   // Cyan
    pub memory_key: Color,     // Pink
    pub equals_key: Color,     // Green
    pub key_text: Color,
    pub key_pressed_bg: Color, // Highlight for the last clicked key
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for the display
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),         // Slightly lighter BG for the status bar
    digit_key: Color::Rgb(69, 71, 90),
    operator_key: Color::Rgb(250, 179, 135),
    function_key: Color::Rgb(148, 226, 213),
    memory_key: Color::Rgb(245, 194, 231),
    equals_key: Color::Rgb(166, 227, 161),
    key_text: Color::Rgb(17, 17, 27),
    key_pressed_bg: Color::Rgb(249, 226, 175),
};
