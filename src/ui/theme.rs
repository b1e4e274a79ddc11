use crate::snapshot::Role;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub function: Color,
    pub type_name: Color, // Cyan for type names
    pub bar_default: Color,
    pub bar_sorted: Color,
    pub bar_swapping: Color,
    pub bar_comparing: Color,
    pub bar_pivot: Color,
    pub bar_found: Color,
    pub bar_mid: Color,
    pub bar_excluded: Color,
}

impl Theme {
    /// Bar colour for an already-resolved role
    pub fn role_color(&self, role: Role) -> Color {
        match role {
            Role::Sorted => self.bar_sorted,
            Role::Swapping => self.bar_swapping,
            Role::Comparing => self.bar_comparing,
            Role::Pivot => self.bar_pivot,
            Role::Found => self.bar_found,
            Role::Mid => self.bar_mid,
            Role::Excluded => self.bar_excluded,
            Role::Default => self.bar_default,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),        // Blue for keywords
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for status bar
    function: Color::Rgb(249, 226, 175),       // Yellow for functions
    type_name: Color::Rgb(148, 226, 213),      // Cyan/teal for type names
    bar_default: Color::Rgb(137, 180, 250),
    bar_sorted: Color::Rgb(166, 227, 161),
    bar_swapping: Color::Rgb(243, 139, 168),
    bar_comparing: Color::Rgb(249, 226, 175),
    bar_pivot: Color::Rgb(203, 166, 247), // Mauve
    bar_found: Color::Rgb(166, 227, 161),
    bar_mid: Color::Rgb(250, 179, 135),
    bar_excluded: Color::Rgb(69, 71, 90),
};
