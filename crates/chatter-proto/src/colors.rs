//! Display color catalog.
//!
//! Nine symbolic names, each mapping to an ANSI escape code. `Reset` is
//! both the neutral "no color" default and the suffix appended after every
//! painted line so a recipient's terminal never bleeds color into the next
//! message.

/// A display color from the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Neutral - also the trailing reset code.
    #[default]
    Reset,
    /// Black text.
    Black,
    /// Red text.
    Red,
    /// Green text.
    Green,
    /// Yellow text.
    Yellow,
    /// Blue text.
    Blue,
    /// Purple text.
    Purple,
    /// Cyan text.
    Cyan,
    /// White text.
    White,
}

impl Color {
    /// Every catalog entry, in listing order.
    pub const ALL: [Color; 9] = [
        Color::Reset,
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Purple,
        Color::Cyan,
        Color::White,
    ];

    /// The ANSI escape code for this color.
    pub fn code(&self) -> &'static str {
        match self {
            Color::Reset => "\x1b[0m",
            Color::Black => "\x1b[0;30m",
            Color::Red => "\x1b[0;31m",
            Color::Green => "\x1b[0;32m",
            Color::Yellow => "\x1b[0;33m",
            Color::Blue => "\x1b[0;34m",
            Color::Purple => "\x1b[0;35m",
            Color::Cyan => "\x1b[0;36m",
            Color::White => "\x1b[0;37m",
        }
    }

    /// The symbolic name, as shown in catalog listings.
    pub fn name(&self) -> &'static str {
        match self {
            Color::Reset => "RESET",
            Color::Black => "BLACK",
            Color::Red => "RED",
            Color::Green => "GREEN",
            Color::Yellow => "YELLOW",
            Color::Blue => "BLUE",
            Color::Purple => "PURPLE",
            Color::Cyan => "CYAN",
            Color::White => "WHITE",
        }
    }

    /// Case-insensitive lookup by symbolic name.
    pub fn from_name(name: &str) -> Option<Color> {
        Color::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }
}

/// Format a display line: color code prefix, then the text, then the
/// neutral reset suffix.
pub fn paint(color: Color, text: &str) -> String {
    format!("{}{}{}", color.code(), text, Color::Reset.code())
}

/// Strip every catalog escape code from a line.
///
/// Handy for logging and for asserting on message text without caring
/// about the color it was painted in.
pub fn strip_codes(text: &str) -> String {
    let mut out = text.to_string();
    for color in Color::ALL {
        out = out.replace(color.code(), "");
    }
    out
}
