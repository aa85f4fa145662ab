//! Terminal color escape sequences
//!
//! Each identifier maps to exactly one fixed VT100/ANSI escape string.
//! [`Color::Default`] is the attribute reset sequence.

/// Console text color
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// Reset to the terminal default attributes
    Default,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// Bright dark, rendered as bold black
    Grey,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Returns the escape sequence selecting this color
    pub fn escape(self) -> &'static str {
        match self {
            Color::Default => "\x1b[0m",
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Blue => "\x1b[34m",
            Color::Magenta => "\x1b[35m",
            Color::Cyan => "\x1b[36m",
            Color::White => "\x1b[37m",
            Color::Grey => "\x1b[1;30m",
            Color::BrightRed => "\x1b[1;31m",
            Color::BrightGreen => "\x1b[1;32m",
            Color::BrightYellow => "\x1b[1;33m",
            Color::BrightBlue => "\x1b[1;34m",
            Color::BrightMagenta => "\x1b[1;35m",
            Color::BrightCyan => "\x1b[1;36m",
            Color::BrightWhite => "\x1b[1;37m",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn escape_sequences() {
        assert_eq!(Color::Default.escape(), "\x1b[0m");
        assert_eq!(Color::Red.escape(), "\x1b[31m");
        assert_eq!(Color::White.escape(), "\x1b[37m");
        assert_eq!(Color::Grey.escape(), "\x1b[1;30m");
        assert_eq!(Color::BrightWhite.escape(), "\x1b[1;37m");
    }

    #[test]
    fn escapes_are_csi_sequences() {
        let colors = [
            Color::Default,
            Color::Red,
            Color::Green,
            Color::Yellow,
            Color::Blue,
            Color::Magenta,
            Color::Cyan,
            Color::White,
            Color::Grey,
            Color::BrightRed,
            Color::BrightGreen,
            Color::BrightYellow,
            Color::BrightBlue,
            Color::BrightMagenta,
            Color::BrightCyan,
            Color::BrightWhite,
        ];
        for color in colors {
            let esc = color.escape();
            assert!(esc.starts_with("\x1b["));
            assert!(esc.ends_with('m'));
        }
    }
}
