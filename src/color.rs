//! Status tag colors
//!
//! A closed set of display colors for bracketed status tags, rendered
//! bold through the `colored` crate. Terminal capability detection and
//! NO_COLOR handling are `colored`'s concern, not ours.

use colored::Colorize;

/// Display color for a status tag (bold by default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// No styling — the tag is rendered as plain text
    #[default]
    None,
    /// Bold red
    Red,
    /// Bold yellow
    Yellow,
    /// Bold green
    Green,
    /// Bold blue
    Blue,
    /// Bold magenta
    Magenta,
    /// Bold cyan
    Cyan,
    /// Bold white
    White,
    /// Bold black
    Black,
}

impl Color {
    /// Convert an externally supplied index (e.g. from deserialized data)
    /// into a `Color`. Anything outside the enumerated set resolves to
    /// [`Color::None`] rather than failing.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        match index {
            1 => Self::Red,
            2 => Self::Yellow,
            3 => Self::Green,
            4 => Self::Blue,
            5 => Self::Magenta,
            6 => Self::Cyan,
            7 => Self::White,
            8 => Self::Black,
            _ => Self::None,
        }
    }

    /// Render `text` in this color (bold), or as plain text for
    /// [`Color::None`].
    #[must_use]
    pub fn paint(self, text: &str) -> String {
        match self {
            Self::None => text.to_string(),
            Self::Red => text.red().bold().to_string(),
            Self::Yellow => text.yellow().bold().to_string(),
            Self::Green => text.green().bold().to_string(),
            Self::Blue => text.blue().bold().to_string(),
            Self::Magenta => text.magenta().bold().to_string(),
            Self::Cyan => text.cyan().bold().to_string(),
            Self::White => text.white().bold().to_string(),
            Self::Black => text.black().bold().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_maps_enumerated_set() {
        assert_eq!(Color::from_index(0), Color::None);
        assert_eq!(Color::from_index(1), Color::Red);
        assert_eq!(Color::from_index(2), Color::Yellow);
        assert_eq!(Color::from_index(3), Color::Green);
        assert_eq!(Color::from_index(4), Color::Blue);
        assert_eq!(Color::from_index(5), Color::Magenta);
        assert_eq!(Color::from_index(6), Color::Cyan);
        assert_eq!(Color::from_index(7), Color::White);
        assert_eq!(Color::from_index(8), Color::Black);
    }

    #[test]
    fn test_from_index_out_of_range_falls_back_to_none() {
        // 9 is the first value past the enumerated set
        assert_eq!(Color::from_index(9), Color::None);
        assert_eq!(Color::from_index(10), Color::None);
        assert_eq!(Color::from_index(256), Color::None);
        assert_eq!(Color::from_index(usize::MAX), Color::None);
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(Color::default(), Color::None);
    }

    #[test]
    fn test_paint_none_is_plain_passthrough() {
        assert_eq!(Color::None.paint("  OK  "), "  OK  ");
    }

    #[test]
    fn test_paint_preserves_tag_text() {
        // Styled output may carry escape sequences around the tag, but the
        // tag text itself must survive verbatim.
        for color in [
            Color::Red,
            Color::Yellow,
            Color::Green,
            Color::Blue,
            Color::Magenta,
            Color::Cyan,
            Color::White,
            Color::Black,
        ] {
            assert!(color.paint(" ATTN ").contains(" ATTN "));
        }
    }
}
