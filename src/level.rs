//! Severity levels and their display descriptors.
//!
//! Every level maps to a small immutable [`LevelStyle`] holding the
//! fixed-width bracketed label and the console color applied to it. The
//! write path indexes the descriptor table directly rather than branching
//! on the level for each fragment.

use colored::{Color, Colorize};
use std::fmt;

/// Severity classification for a log entry.
///
/// The level selects the bracketed prefix label and the color used for the
/// console rendition of that label. It carries no payload of its own and is
/// chosen once per entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Level {
    /// Routine informational output, labelled `LOG`
    #[default]
    Info,
    /// Something suspicious the operator may want to look at
    Warning,
    /// A failure that needs attention
    Error,
    /// Developer-facing diagnostics
    Debug,
}

/// Display descriptor for one severity level.
///
/// `label` is always [`LABEL_WIDTH`] characters so every prefix occupies the
/// same column span; `color` is the console-only accent (`None` renders the
/// label plain on both sinks).
pub struct LevelStyle {
    pub label: &'static str,
    pub color: Option<Color>,
}

/// Width of the padded label between the prefix brackets.
pub const LABEL_WIDTH: usize = 9;

/// Total width of a rendered prefix: `" ["` + label + `"] "`.
pub const PREFIX_WIDTH: usize = LABEL_WIDTH + 4;

/// Descriptor table, indexed by the `Level` discriminant.
const STYLES: [LevelStyle; 4] = [
    LevelStyle {
        label: "   LOG   ",
        color: None,
    },
    LevelStyle {
        label: " WARNING ",
        color: Some(Color::Yellow),
    },
    LevelStyle {
        label: "  ERROR  ",
        color: Some(Color::Red),
    },
    LevelStyle {
        label: "  DEBUG  ",
        color: Some(Color::Blue),
    },
];

impl Level {
    /// Look up the immutable display descriptor for this level.
    pub fn style(self) -> &'static LevelStyle {
        &STYLES[self as usize]
    }

    /// Uncolored prefix written to the file sink, e.g. `" [ WARNING ] "`.
    pub fn plain_prefix(self) -> String {
        format!(" [{}] ", self.style().label)
    }

    /// Colorized prefix written to the console.
    ///
    /// Only the label between the brackets carries escape codes, so the
    /// visible text matches [`plain_prefix`](Self::plain_prefix) exactly.
    pub fn console_prefix(self) -> String {
        let style = self.style();
        match style.color {
            Some(color) => format!(" [{}] ", style.label.color(color)),
            None => format!(" [{}] ", style.label),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.style().label.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Level; 4] = [Level::Info, Level::Warning, Level::Error, Level::Debug];

    #[test]
    fn labels_share_a_fixed_width() {
        for level in ALL {
            assert_eq!(level.style().label.len(), LABEL_WIDTH, "{level}");
            assert_eq!(level.plain_prefix().len(), PREFIX_WIDTH, "{level}");
        }
    }

    #[test]
    fn plain_prefixes_carry_no_escape_codes() {
        for level in ALL {
            assert!(!level.plain_prefix().contains('\u{1b}'), "{level}");
        }
    }

    #[test]
    fn info_prefix_is_identical_on_both_sinks() {
        // LOG is the one uncolored level, so its console rendition never
        // diverges from the file rendition regardless of color settings.
        assert_eq!(Level::Info.console_prefix(), Level::Info.plain_prefix());
    }

    #[test]
    fn default_level_is_info() {
        assert_eq!(Level::default(), Level::Info);
    }

    #[test]
    fn display_uses_the_trimmed_label() {
        assert_eq!(Level::Info.to_string(), "LOG");
        assert_eq!(Level::Warning.to_string(), "WARNING");
        assert_eq!(Level::Error.to_string(), "ERROR");
        assert_eq!(Level::Debug.to_string(), "DEBUG");
    }
}
