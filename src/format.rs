//! Timestamp rendering and multi-line payload reformatting.
//!
//! Both halves are pure functions: the entry timestamp captures the clock at
//! the moment the first fragment of an entry is written, and
//! [`indent_continuations`] expands embedded newlines so continuation lines
//! stay visually nested under the timestamp/prefix column.

use chrono::Local;

/// chrono format string for the entry timestamp (ctime-style, fixed width).
pub const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Rendered width of [`TIMESTAMP_FORMAT`], e.g. `"Sat Aug 23 14:05:09 2026"`.
/// `%e` space-pads single-digit days, so the width never varies.
pub const TIMESTAMP_WIDTH: usize = 24;

/// chrono format string for the stamp embedded in auto-generated file names.
pub const FILE_STAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

// TIMESTAMP_WIDTH + PREFIX_WIDTH spaces.
const INDENT: &str = "                                     ";

/// Current wall-clock time in the fixed entry format, no trailing newline.
pub fn entry_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Current wall-clock time rendered for a log file name,
/// e.g. `"2026-08-23_14-05-09"`.
pub fn file_stamp() -> String {
    Local::now().format(FILE_STAMP_FORMAT).to_string()
}

/// Indentation applied to continuation lines so they align with the end of
/// the timestamp + level-prefix column.
pub fn continuation_indent() -> &'static str {
    INDENT
}

/// Expand every newline in `fragment` to a newline plus the continuation
/// indent. The visible content is unchanged; fragments without newlines pass
/// through as-is.
pub fn indent_continuations(fragment: &str) -> String {
    if !fragment.contains('\n') {
        return fragment.to_owned();
    }
    let mut separator = String::with_capacity(1 + INDENT.len());
    separator.push('\n');
    separator.push_str(INDENT);
    fragment.replace('\n', &separator)
}
