//! Status line printer
//!
//! Renders labeled progress lines padded with dots to a fixed column,
//! followed by bracketed, colored outcome tags. All writes are best-effort:
//! no operation returns an error, and sink failures (e.g. a broken pipe)
//! are swallowed.

use std::fmt;
use std::io::{self, Write};

use crate::color::Color;

/// Column width of the dotted status line, exported so callers can align
/// their own output with the library's line formatting.
pub const STATUS_LINE_INDENT: usize = 54;

// Standard status tags (6 characters, fixed padding)
const OK_TAG: &str = "  OK  ";
const ATTN_TAG: &str = " ATTN ";
const FAIL_TAG: &str = " FAIL ";

/// Maximum width of a custom status tag before truncation
const CUSTOM_TAG_WIDTH: usize = 4;

/// Status line printer bound to an output sink.
///
/// Each printer owns its sink, so concurrent use is safe by construction
/// when each thread holds its own instance. The sink defaults to standard
/// output and can be replaced at any time with [`StatusLine::set_output`].
pub struct StatusLine {
    sink: Box<dyn Write + Send>,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusLine {
    /// Create a printer writing to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sink: Box::new(io::stdout()),
        }
    }

    /// Create a printer writing to the given sink.
    #[must_use]
    pub fn with_output(sink: impl Write + Send + 'static) -> Self {
        Self {
            sink: Box::new(sink),
        }
    }

    /// Replace the output sink. `None` is a no-op: the previous sink
    /// remains active.
    pub fn set_output(&mut self, sink: Option<Box<dyn Write + Send>>) {
        if let Some(sink) = sink {
            self.sink = sink;
        }
    }

    /// Print `msg` as a status line, padded with dots up to
    /// [`STATUS_LINE_INDENT`] characters. Messages at or beyond the indent
    /// width are written as-is, neither truncated nor padded. No trailing
    /// newline: the caller is expected to follow up with a status call on
    /// the same line.
    pub fn line(&mut self, msg: &str) {
        let width = msg.chars().count();
        if width < STATUS_LINE_INDENT {
            let dots = ".".repeat(STATUS_LINE_INDENT - width);
            let _ = write!(self.sink, "- {msg}{dots}");
        } else {
            let _ = write!(self.sink, "- {msg}");
        }
        // The line carries no newline, so flush to make it visible now
        let _ = self.sink.flush();
    }

    /// [`StatusLine::line`] with a formatted message.
    pub fn linef(&mut self, args: fmt::Arguments<'_>) {
        self.line(&args.to_string());
    }

    /// Print a green `[  OK  ]` status tag followed by `msg`.
    pub fn ok(&mut self, msg: &str) {
        self.standard(Color::Green, OK_TAG, msg);
    }

    /// [`StatusLine::ok`] with a formatted message.
    pub fn okf(&mut self, args: fmt::Arguments<'_>) {
        self.ok(&args.to_string());
    }

    /// Print a yellow `[ ATTN ]` status tag followed by `msg`.
    pub fn warn(&mut self, msg: &str) {
        self.standard(Color::Yellow, ATTN_TAG, msg);
    }

    /// [`StatusLine::warn`] with a formatted message.
    pub fn warnf(&mut self, args: fmt::Arguments<'_>) {
        self.warn(&args.to_string());
    }

    /// Alias for [`StatusLine::warn`].
    pub fn attn(&mut self, msg: &str) {
        self.warn(msg);
    }

    /// Alias for [`StatusLine::warnf`].
    pub fn attnf(&mut self, args: fmt::Arguments<'_>) {
        self.warnf(args);
    }

    /// Print a red `[ FAIL ]` status tag followed by `msg`.
    pub fn fail(&mut self, msg: &str) {
        self.standard(Color::Red, FAIL_TAG, msg);
    }

    /// [`StatusLine::fail`] with a formatted message.
    pub fn failf(&mut self, args: fmt::Arguments<'_>) {
        self.fail(&args.to_string());
    }

    /// Print a custom status tag in the given color. Tags wider than 4
    /// characters are truncated to their first 4 to keep the brackets
    /// aligned.
    pub fn custom(&mut self, color: Color, status: &str, msg: &str) {
        let status = match status.char_indices().nth(CUSTOM_TAG_WIDTH) {
            Some((end, _)) => &status[..end],
            None => status,
        };
        self.any_status(color, status, msg);
    }

    /// [`StatusLine::custom`] with a formatted message.
    pub fn customf(&mut self, color: Color, status: &str, args: fmt::Arguments<'_>) {
        self.custom(color, status, &args.to_string());
    }

    /// Same as [`StatusLine::custom`] without the tag length constraint.
    pub fn any_status(&mut self, color: Color, status: &str, msg: &str) {
        let _ = writeln!(self.sink, "[ {} ] {msg}", color.paint(status));
    }

    /// [`StatusLine::any_status`] with a formatted message.
    pub fn any_statusf(&mut self, color: Color, status: &str, args: fmt::Arguments<'_>) {
        self.any_status(color, status, &args.to_string());
    }

    // Standard statuses use single-space brackets; custom tags use
    // double-space brackets. The asymmetry is part of the output contract.
    fn standard(&mut self, color: Color, tag: &str, msg: &str) {
        let _ = writeln!(self.sink, "[{}] {msg}", color.paint(tag));
    }
}
