//! Statusline - debian-style terminal status lines
//!
//! Prints labeled progress lines padded with dots to a fixed column,
//! followed by a colored bracketed outcome tag (OK / ATTN / FAIL / custom).
//! No prior configuration is needed: construct a printer and go.
//!
//! ```
//! use statusline::{Color, StatusLine};
//!
//! let mut status = StatusLine::new();
//!
//! status.linef(format_args!("Waiting {} seconds", 5));
//! status.ok("told you");
//!
//! status.line("Custom outcome");
//! status.custom(Color::Blue, "DONE", "World");
//! ```
//!
//! Output can be redirected to any writer, e.g. standard error:
//!
//! ```
//! use statusline::StatusLine;
//!
//! let mut status = StatusLine::with_output(std::io::stderr());
//! status.line("Alerting you");
//! status.warn("this went to stderr");
//! ```

pub mod color;
pub mod printer;

#[cfg(test)]
mod testutil;

// Re-export commonly used types
pub use color::Color;
pub use printer::{StatusLine, STATUS_LINE_INDENT};
