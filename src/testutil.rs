//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Cloneable in-memory sink that records everything written to it.
///
/// Hand one clone to a printer and keep another to read the output back.
#[derive(Clone, Default)]
pub struct CaptureSink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CaptureSink {
    /// Create an empty capture sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return everything written so far.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8(self.buf.lock().unwrap().clone()).unwrap()
    }

    /// Return everything written so far and clear the buffer.
    #[must_use]
    pub fn take(&self) -> String {
        String::from_utf8(std::mem::take(&mut *self.buf.lock().unwrap())).unwrap()
    }
}

impl Write for CaptureSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
