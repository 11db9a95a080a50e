//! Terminal front-end
//!
//! Collaborator implementations that draw to a terminal, plus the parser for
//! the interactive command line.

pub mod bell;
pub mod command;
pub mod prompt;
pub mod spinner;
pub mod surface;

pub use bell::*;
pub use command::*;
pub use prompt::*;
pub use spinner::*;
pub use surface::*;

use std::io::Write;
use std::sync::{Arc, Mutex};

/// Cloneable in-memory writer, handy for capturing terminal output
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
