// src/gui/progress.rs
use std::sync::{Arc, Mutex};
use crate::progress::Progress;

/// Mirrors load progress into the status line.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn finish(&mut self, records: usize) {
        if self.total == 0 {
            self.set_status(format!("Loaded {records} result(s)"));
        } else {
            self.set_status(format!("Loaded {records} result(s) from {} line(s)", self.total));
        }
    }
}
