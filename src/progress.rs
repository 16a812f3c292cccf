// src/progress.rs
/// Progress reporting for data loads. Frontends (GUI/CLI) implement this
/// to surface status to users.
pub trait Progress {
    /// Called at the start with the number of input lines (0 if unknown).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called at the end with the number of records produced.
    fn finish(&mut self, _records: usize) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints status lines to stderr (CLI `--verbose`).
pub struct StderrProgress;

impl Progress for StderrProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn finish(&mut self, records: usize) {
        eprintln!("Loaded {records} result(s)");
    }
}
