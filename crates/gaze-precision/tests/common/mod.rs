//! Shared helpers for integration tests

use std::io;
use std::sync::{Arc, Mutex};

use ndarray::Array2;

/// Log sink that keeps everything written to it
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a subscriber that records formatted log lines
#[allow(dead_code)]
pub fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs.contents())
}

/// Build a sample matrix from row literals
#[allow(dead_code)]
pub fn samples(rows: &[[f64; 2]]) -> Array2<f64> {
    Array2::from_shape_fn((rows.len(), 2), |(i, j)| rows[i][j])
}
