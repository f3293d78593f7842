use log::*;
use std::io::Write;
use std::sync::Mutex;

/// Append-only destination for forwarded payloads. The counterpart of the
/// page element a browser client would write into.
pub trait OutputSink: Send + Sync {
    /// Append a fragment after whatever content is already present.
    fn append(&self, fragment: &str);
}

/// In-memory sink. Used by tests to observe exactly what a bridge appended.
#[derive(Default)]
pub struct MemorySink {
    contents: Mutex<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything appended so far, in append order.
    pub fn contents(&self) -> String {
        self.contents.lock().expect("sink mutex poisoned").clone()
    }
}

impl OutputSink for MemorySink {
    fn append(&self, fragment: &str) {
        self.contents
            .lock()
            .expect("sink mutex poisoned")
            .push_str(fragment);
    }
}

/// Writes fragments straight to standard output, flushing after each append
/// so payloads show up as they arrive.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn append(&self, fragment: &str) {
        let mut out = std::io::stdout();

        if let Err(e) = out
            .write_all(fragment.as_bytes())
            .and_then(|()| out.flush())
        {
            warn!("Failed to write payload to stdout: {e}");
        }
    }
}
