use std::sync::Mutex;

/// Destination for the text blocks produced by channels and the logger.
///
/// This is the simulated transport: one `write` call per delivered block.
/// Diagnostics go through `tracing`, not through the sink.
pub trait NotifySink: Send + Sync {
    fn write(&self, block: &str);
}

/// Writes each block to stdout.
pub struct ConsoleSink;

impl NotifySink for ConsoleSink {
    fn write(&self, block: &str) {
        println!("{block}");
    }
}

/// Captures blocks in write order. For tests.
#[derive(Default)]
pub struct MemorySink {
    blocks: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks written so far, in write order.
    pub fn blocks(&self) -> Vec<String> {
        self.blocks.lock().expect("sink lock poisoned").clone()
    }
}

impl NotifySink for MemorySink {
    fn write(&self, block: &str) {
        self.blocks
            .lock()
            .expect("sink lock poisoned")
            .push(block.to_string());
    }
}
