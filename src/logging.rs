use std::io;

use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};
use web_sys::console;

/// Collects one formatted event and prints it to the browser console when dropped.
#[derive(Default)]
struct ConsoleWriter {
    buffer: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buffer);
        let line = line.trim_end();

        if !line.is_empty() {
            console::log_1(&line.into());
        }
    }
}

/// Routes engine events to the console. Debug builds also see per-particle events.
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    // wasm32 has no system clock for the default timer.
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .without_time()
                .with_target(false)
                .with_writer(ConsoleWriter::default),
        )
        .with(level)
        .try_init();
}
