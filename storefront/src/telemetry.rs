//! Tracing setup for the browser.
//!
//! Formatted events go to the developer console. Timestamps are disabled
//! because the wasm32 target has no system clock.

use std::io;

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const FALLBACK_DIRECTIVE: &str = "info";

/// Install the global subscriber. `directive` is an `EnvFilter` string such
/// as `"info"` or `"ferreteria_commerce=debug"`; an invalid one falls back to
/// `info`. Calling this twice is a no-op.
pub fn init(directive: &str) {
    let filter =
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(FALLBACK_DIRECTIVE));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .with_target(true)
        .without_time()
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(directive, "tracing initialized");
    }
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter { buf: Vec::new() }
    }
}

/// Buffers one formatted event and flushes it to `console.log` on drop.
struct ConsoleWriter {
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if !line.is_empty() {
            web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(line));
        }
    }
}
