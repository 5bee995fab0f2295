//! tracing-subscriber setup shared by both binaries.

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

// A writer that sends log lines to the UI via a crossbeam channel
pub struct ChannelWriter {
    sender: crossbeam_channel::Sender<String>,
}

impl std::io::Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf).to_string();
        let _ = self.sender.try_send(msg);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// Cloneable wrapper for MakeWriter
#[derive(Clone)]
pub struct ChannelWriterFactory {
    sender: crossbeam_channel::Sender<String>,
}

impl ChannelWriterFactory {
    pub fn new(sender: crossbeam_channel::Sender<String>) -> Self {
        Self { sender }
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for ChannelWriterFactory {
    type Writer = ChannelWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ChannelWriter {
            sender: self.sender.clone(),
        }
    }
}

/// `RUST_LOG` when set, INFO otherwise.
fn env_filter() -> EnvFilter {
    filter_from(&std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default())
}

fn filter_from(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .parse_lossy(directives)
}

/// Stderr only (headless). Stdout is left to the report.
pub fn init_stderr() {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(stderr_layer)
        .init();
}

/// Stdout plus a copy of every line forwarded to the window's log panel.
pub fn init_with_ui_channel(sender: crossbeam_channel::Sender<String>) {
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false) // cleaner
        .pretty();

    let ui_layer = tracing_subscriber::fmt::layer()
        .with_writer(ChannelWriterFactory::new(sender))
        .with_ansi(false) // No color codes for UI text
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(stdout_layer)
        .with(ui_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn test_channel_writer_forwards_lines() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let factory = ChannelWriterFactory::new(tx);

        let mut writer = factory.make_writer();
        let written = writer.write(b"INFO Predicted sales 12.00\n").unwrap();

        assert_eq!(written, 27);
        assert_eq!(rx.try_recv().unwrap(), "INFO Predicted sales 12.00\n");
    }

    #[test]
    fn test_filter_defaults_to_info() {
        assert_eq!(filter_from("").to_string(), "info");
    }

    #[test]
    fn test_filter_honours_explicit_level() {
        let filter = filter_from("error");
        assert_eq!(filter.to_string(), "error");
    }

    #[test]
    fn test_channel_writer_survives_closed_receiver() {
        let (tx, rx) = crossbeam_channel::bounded(1);
        drop(rx);

        let mut writer = ChannelWriterFactory::new(tx).make_writer();
        assert!(writer.write(b"dropped").is_ok());
    }
}
