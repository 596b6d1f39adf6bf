//! Progress message sinks
//!
//! Everything the generator does is reported as an ordered stream of
//! human-readable text lines. A sink accepts one line at a time and must
//! be callable from a worker thread other than the one that eventually
//! displays the messages; delivery may be asynchronous.

use std::sync::mpsc::Sender;

/// Consumer of progress/diagnostic lines
pub trait MessageSink: Send + Sync {
    /// Accepts one line of progress text
    fn line(&self, message: &str);
}

impl<F> MessageSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn line(&self, message: &str) {
        self(message)
    }
}

/// Sink that prints each line to standard output
#[derive(Debug, Default)]
pub struct StdoutSink;

impl MessageSink for StdoutSink {
    fn line(&self, message: &str) {
        println!("{message}");
    }
}

/// Sink that forwards each line over a channel to a consumer on another
/// thread, e.g. a UI event loop.
pub struct ChannelSink {
    sender: Sender<String>,
}

impl ChannelSink {
    /// Wraps a channel sender
    pub fn new(sender: Sender<String>) -> Self {
        Self { sender }
    }
}

impl MessageSink for ChannelSink {
    fn line(&self, message: &str) {
        // A vanished receiver drops the line; a sink must never take the
        // worker down.
        let _ = self.sender.send(message.to_string());
    }
}
