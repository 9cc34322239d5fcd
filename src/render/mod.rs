//! Render sinks: where the animator's visible text goes.
//!
//! The animator emits the two currently-visible prefixes after every
//! change. Everything about presentation — styling, position, layout — is
//! the sink's business, not the animator's.
//!
//! Any `FnMut(&str, &str)` closure is a sink. [`ChannelSink`] forwards
//! frames to another thread; [`crate::term::LinePainter`] draws them on a
//! terminal.

use crossbeam_channel::{unbounded, Receiver, Sender};

/// Receives the two visible prefixes on every visible change.
pub trait RenderSink: Send {
    /// Present the current frame. `first` and `second` are the visible
    /// prefixes of the two segments, in display order.
    fn render(&mut self, first: &str, second: &str);
}

impl<F> RenderSink for F
where
    F: FnMut(&str, &str) + Send,
{
    fn render(&mut self, first: &str, second: &str) {
        self(first, second);
    }
}

/// One emitted frame: owned copies of both visible prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Visible prefix of the first segment.
    pub first: String,
    /// Visible prefix of the second segment.
    pub second: String,
}

/// A sink that forwards frames over a channel to a consumer thread.
pub struct ChannelSink {
    frame_tx: Sender<Frame>,
    receiver_gone: bool,
}

impl ChannelSink {
    /// Create a sink and the receiver for its frames.
    pub fn new() -> (Self, Receiver<Frame>) {
        let (frame_tx, frame_rx) = unbounded();
        (Self::from_sender(frame_tx), frame_rx)
    }

    /// Wrap an existing sender.
    pub const fn from_sender(frame_tx: Sender<Frame>) -> Self {
        Self {
            frame_tx,
            receiver_gone: false,
        }
    }
}

impl RenderSink for ChannelSink {
    fn render(&mut self, first: &str, second: &str) {
        if self.receiver_gone {
            return;
        }
        let frame = Frame {
            first: first.to_string(),
            second: second.to_string(),
        };
        if self.frame_tx.send(frame).is_err() {
            log::debug!("frame receiver dropped, channel sink going quiet");
            self.receiver_gone = true;
        }
    }
}
