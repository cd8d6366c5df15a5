//! Announcer - Assistive Technology Announcements
//!
//! Fire-and-forget delivery of text to a screen-reader live region.

use crossbeam_channel::{Receiver, Sender, unbounded};
use tracing::{debug, trace};

/// Announcement channel
pub trait Announcer {
    /// Queue `text` for assistive technology. Never blocks, never fails.
    fn announce(&self, text: &str);
}

/// Announcer that queues text on a channel drained by the embedding host
#[derive(Debug, Clone)]
pub struct ChannelAnnouncer {
    tx: Sender<String>,
}

impl ChannelAnnouncer {
    /// Create an announcer and the receiver the host reads from
    pub fn new() -> (Self, Receiver<String>) {
        let (tx, rx) = unbounded();
        (Self { tx }, rx)
    }
}

impl Announcer for ChannelAnnouncer {
    fn announce(&self, text: &str) {
        if self.tx.send(text.to_string()).is_err() {
            trace!("Announcement dropped, receiver gone");
        }
    }
}

/// Announcer that only logs
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAnnouncer;

impl Announcer for LogAnnouncer {
    fn announce(&self, text: &str) {
        debug!(text, "Announce");
    }
}
