//! Real-time broadcast configuration.

use serde::{Deserialize, Serialize};

/// Real-time hub configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// Per-connection outbox buffer size. A full outbox drops events for
    /// that client (delivery is best-effort).
    #[serde(default = "default_outbox_buffer")]
    pub outbox_buffer_size: usize,
    /// Change-feed broadcast buffer size per partition.
    #[serde(default = "default_feed_buffer")]
    pub feed_buffer_size: usize,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            outbox_buffer_size: default_outbox_buffer(),
            feed_buffer_size: default_feed_buffer(),
        }
    }
}

fn default_outbox_buffer() -> usize {
    64
}

fn default_feed_buffer() -> usize {
    256
}
