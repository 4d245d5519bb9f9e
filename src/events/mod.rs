//! Cross-component notifications for completed filter applications, plus
//! the bounded-retry scroll restorer that consumes them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tokio::time::{sleep, Duration};

use crate::constants::SCROLL_RETRY_DELAYS_MS;
use crate::logger::{self, LogTag};

const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Payload published whenever a user-initiated filter application
/// completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiltersApplied {
    pub scroll_position: f64,
    pub timestamp: DateTime<Utc>,
}

/// Broadcast bus for filter lifecycle events. Cheap to clone, one receiver
/// per subscriber; no prop drilling through component layers.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<FiltersApplied>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<FiltersApplied> {
        self.sender.subscribe()
    }

    /// Publish a filters-applied event. A send with no subscribers is a
    /// no-op, not an error.
    pub fn emit_filters_applied(&self, scroll_position: f64) -> FiltersApplied {
        let event = FiltersApplied {
            scroll_position,
            timestamp: Utc::now(),
        };
        if self.sender.send(event.clone()).is_err() {
            logger::debug(LogTag::Events, "filters-applied event had no subscribers");
        }
        event
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Try to restore a scroll position with a bounded backoff schedule.
///
/// `attempt` returns true once the target became reachable (layout
/// settled); polling stops at the first success and gives up quietly
/// after the last scheduled try.
pub async fn restore_scroll<F>(mut attempt: F) -> bool
where
    F: FnMut() -> bool,
{
    for delay_ms in SCROLL_RETRY_DELAYS_MS {
        sleep(Duration::from_millis(delay_ms)).await;
        if attempt() {
            return true;
        }
    }
    logger::debug(
        LogTag::Events,
        "scroll restore abandoned after bounded retries",
    );
    false
}
