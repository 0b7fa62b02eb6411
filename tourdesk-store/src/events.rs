use tokio::sync::broadcast;
use tourdesk_shared::RosterChangedEvent;
use tracing::{debug, info};

/// Fan-out of roster change notifications to whoever is watching
#[derive(Clone)]
pub struct EventPublisher {
    tx: broadcast::Sender<RosterChangedEvent>,
}

impl EventPublisher {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Returns how many subscribers received the event
    pub fn publish(&self, event: RosterChangedEvent) -> usize {
        let screen = event.screen;
        let change = event.change;
        match self.tx.send(event) {
            Ok(receivers) => {
                info!("Published {:?} on {:?} to {} subscribers", change, screen, receivers);
                receivers
            }
            Err(_) => {
                debug!("No subscribers for {:?} on {:?}", change, screen);
                0
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RosterChangedEvent> {
        self.tx.subscribe()
    }
}
