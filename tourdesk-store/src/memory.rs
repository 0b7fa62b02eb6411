use std::sync::Arc;

use tokio::sync::RwLock;
use tourdesk_catalog::OptionCatalog;
use tourdesk_manager::{DestinationScreen, PackageScreen};
use tourdesk_shared::{ChangeKind, RosterChangedEvent, ScreenKind};
use uuid::Uuid;

use crate::app_config::Config;
use crate::events::EventPublisher;
use crate::seed;

/// Process-lifetime home of both screens.
///
/// Each screen sits behind its own lock, so every edit runs to completion
/// before the next one (or any read) sees the list. Nothing is persisted.
pub struct MemoryStore {
    pub packages: RwLock<PackageScreen>,
    pub destinations: RwLock<DestinationScreen>,
    pub catalog: Arc<OptionCatalog>,
    events: EventPublisher,
}

impl MemoryStore {
    pub fn from_config(config: &Config) -> Self {
        let catalog = Arc::new(config.option_catalog());
        let summary = config.display.summary_options();
        let (packages, destinations) = if config.seed.enabled {
            (seed::sample_packages(), seed::sample_destinations())
        } else {
            (Vec::new(), Vec::new())
        };

        tracing::info!(
            "Screen store ready: {} packages, {} destinations",
            packages.len(),
            destinations.len()
        );

        Self {
            packages: RwLock::new(PackageScreen::new(catalog.clone(), summary, packages)),
            destinations: RwLock::new(DestinationScreen::new(catalog.clone(), summary, destinations)),
            catalog,
            events: EventPublisher::new(config.events.channel_capacity),
        }
    }

    pub fn events(&self) -> &EventPublisher {
        &self.events
    }

    pub fn notify(&self, screen: ScreenKind, record_id: Option<Uuid>, change: ChangeKind) {
        self.events.publish(RosterChangedEvent::new(screen, record_id, change));
    }
}
