pub mod app_config;
pub mod events;
pub mod memory;
pub mod seed;

pub use events::EventPublisher;
pub use memory::MemoryStore;
