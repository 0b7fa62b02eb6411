use serde::{Deserialize, Serialize};
use uuid::Uuid;

use events::ScreenKind;

pub mod package;
pub mod destination;
pub mod events;

/// A named add-on activity attached to a stay
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Excursion {
    pub id: Uuid,
    pub name: String,
}

impl Excursion {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// A named service (transfer, guide, insurance...) attached to a stay
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TourService {
    pub id: Uuid,
    pub name: String,
}

impl TourService {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// Display and edit capability shared by both record families.
///
/// Rosters, summaries and table rows are written once against this trait;
/// only hotel handling differs between a flat `Package` and a nested
/// `Destination`.
pub trait Itinerary: Clone + Send + Sync + 'static {
    /// Screen that owns records of this family
    const SCREEN: ScreenKind;

    /// Build a new record with a fresh id and empty nested collections
    fn fresh(nights: u32, city: String) -> Self;

    fn id(&self) -> Uuid;

    fn nights(&self) -> u32;

    fn city(&self) -> &str;

    /// Overwrite nights and city, leaving id and nested collections alone
    fn retime(&mut self, nights: u32, city: String);

    fn excursions(&self) -> &[Excursion];

    fn excursions_mut(&mut self) -> &mut Vec<Excursion>;

    fn tour_services(&self) -> &[TourService];

    fn tour_services_mut(&mut self) -> &mut Vec<TourService>;

    /// Value shown in the row's hotel badge
    fn hotel_count(&self) -> usize;

    /// One label per hotel grouping, e.g. `Hotel Luxury (Double, Suite)`
    fn hotel_labels(&self) -> Vec<String>;
}
