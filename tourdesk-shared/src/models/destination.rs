use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::events::ScreenKind;
use super::{Excursion, Itinerary, TourService};

/// A multi-night city stay whose hotels each own a list of room types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: Uuid,
    pub nights: u32,
    pub city: String,
    pub hotels: Vec<DestinationHotel>,
    pub excursions: Vec<Excursion>,
    pub tour_services: Vec<TourService>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DestinationHotel {
    pub id: Uuid,
    pub name: String,
    pub room_types: Vec<RoomType>,
}

impl DestinationHotel {
    /// One hotel holding one room type per name, in selection order
    pub fn new<I, S>(name: impl Into<String>, room_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            room_types: room_types.into_iter().map(RoomType::new).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoomType {
    pub id: Uuid,
    pub name: String,
}

impl RoomType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

impl Itinerary for Destination {
    const SCREEN: ScreenKind = ScreenKind::Destinations;

    fn fresh(nights: u32, city: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            nights,
            city,
            hotels: Vec::new(),
            excursions: Vec::new(),
            tour_services: Vec::new(),
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn nights(&self) -> u32 {
        self.nights
    }

    fn city(&self) -> &str {
        &self.city
    }

    fn retime(&mut self, nights: u32, city: String) {
        self.nights = nights;
        self.city = city;
    }

    fn excursions(&self) -> &[Excursion] {
        &self.excursions
    }

    fn excursions_mut(&mut self) -> &mut Vec<Excursion> {
        &mut self.excursions
    }

    fn tour_services(&self) -> &[TourService] {
        &self.tour_services
    }

    fn tour_services_mut(&mut self) -> &mut Vec<TourService> {
        &mut self.tour_services
    }

    fn hotel_count(&self) -> usize {
        self.hotels.len()
    }

    fn hotel_labels(&self) -> Vec<String> {
        self.hotels
            .iter()
            .map(|hotel| {
                let rooms: Vec<&str> = hotel.room_types.iter().map(|r| r.name.as_str()).collect();
                format!("{} ({})", hotel.name, rooms.join(", "))
            })
            .collect()
    }
}
