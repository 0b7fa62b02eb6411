use serde::Serialize;
use tourdesk_shared::{Destination, DestinationHotel, Excursion, Package, TourService};
use uuid::Uuid;

/// Expanded package row: hotels grouped by name, then add-on cards
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PackageExpansion {
    pub hotel_groups: Vec<HotelGroup>,
    pub excursions: Vec<Excursion>,
    pub tour_services: Vec<TourService>,
}

/// Every package hotel entry sharing one hotel name
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HotelGroup {
    pub hotel: String,
    pub entries: Vec<HotelGroupEntry>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HotelGroupEntry {
    pub id: Uuid,
    pub room_type: String,
}

impl PackageExpansion {
    pub fn of(package: &Package) -> Self {
        let hotel_groups = package
            .hotel_names()
            .into_iter()
            .map(|name| HotelGroup {
                hotel: name.to_string(),
                entries: package
                    .hotels
                    .iter()
                    .filter(|entry| entry.hotel == name)
                    .map(|entry| HotelGroupEntry {
                        id: entry.id,
                        room_type: entry.room_type.clone(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            hotel_groups,
            excursions: package.excursions.clone(),
            tour_services: package.tour_services.clone(),
        }
    }
}

/// Expanded destination row: one card per hotel with its room types
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DestinationExpansion {
    pub hotels: Vec<DestinationHotel>,
    pub excursions: Vec<Excursion>,
    pub tour_services: Vec<TourService>,
}

impl DestinationExpansion {
    pub fn of(destination: &Destination) -> Self {
        Self {
            hotels: destination.hotels.clone(),
            excursions: destination.excursions.clone(),
            tour_services: destination.tour_services.clone(),
        }
    }
}
