use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::events::ScreenKind;
use super::{Excursion, Itinerary, TourService};

/// A multi-night city stay whose hotels are booked one room type per entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: Uuid,
    pub nights: u32,
    pub city: String,
    pub hotels: Vec<PackageHotel>,
    pub excursions: Vec<Excursion>,
    pub tour_services: Vec<TourService>,
}

/// Flat hotel booking: one entry per (hotel, room type) pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PackageHotel {
    pub id: Uuid,
    pub hotel: String,
    pub room_type: String,
}

impl PackageHotel {
    pub fn new(hotel: impl Into<String>, room_type: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            hotel: hotel.into(),
            room_type: room_type.into(),
        }
    }
}

impl Package {
    /// Distinct hotel names in order of first appearance
    pub fn hotel_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for entry in &self.hotels {
            if !names.contains(&entry.hotel.as_str()) {
                names.push(&entry.hotel);
            }
        }
        names
    }
}

impl Itinerary for Package {
    const SCREEN: ScreenKind = ScreenKind::Packages;

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
        self.hotel_names()
            .into_iter()
            .map(|name| {
                let rooms: Vec<&str> = self
                    .hotels
                    .iter()
                    .filter(|entry| entry.hotel == name)
                    .map(|entry| entry.room_type.as_str())
                    .collect();
                format!("{} ({})", name, rooms.join(", "))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotel_labels_group_by_name() {
        let mut package = Package::fresh(6, "Paris".to_string());
        package.hotels.push(PackageHotel::new("Hotel Luxury", "Double"));
        package.hotels.push(PackageHotel::new("Budget Inn", "Single"));
        package.hotels.push(PackageHotel::new("Hotel Luxury", "Master"));

        assert_eq!(package.hotel_count(), 3);
        assert_eq!(
            package.hotel_labels(),
            vec!["Hotel Luxury (Double, Master)", "Budget Inn (Single)"]
        );
    }

    #[test]
    fn test_serializes_camel_case() {
        let mut package = Package::fresh(2, "Rome".to_string());
        package.hotels.push(PackageHotel::new("Grand Palace", "Deluxe"));

        let value = serde_json::to_value(&package).unwrap();
        assert_eq!(value["hotels"][0]["roomType"], "Deluxe");
        assert!(value["tourServices"].as_array().unwrap().is_empty());
    }
}
