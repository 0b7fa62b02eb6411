use serde::{Deserialize, Serialize};

/// A selectable hotel and the room types it offers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct HotelOption {
    pub name: String,
    pub room_types: Vec<String>,
}

impl HotelOption {
    fn new(name: &str, room_types: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            room_types: owned(room_types),
        }
    }
}

/// Fixed option lists offered by the edit dialogs.
///
/// Membership is advisory: rosters accept any string, the catalog only
/// decides what the pickers offer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct OptionCatalog {
    pub cities: Vec<String>,
    pub hotels: Vec<HotelOption>,
    /// Offered for a hotel the catalog does not know
    pub default_room_types: Vec<String>,
    pub excursions: Vec<String>,
    pub tour_services: Vec<String>,
}

impl OptionCatalog {
    pub fn standard() -> Self {
        Self {
            cities: owned(&["Paris", "London", "Rome", "Barcelona", "Amsterdam"]),
            hotels: vec![
                HotelOption::new("Hotel Luxury", &["Single", "Double", "Suite"]),
                HotelOption::new("Budget Inn", &["Single", "Double"]),
                HotelOption::new("Grand Palace", &["Deluxe", "Presidential"]),
                HotelOption::new("City Center Hotel", &["Standard", "Superior"]),
            ],
            default_room_types: owned(&["Single", "Double", "Master"]),
            excursions: owned(&[
                "Eiffel Tower Tour",
                "Louvre Museum",
                "Seine River Cruise",
                "Versailles Palace",
                "Montmartre Walking Tour",
            ]),
            tour_services: owned(&[
                "Airport Transfer",
                "City Guide",
                "Car Rental",
                "Travel Insurance",
                "WiFi Device",
            ]),
        }
    }

    pub fn hotel(&self, name: &str) -> Option<&HotelOption> {
        self.hotels.iter().find(|h| h.name == name)
    }

    /// Room types a known hotel offers, `None` for an unknown hotel
    pub fn room_types_for(&self, hotel: &str) -> Option<&[String]> {
        self.hotel(hotel).map(|h| h.room_types.as_slice())
    }

    /// Room types to offer for `hotel`, falling back to the default set
    pub fn room_type_options(&self, hotel: &str) -> &[String] {
        self.room_types_for(hotel)
            .unwrap_or(self.default_room_types.as_slice())
    }

    pub fn hotel_names(&self) -> Vec<&str> {
        self.hotels.iter().map(|h| h.name.as_str()).collect()
    }

    pub fn is_city(&self, city: &str) -> bool {
        self.cities.iter().any(|c| c == city)
    }

    pub fn is_hotel(&self, hotel: &str) -> bool {
        self.hotel(hotel).is_some()
    }
}

impl Default for OptionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
