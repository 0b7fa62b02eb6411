use tourdesk_shared::{Destination, DestinationHotel, Excursion, Itinerary, RoomType, TourService};
use tracing::debug;
use uuid::Uuid;

use crate::outcome::{check_hotel_pick, Outcome, RosterError};
use crate::roster::Roster;

/// Hotel edits for the nested destination shape
impl Roster<Destination> {
    /// Create a destination carrying its excursions, tour services and any
    /// hotels staged before the record existed
    pub fn create_with_addons(
        &mut self,
        nights: u32,
        city: &str,
        excursions: &[String],
        tour_services: &[String],
        hotels: Vec<DestinationHotel>,
    ) -> Outcome<Destination> {
        let mut destination = Destination::fresh(nights, city.to_string());
        destination.excursions = excursions.iter().map(|n| Excursion::new(n.as_str())).collect();
        destination.tour_services = tour_services.iter().map(|n| TourService::new(n.as_str())).collect();
        destination.hotels = hotels;
        self.insert(destination)
    }

    /// Append exactly one hotel owning one room type per selection
    pub fn add_hotel(
        &mut self,
        id: Uuid,
        name: &str,
        room_types: &[String],
    ) -> Result<Outcome<DestinationHotel>, RosterError> {
        if let Some(reason) = check_hotel_pick(name, room_types) {
            debug!("Declined hotel add on destination {}: {}", id, reason);
            return Ok(Outcome::Declined(reason));
        }

        let hotel = DestinationHotel::new(name, room_types.iter().map(String::as_str));
        self.record_mut(id)?.hotels.push(hotel.clone());
        Ok(Outcome::Applied(hotel))
    }

    /// Remove a hotel together with all of its room types
    pub fn remove_hotel(&mut self, id: Uuid, hotel_id: Uuid) -> Result<DestinationHotel, RosterError> {
        let hotels = &mut self.record_mut(id)?.hotels;
        let index = hotels
            .iter()
            .position(|h| h.id == hotel_id)
            .ok_or(RosterError::HotelNotFound(hotel_id))?;
        Ok(hotels.remove(index))
    }

    /// Remove one room type; the hotel stays even when left empty
    pub fn remove_room_type(
        &mut self,
        id: Uuid,
        hotel_id: Uuid,
        room_type_id: Uuid,
    ) -> Result<RoomType, RosterError> {
        let hotel = self
            .record_mut(id)?
            .hotels
            .iter_mut()
            .find(|h| h.id == hotel_id)
            .ok_or(RosterError::HotelNotFound(hotel_id))?;
        let index = hotel
            .room_types
            .iter()
            .position(|r| r.id == room_type_id)
            .ok_or(RosterError::RoomTypeNotFound(room_type_id))?;
        Ok(hotel.room_types.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Decline;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn roster_with_destination() -> (Roster<Destination>, Uuid) {
        let mut roster: Roster<Destination> = Roster::new();
        let id = roster.create(6, "Paris").applied().unwrap().id;
        (roster, id)
    }

    #[test]
    fn test_single_hotel_per_add() {
        let (mut roster, id) = roster_with_destination();

        roster.add_hotel(id, "Budget Inn", &names(&["Single"])).unwrap();

        let hotels = &roster.get(id).unwrap().hotels;
        assert_eq!(hotels.len(), 1);
        assert_eq!(hotels[0].name, "Budget Inn");
        assert_eq!(hotels[0].room_types.len(), 1);
        assert_eq!(hotels[0].room_types[0].name, "Single");
    }

    #[test]
    fn test_multiple_room_types_stay_grouped() {
        let (mut roster, id) = roster_with_destination();

        let hotel = roster
            .add_hotel(id, "Hotel Luxury", &names(&["Double", "Suite"]))
            .unwrap()
            .applied()
            .unwrap();

        assert_eq!(hotel.room_types.len(), 2);
        assert_eq!(roster.get(id).unwrap().hotels.len(), 1);
    }

    #[test]
    fn test_add_hotel_declines_empty_room_types() {
        let (mut roster, id) = roster_with_destination();

        let outcome = roster.add_hotel(id, "Budget Inn", &[]).unwrap();

        assert_eq!(outcome.decline(), Some(Decline::EmptySelection));
        assert!(roster.get(id).unwrap().hotels.is_empty());
    }

    #[test]
    fn test_remove_room_type_then_hotel() {
        let (mut roster, id) = roster_with_destination();
        let hotel = roster
            .add_hotel(id, "Hotel Luxury", &names(&["Double", "Suite"]))
            .unwrap()
            .applied()
            .unwrap();
        let other = roster
            .add_hotel(id, "Grand Palace", &names(&["Deluxe"]))
            .unwrap()
            .applied()
            .unwrap();

        let removed = roster.remove_room_type(id, hotel.id, hotel.room_types[1].id).unwrap();
        assert_eq!(removed.name, "Suite");
        assert_eq!(roster.get(id).unwrap().hotels[0].room_types.len(), 1);

        roster.remove_room_type(id, other.id, other.room_types[0].id).unwrap();
        assert_eq!(roster.get(id).unwrap().hotels.len(), 2);
        assert!(roster.get(id).unwrap().hotels[1].room_types.is_empty());

        roster.remove_hotel(id, hotel.id).unwrap();
        let hotels = &roster.get(id).unwrap().hotels;
        assert_eq!(hotels.len(), 1);
        assert_eq!(hotels[0].name, "Grand Palace");
    }

    #[test]
    fn test_remove_unknown_hotel() {
        let (mut roster, id) = roster_with_destination();
        let missing = Uuid::new_v4();

        assert_eq!(roster.remove_hotel(id, missing).unwrap_err(), RosterError::HotelNotFound(missing));
    }

    #[test]
    fn test_create_with_addons() {
        let mut roster: Roster<Destination> = Roster::new();

        let created = roster
            .create_with_addons(
                4,
                "Rome",
                &names(&["Versailles Palace"]),
                &names(&["Airport Transfer", "Travel Insurance"]),
                vec![DestinationHotel::new("Budget Inn", ["Double"])],
            )
            .applied()
            .unwrap();

        assert_eq!(created.excursions.len(), 1);
        assert_eq!(created.tour_services.len(), 2);
        assert_eq!(created.hotels.len(), 1);

        let declined = roster.create_with_addons(4, "", &[], &[], Vec::new());
        assert_eq!(declined.decline(), Some(Decline::MissingCity));
        assert_eq!(roster.len(), 1);
    }
}
