use tourdesk_shared::{Package, PackageHotel};
use tracing::debug;
use uuid::Uuid;

use crate::confirm::{Confirm, ConfirmPrompt};
use crate::outcome::{check_hotel_pick, Decline, Outcome, RosterError};
use crate::roster::Roster;

/// Hotel edits for the flat package shape
impl Roster<Package> {
    /// Append one `{hotel, room_type}` entry per selected room type
    pub fn add_hotels(
        &mut self,
        id: Uuid,
        hotel: &str,
        room_types: &[String],
    ) -> Result<Outcome<Vec<PackageHotel>>, RosterError> {
        if let Some(reason) = check_hotel_pick(hotel, room_types) {
            debug!("Declined hotel add on package {}: {}", id, reason);
            return Ok(Outcome::Declined(reason));
        }

        let added: Vec<PackageHotel> = room_types
            .iter()
            .map(|room_type| PackageHotel::new(hotel, room_type.as_str()))
            .collect();
        self.record_mut(id)?.hotels.extend(added.iter().cloned());
        Ok(Outcome::Applied(added))
    }

    /// Remove a single hotel entry
    pub fn remove_hotel(&mut self, id: Uuid, entry_id: Uuid) -> Result<PackageHotel, RosterError> {
        let hotels = &mut self.record_mut(id)?.hotels;
        let index = hotels
            .iter()
            .position(|h| h.id == entry_id)
            .ok_or(RosterError::HotelNotFound(entry_id))?;
        Ok(hotels.remove(index))
    }

    /// Remove every entry booked at `hotel`, whatever its room type
    pub fn remove_hotel_group<C>(
        &mut self,
        id: Uuid,
        hotel: &str,
        confirm: &C,
    ) -> Result<Outcome<Vec<PackageHotel>>, RosterError>
    where
        C: Confirm + ?Sized,
    {
        let record = self.record_mut(id)?;

        if !record.hotels.iter().any(|entry| entry.hotel == hotel) {
            debug!("No {} entries on package {}", hotel, id);
            return Ok(Outcome::Declined(Decline::EmptySelection));
        }

        if !confirm.confirm(&ConfirmPrompt::remove_hotel_group(hotel)) {
            debug!("Removal of {} from package {} not confirmed", hotel, id);
            return Ok(Outcome::Declined(Decline::ConfirmationDeclined));
        }

        let (removed, kept): (Vec<PackageHotel>, Vec<PackageHotel>) = record
            .hotels
            .drain(..)
            .partition(|entry| entry.hotel == hotel);
        record.hotels = kept;
        Ok(Outcome::Applied(removed))
    }
}
