use tourdesk_shared::{Excursion, Itinerary, TourService};
use tracing::debug;
use uuid::Uuid;

use crate::confirm::{Confirm, ConfirmPrompt};
use crate::outcome::{check_stay, Decline, Outcome, RosterError};

/// The ordered record list behind one screen.
///
/// The roster exclusively owns its records and each record owns its nested
/// collections. Row order is display order.
#[derive(Debug, Clone)]
pub struct Roster<R> {
    records: Vec<R>,
}

impl<R: Itinerary> Roster<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn from_records(records: Vec<R>) -> Self {
        Self { records }
    }

    pub fn list(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ids(&self) -> Vec<Uuid> {
        self.records.iter().map(|r| r.id()).collect()
    }

    pub fn get(&self, id: Uuid) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Look up a record or fail with `RecordNotFound`
    pub fn require(&self, id: Uuid) -> Result<&R, RosterError> {
        self.get(id).ok_or(RosterError::RecordNotFound(id))
    }

    /// Append a new record with empty nested collections
    pub fn create(&mut self, nights: u32, city: &str) -> Outcome<R> {
        self.insert(R::fresh(nights, city.to_string()))
    }

    /// Append a prepared record, subject to the same checks as `create`
    pub fn insert(&mut self, record: R) -> Outcome<R> {
        if let Some(reason) = check_stay(record.nights(), record.city()) {
            debug!("Declined {} create: {}", R::SCREEN.noun(), reason);
            return Outcome::Declined(reason);
        }

        self.records.push(record.clone());
        Outcome::Applied(record)
    }

    /// Overwrite nights and city; id and nested collections are preserved
    pub fn update(&mut self, id: Uuid, nights: u32, city: &str) -> Result<Outcome<R>, RosterError> {
        if let Some(reason) = check_stay(nights, city) {
            debug!("Declined {} update {}: {}", R::SCREEN.noun(), id, reason);
            return Ok(Outcome::Declined(reason));
        }

        let record = self.record_mut(id)?;
        record.retime(nights, city.to_string());
        Ok(Outcome::Applied(record.clone()))
    }

    /// Remove a record once the confirmation is accepted
    pub fn delete<C>(&mut self, id: Uuid, confirm: &C) -> Result<Outcome<R>, RosterError>
    where
        C: Confirm + ?Sized,
    {
        let index = self.index_of(id)?;

        if !confirm.confirm(&ConfirmPrompt::delete(R::SCREEN.noun())) {
            debug!("Delete of {} {} not confirmed", R::SCREEN.noun(), id);
            return Ok(Outcome::Declined(Decline::ConfirmationDeclined));
        }

        Ok(Outcome::Applied(self.records.remove(index)))
    }

    /// Move the row at `from` so it ends up at `to`
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), RosterError> {
        let len = self.records.len();
        for index in [from, to] {
            if index >= len {
                return Err(RosterError::RowOutOfRange { index, len });
            }
        }

        let record = self.records.remove(from);
        self.records.insert(to, record);
        Ok(())
    }

    pub fn add_excursions(
        &mut self,
        id: Uuid,
        names: &[String],
    ) -> Result<Outcome<Vec<Excursion>>, RosterError> {
        if names.is_empty() {
            return Ok(Outcome::Declined(Decline::EmptySelection));
        }

        let added: Vec<Excursion> = names.iter().map(|name| Excursion::new(name.as_str())).collect();
        self.record_mut(id)?.excursions_mut().extend(added.iter().cloned());
        Ok(Outcome::Applied(added))
    }

    pub fn add_tour_services(
        &mut self,
        id: Uuid,
        names: &[String],
    ) -> Result<Outcome<Vec<TourService>>, RosterError> {
        if names.is_empty() {
            return Ok(Outcome::Declined(Decline::EmptySelection));
        }

        let added: Vec<TourService> = names.iter().map(|name| TourService::new(name.as_str())).collect();
        self.record_mut(id)?.tour_services_mut().extend(added.iter().cloned());
        Ok(Outcome::Applied(added))
    }

    pub fn remove_excursion(&mut self, id: Uuid, excursion_id: Uuid) -> Result<Excursion, RosterError> {
        let excursions = self.record_mut(id)?.excursions_mut();
        let index = excursions
            .iter()
            .position(|e| e.id == excursion_id)
            .ok_or(RosterError::ItemNotFound(excursion_id))?;
        Ok(excursions.remove(index))
    }

    pub fn remove_tour_service(&mut self, id: Uuid, service_id: Uuid) -> Result<TourService, RosterError> {
        let services = self.record_mut(id)?.tour_services_mut();
        let index = services
            .iter()
            .position(|s| s.id == service_id)
            .ok_or(RosterError::ItemNotFound(service_id))?;
        Ok(services.remove(index))
    }

    fn index_of(&self, id: Uuid) -> Result<usize, RosterError> {
        self.records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(RosterError::RecordNotFound(id))
    }

    pub(crate) fn record_mut(&mut self, id: Uuid) -> Result<&mut R, RosterError> {
        self.records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(RosterError::RecordNotFound(id))
    }
}

impl<R: Itinerary> Default for Roster<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourdesk_shared::{Destination, Package};

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_create_on_empty_roster() {
        let mut roster: Roster<Package> = Roster::new();

        let created = roster.create(6, "Paris").applied().unwrap();

        assert_eq!(roster.len(), 1);
        let stored = roster.get(created.id).unwrap();
        assert_eq!(stored.nights, 6);
        assert_eq!(stored.city, "Paris");
        assert!(stored.hotels.is_empty());
        assert!(stored.excursions.is_empty());
        assert!(stored.tour_services.is_empty());
    }

    #[test]
    fn test_create_declines_missing_fields() {
        let mut roster: Roster<Destination> = Roster::new();

        assert_eq!(roster.create(0, "Paris").decline(), Some(Decline::InvalidNights));
        assert_eq!(roster.create(2, "").decline(), Some(Decline::MissingCity));
        assert!(roster.is_empty());
    }

    #[test]
    fn test_update_preserves_id_and_nested_collections() {
        let mut roster: Roster<Package> = Roster::new();
        let id = roster.create(6, "Paris").applied().unwrap().id;
        roster.add_excursions(id, &names(&["Louvre Museum"])).unwrap();
        roster.add_tour_services(id, &names(&["City Guide", "Car Rental"])).unwrap();

        let updated = roster.update(id, 3, "Rome").unwrap().applied().unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.nights, 3);
        assert_eq!(updated.city, "Rome");
        assert_eq!(updated.excursions.len(), 1);
        assert_eq!(updated.tour_services.len(), 2);
    }

    #[test]
    fn test_update_declined_leaves_record() {
        let mut roster: Roster<Package> = Roster::new();
        let id = roster.create(6, "Paris").applied().unwrap().id;

        let outcome = roster.update(id, 4, "").unwrap();

        assert_eq!(outcome.decline(), Some(Decline::MissingCity));
        assert_eq!(roster.get(id).unwrap().city, "Paris");
        assert_eq!(roster.get(id).unwrap().nights, 6);
    }

    #[test]
    fn test_update_unknown_record() {
        let mut roster: Roster<Package> = Roster::new();
        let missing = Uuid::new_v4();
        assert_eq!(
            roster.update(missing, 2, "Rome").unwrap_err(),
            RosterError::RecordNotFound(missing)
        );
    }

    #[test]
    fn test_delete_confirmed_and_declined() {
        let mut roster: Roster<Package> = Roster::new();
        let first = roster.create(6, "Paris").applied().unwrap().id;
        let second = roster.create(2, "London").applied().unwrap().id;
        roster.create(4, "Rome");

        let declined = roster.delete(second, &false).unwrap();
        assert_eq!(declined.decline(), Some(Decline::ConfirmationDeclined));
        assert_eq!(roster.ids().len(), 3);

        let removed = roster.delete(second, &true).unwrap().applied().unwrap();
        assert_eq!(removed.city, "London");
        assert_eq!(roster.len(), 2);
        assert!(roster.get(second).is_none());
        assert!(roster.get(first).is_some());
    }

    #[test]
    fn test_reorder_moves_row() {
        let mut roster: Roster<Destination> = Roster::new();
        let a = roster.create(1, "Paris").applied().unwrap().id;
        let b = roster.create(2, "London").applied().unwrap().id;
        let c = roster.create(3, "Rome").applied().unwrap().id;

        roster.reorder(2, 0).unwrap();
        assert_eq!(roster.ids(), vec![c, a, b]);

        assert_eq!(
            roster.reorder(0, 3).unwrap_err(),
            RosterError::RowOutOfRange { index: 3, len: 3 }
        );
    }

    #[test]
    fn test_add_excursions_empty_selection_is_noop() {
        let mut roster: Roster<Package> = Roster::new();
        let id = roster.create(6, "Paris").applied().unwrap().id;

        let outcome = roster.add_excursions(id, &[]).unwrap();

        assert_eq!(outcome.decline(), Some(Decline::EmptySelection));
        assert!(roster.get(id).unwrap().excursions.is_empty());
    }

    #[test]
    fn test_remove_addons_by_id() {
        let mut roster: Roster<Destination> = Roster::new();
        let id = roster.create(6, "Paris").applied().unwrap().id;
        let excursions = roster
            .add_excursions(id, &names(&["Eiffel Tower Tour", "Seine River Cruise"]))
            .unwrap()
            .applied()
            .unwrap();
        let services = roster
            .add_tour_services(id, &names(&["WiFi Device"]))
            .unwrap()
            .applied()
            .unwrap();

        let removed = roster.remove_excursion(id, excursions[0].id).unwrap();
        assert_eq!(removed.name, "Eiffel Tower Tour");
        roster.remove_tour_service(id, services[0].id).unwrap();

        let record = roster.get(id).unwrap();
        assert_eq!(record.excursions.len(), 1);
        assert_eq!(record.excursions[0].name, "Seine River Cruise");
        assert!(record.tour_services.is_empty());

        let stale = excursions[0].id;
        assert_eq!(
            roster.remove_excursion(id, stale).unwrap_err(),
            RosterError::ItemNotFound(stale)
        );
    }
}
