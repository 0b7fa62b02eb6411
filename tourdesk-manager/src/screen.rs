//! Screen-level state containers.
//!
//! A screen bundles its roster with the dialog and table state the UI
//! callbacks drive. Nothing here knows how the screen is rendered.
//!
//! The HTTP admin surface only uses a screen for table rows, expansion,
//! deletes and reorders; its edits go straight to `roster`. The dialog
//! methods serve an interactive front end.

use std::sync::Arc;

use tourdesk_catalog::OptionCatalog;
use tourdesk_shared::{Destination, DestinationHotel, Package, PackageHotel, ScreenKind};
use tracing::debug;
use uuid::Uuid;

use crate::confirm::Confirm;
use crate::dialog::{DestinationDraft, EditorDialog, RecordDraft, ServicesDialog};
use crate::expansion::{DestinationExpansion, PackageExpansion};
use crate::outcome::{check_hotel_pick, Decline, Outcome, RosterError};
use crate::roster::Roster;
use crate::summary::{table_rows, SummaryOptions, TableRow};
use crate::table::TableView;

/// Package screen: records, the add/edit dialog, the services dialog and
/// the table's expanded rows
#[derive(Debug, Clone)]
pub struct PackageScreen {
    pub roster: Roster<Package>,
    pub editor: EditorDialog<RecordDraft>,
    pub services: ServicesDialog,
    pub table: TableView,
    catalog: Arc<OptionCatalog>,
    summary: SummaryOptions,
}

impl PackageScreen {
    pub fn new(catalog: Arc<OptionCatalog>, summary: SummaryOptions, records: Vec<Package>) -> Self {
        Self {
            roster: Roster::from_records(records),
            editor: EditorDialog::new(),
            services: ServicesDialog::default(),
            table: TableView::new(),
            catalog,
            summary,
        }
    }

    pub fn catalog(&self) -> &OptionCatalog {
        &self.catalog
    }

    pub fn rows(&self) -> Vec<TableRow> {
        table_rows(self.roster.list(), &self.table, self.summary)
    }

    pub fn expansion(&self, id: Uuid) -> Result<PackageExpansion, RosterError> {
        self.roster.require(id).map(PackageExpansion::of)
    }

    pub fn toggle_row(&mut self, id: Uuid) -> Result<bool, RosterError> {
        self.roster.require(id)?;
        Ok(self.table.toggle(id))
    }

    pub fn open_create(&mut self) {
        self.editor.open_create();
    }

    pub fn open_edit(&mut self, id: Uuid) -> Result<(), RosterError> {
        let draft = RecordDraft::from(self.roster.require(id)?);
        self.editor.open_edit(id, draft);
        Ok(())
    }

    pub fn cancel_editor(&mut self) {
        self.editor.cancel();
    }

    /// Submit the editor; it closes only when the edit is applied
    pub fn submit_editor(&mut self) -> Result<Outcome<Package>, RosterError> {
        let RecordDraft { nights, city } = self.editor.draft.clone();
        let outcome = match self.editor.editing_id() {
            Some(id) => self.roster.update(id, nights, &city)?,
            None => self.roster.create(nights, &city),
        };

        if outcome.is_applied() {
            self.editor.close();
        }
        Ok(outcome)
    }

    pub fn request_delete<C>(&mut self, id: Uuid, confirm: &C) -> Result<Outcome<Package>, RosterError>
    where
        C: Confirm + ?Sized,
    {
        let outcome = self.roster.delete(id, confirm)?;
        if outcome.is_applied() {
            self.forget(id);
        }
        Ok(outcome)
    }

    pub fn reorder_rows(&mut self, from: usize, to: usize) -> Result<(), RosterError> {
        self.roster.reorder(from, to)
    }

    pub fn open_services(&mut self, id: Uuid) -> Result<(), RosterError> {
        self.roster.require(id)?;
        self.services.open(id);
        Ok(())
    }

    pub fn close_services(&mut self) {
        self.services.close();
    }

    /// Room types the services dialog offers for its selected hotel
    pub fn room_type_options(&self) -> &[String] {
        match self.services.hotel.hotel() {
            Some(hotel) => self.catalog.room_type_options(hotel),
            None => &[],
        }
    }

    pub fn add_selected_hotels(&mut self) -> Result<Outcome<Vec<PackageHotel>>, RosterError> {
        let Some(id) = self.services.target() else {
            return Ok(Outcome::Declined(Decline::NoRecordSelected));
        };
        let hotel = self.services.hotel.hotel().unwrap_or_default().to_string();
        let room_types = self.services.hotel.room_types().to_vec();

        let outcome = self.roster.add_hotels(id, &hotel, &room_types)?;
        if outcome.is_applied() {
            self.services.hotel.clear();
        }
        Ok(outcome)
    }

    pub fn add_selected_excursions(&mut self) -> Result<Outcome<usize>, RosterError> {
        let Some(id) = self.services.target() else {
            return Ok(Outcome::Declined(Decline::NoRecordSelected));
        };

        let outcome = self.roster.add_excursions(id, &self.services.excursions)?;
        if outcome.is_applied() {
            self.services.excursions.clear();
        }
        Ok(outcome.map(|added| added.len()))
    }

    pub fn add_selected_tour_services(&mut self) -> Result<Outcome<usize>, RosterError> {
        let Some(id) = self.services.target() else {
            return Ok(Outcome::Declined(Decline::NoRecordSelected));
        };

        let outcome = self.roster.add_tour_services(id, &self.services.tour_services)?;
        if outcome.is_applied() {
            self.services.tour_services.clear();
        }
        Ok(outcome.map(|added| added.len()))
    }

    fn forget(&mut self, id: Uuid) {
        self.table.retain(&self.roster.ids());
        if self.services.target() == Some(id) {
            self.services.close();
        }
        if self.editor.editing_id() == Some(id) {
            self.editor.close();
        }
    }
}

/// Destination screen: records, the combined add/edit dialog with inline
/// hotel picking, and the table's expanded rows
#[derive(Debug, Clone)]
pub struct DestinationScreen {
    pub roster: Roster<Destination>,
    pub editor: EditorDialog<DestinationDraft>,
    pub table: TableView,
    catalog: Arc<OptionCatalog>,
    summary: SummaryOptions,
}

impl DestinationScreen {
    pub fn new(catalog: Arc<OptionCatalog>, summary: SummaryOptions, records: Vec<Destination>) -> Self {
        Self {
            roster: Roster::from_records(records),
            editor: EditorDialog::new(),
            table: TableView::new(),
            catalog,
            summary,
        }
    }

    pub fn catalog(&self) -> &OptionCatalog {
        &self.catalog
    }

    pub fn rows(&self) -> Vec<TableRow> {
        table_rows(self.roster.list(), &self.table, self.summary)
    }

    pub fn expansion(&self, id: Uuid) -> Result<DestinationExpansion, RosterError> {
        self.roster.require(id).map(DestinationExpansion::of)
    }

    pub fn toggle_row(&mut self, id: Uuid) -> Result<bool, RosterError> {
        self.roster.require(id)?;
        Ok(self.table.toggle(id))
    }

    pub fn open_create(&mut self) {
        self.editor.open_create();
    }

    pub fn open_edit(&mut self, id: Uuid) -> Result<(), RosterError> {
        let draft = DestinationDraft::from(self.roster.require(id)?);
        self.editor.open_edit(id, draft);
        Ok(())
    }

    pub fn cancel_editor(&mut self) {
        self.editor.cancel();
    }

    /// Room types offered for the picked hotel; unknown hotels offer none
    pub fn room_type_options(&self) -> &[String] {
        self.editor
            .draft
            .hotel
            .hotel()
            .and_then(|hotel| self.catalog.room_types_for(hotel))
            .unwrap_or(&[])
    }

    /// "Add Hotel" inside the editor.
    ///
    /// When editing, the hotel goes straight onto the record. When creating,
    /// it is staged in the draft until the destination is submitted.
    pub fn add_picked_hotel(&mut self) -> Result<Outcome<DestinationHotel>, RosterError> {
        if !self.editor.is_visible() {
            return Ok(Outcome::Declined(Decline::NoRecordSelected));
        }

        let picker = &self.editor.draft.hotel;
        let hotel = picker.hotel().unwrap_or_default().to_string();
        let room_types = picker.room_types().to_vec();

        let outcome = match self.editor.editing_id() {
            Some(id) => self.roster.add_hotel(id, &hotel, &room_types)?,
            None => match check_hotel_pick(&hotel, &room_types) {
                Some(reason) => Outcome::Declined(reason),
                None => {
                    let staged = DestinationHotel::new(hotel, room_types.iter().map(String::as_str));
                    self.editor.draft.staged_hotels.push(staged.clone());
                    Outcome::Applied(staged)
                }
            },
        };

        if outcome.is_applied() {
            self.editor.draft.hotel.clear();
        }
        Ok(outcome)
    }

    /// Submit the editor. Creating carries the add-on selections and staged
    /// hotels; editing overwrites nights and city only.
    pub fn submit_editor(&mut self) -> Result<Outcome<Destination>, RosterError> {
        let draft = &self.editor.draft;
        let outcome = match self.editor.editing_id() {
            Some(id) => {
                let RecordDraft { nights, city } = draft.stay.clone();
                self.roster.update(id, nights, &city)?
            }
            None => self.roster.create_with_addons(
                draft.stay.nights,
                &draft.stay.city,
                &draft.excursions,
                &draft.tour_services,
                draft.staged_hotels.clone(),
            ),
        };

        if outcome.is_applied() {
            self.editor.close();
        } else {
            debug!("{} editor stays open: {:?}", ScreenKind::Destinations.noun(), outcome.decline());
        }
        Ok(outcome)
    }

    pub fn request_delete<C>(&mut self, id: Uuid, confirm: &C) -> Result<Outcome<Destination>, RosterError>
    where
        C: Confirm + ?Sized,
    {
        let outcome = self.roster.delete(id, confirm)?;
        if outcome.is_applied() {
            self.table.retain(&self.roster.ids());
            if self.editor.editing_id() == Some(id) {
                self.editor.close();
            }
        }
        Ok(outcome)
    }

    pub fn reorder_rows(&mut self, from: usize, to: usize) -> Result<(), RosterError> {
        self.roster.reorder(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package_screen() -> PackageScreen {
        PackageScreen::new(Arc::new(OptionCatalog::standard()), SummaryOptions::default(), Vec::new())
    }

    fn destination_screen() -> DestinationScreen {
        DestinationScreen::new(Arc::new(OptionCatalog::standard()), SummaryOptions::default(), Vec::new())
    }

    #[test]
    fn test_package_create_through_editor() {
        let mut screen = package_screen();

        screen.open_create();
        screen.editor.draft.set_nights_input("6");
        screen.editor.draft.set_city("Paris");
        let created = screen.submit_editor().unwrap().applied().unwrap();

        assert!(!screen.editor.is_visible());
        assert_eq!(screen.roster.len(), 1);
        assert_eq!((created.nights, created.city.as_str()), (6, "Paris"));
        assert!(created.hotels.is_empty());
    }

    #[test]
    fn test_declined_submit_keeps_dialog_open() {
        let mut screen = package_screen();

        screen.open_create();
        screen.editor.draft.set_nights_input("3");
        let outcome = screen.submit_editor().unwrap();

        assert_eq!(outcome.decline(), Some(Decline::MissingCity));
        assert!(screen.editor.is_visible());
        assert_eq!(screen.editor.draft.nights, 3);
        assert!(screen.roster.is_empty());
    }

    #[test]
    fn test_package_edit_preserves_nested() {
        let mut screen = package_screen();
        let id = screen.roster.create(6, "Paris").applied().unwrap().id;
        screen.open_services(id).unwrap();
        screen.services.hotel.select_hotel("Hotel Luxury");
        screen.services.hotel.toggle_room_type("Double");
        screen.add_selected_hotels().unwrap();
        screen.close_services();

        screen.open_edit(id).unwrap();
        assert!(screen.editor.is_editing());
        screen.editor.draft.set_nights_input("9");
        let updated = screen.submit_editor().unwrap().applied().unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.nights, 9);
        assert_eq!(updated.city, "Paris");
        assert_eq!(updated.hotels.len(), 1);
        assert!(!screen.editor.is_editing());
    }

    #[test]
    fn test_services_dialog_flow() {
        let mut screen = package_screen();
        let id = screen.roster.create(6, "Paris").applied().unwrap().id;

        assert_eq!(
            screen.add_selected_excursions().unwrap().decline(),
            Some(Decline::NoRecordSelected)
        );

        screen.open_services(id).unwrap();
        screen.services.hotel.select_hotel("Hotel Luxury");
        assert_eq!(screen.room_type_options(), ["Single", "Double", "Suite"]);
        screen.services.hotel.toggle_room_type("Double");
        screen.services.hotel.toggle_room_type("Master");
        let hotels = screen.add_selected_hotels().unwrap().applied().unwrap();
        assert_eq!(hotels.len(), 2);
        assert!(screen.services.hotel.hotel().is_none());

        assert_eq!(
            screen.add_selected_excursions().unwrap().decline(),
            Some(Decline::EmptySelection)
        );
        screen.services.toggle_excursion("Louvre Museum");
        screen.services.toggle_tour_service("City Guide");
        screen.services.toggle_tour_service("Car Rental");
        assert_eq!(screen.add_selected_excursions().unwrap().applied(), Some(1));
        assert_eq!(screen.add_selected_tour_services().unwrap().applied(), Some(2));
        assert!(screen.services.is_visible());

        let package = screen.roster.get(id).unwrap();
        assert_eq!(package.hotels.len(), 2);
        assert_eq!(package.excursions.len(), 1);
        assert_eq!(package.tour_services.len(), 2);
    }

    #[test]
    fn test_unknown_hotel_offers_default_room_types() {
        let mut screen = package_screen();
        let id = screen.roster.create(2, "Rome").applied().unwrap().id;
        screen.open_services(id).unwrap();
        screen.services.hotel.select_hotel("Pension Roma");

        assert_eq!(screen.room_type_options(), ["Single", "Double", "Master"]);
    }

    #[test]
    fn test_delete_prunes_view_state() {
        let mut screen = package_screen();
        let keep = screen.roster.create(6, "Paris").applied().unwrap().id;
        let gone = screen.roster.create(2, "London").applied().unwrap().id;
        screen.toggle_row(gone).unwrap();
        screen.toggle_row(keep).unwrap();
        screen.open_services(gone).unwrap();

        let declined = screen.request_delete(gone, &false).unwrap();
        assert!(!declined.is_applied());
        assert_eq!(screen.roster.len(), 2);
        assert!(screen.services.is_visible());

        screen.request_delete(gone, &true).unwrap();
        assert_eq!(screen.roster.len(), 1);
        assert!(!screen.services.is_visible());
        let rows = screen.rows();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].expanded);
        assert_eq!(screen.table.expanded_count(), 1);
    }

    #[test]
    fn test_destination_create_stages_hotels() {
        let mut screen = destination_screen();

        screen.open_create();
        screen.editor.draft.stay.set_nights_input("5");
        screen.editor.draft.stay.set_city("Rome");
        screen.editor.draft.toggle_excursion("Versailles Palace");
        screen.editor.draft.toggle_tour_service("WiFi Device");
        screen.editor.draft.hotel.select_hotel("Budget Inn");
        assert_eq!(screen.room_type_options(), ["Single", "Double"]);
        screen.editor.draft.hotel.toggle_room_type("Single");
        screen.add_picked_hotel().unwrap().applied().unwrap();
        assert!(screen.roster.is_empty());
        assert_eq!(screen.editor.draft.staged_hotels.len(), 1);

        let created = screen.submit_editor().unwrap().applied().unwrap();

        assert_eq!(created.hotels.len(), 1);
        assert_eq!(created.hotels[0].room_types[0].name, "Single");
        assert_eq!(created.excursions[0].name, "Versailles Palace");
        assert_eq!(created.tour_services[0].name, "WiFi Device");
        assert!(screen.editor.draft.staged_hotels.is_empty());
    }

    #[test]
    fn test_destination_edit_adds_hotel_immediately() {
        let mut screen = destination_screen();
        let id = screen.roster.create(6, "Paris").applied().unwrap().id;

        screen.open_edit(id).unwrap();
        screen.editor.draft.hotel.select_hotel("Hotel Luxury");
        screen.editor.draft.hotel.toggle_room_type("Double");
        screen.editor.draft.hotel.toggle_room_type("Suite");
        screen.add_picked_hotel().unwrap();

        assert_eq!(screen.roster.get(id).unwrap().hotels.len(), 1);
        assert_eq!(screen.roster.get(id).unwrap().hotels[0].room_types.len(), 2);

        screen.cancel_editor();
        assert!(!screen.editor.is_visible());
        assert_eq!(screen.roster.get(id).unwrap().hotels.len(), 1);
    }

    #[test]
    fn test_destination_edit_ignores_addon_selection() {
        let mut screen = destination_screen();
        let id = screen.roster.create(6, "Paris").applied().unwrap().id;

        screen.open_edit(id).unwrap();
        screen.editor.draft.toggle_excursion("Louvre Museum");
        screen.editor.draft.stay.set_city("Amsterdam");
        let updated = screen.submit_editor().unwrap().applied().unwrap();

        assert_eq!(updated.city, "Amsterdam");
        assert!(updated.excursions.is_empty());
    }

    #[test]
    fn test_destination_unknown_hotel_offers_nothing() {
        let mut screen = destination_screen();
        screen.open_create();
        screen.editor.draft.hotel.select_hotel("Pension Roma");

        assert!(screen.room_type_options().is_empty());
        assert_eq!(
            screen.add_picked_hotel().unwrap().decline(),
            Some(Decline::EmptySelection)
        );
    }
}
