//! Dialog state for the edit screens.
//!
//! Each screen tracks exactly two booleans for its editor: whether the dialog
//! is open and whether it was opened to edit an existing record. Both are
//! reset whenever the dialog closes.

use tourdesk_shared::{Destination, DestinationHotel, Itinerary, Package};
use uuid::Uuid;

/// Open/closed and create/edit state plus the form draft
#[derive(Debug, Clone, Default)]
pub struct EditorDialog<D> {
    visible: bool,
    editing: Option<Uuid>,
    pub draft: D,
}

impl<D: Default> EditorDialog<D> {
    pub fn new() -> Self {
        Self {
            visible: false,
            editing: None,
            draft: D::default(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn editing_id(&self) -> Option<Uuid> {
        self.editing
    }

    /// "Add" clicked: open with an empty draft
    pub fn open_create(&mut self) {
        self.visible = true;
        self.editing = None;
        self.draft = D::default();
    }

    /// "Edit" clicked: open on a record with a prefilled draft
    pub fn open_edit(&mut self, id: Uuid, draft: D) {
        self.visible = true;
        self.editing = Some(id);
        self.draft = draft;
    }

    pub fn cancel(&mut self) {
        self.close();
    }

    pub fn hide(&mut self) {
        self.close();
    }

    /// Closing always drops the draft and the editing flag
    pub fn close(&mut self) {
        self.visible = false;
        self.editing = None;
        self.draft = D::default();
    }

    pub fn title(&self, noun: &str) -> String {
        let mut chars = noun.chars();
        let noun = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        if self.is_editing() {
            format!("Edit {}", noun)
        } else {
            format!("Add New {}", noun)
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update"
        } else {
            "Add"
        }
    }
}

/// Nights and city, the two fields every record form has
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDraft {
    pub nights: u32,
    pub city: String,
}

impl Default for RecordDraft {
    fn default() -> Self {
        Self {
            nights: 1,
            city: String::new(),
        }
    }
}

impl RecordDraft {
    pub fn from_record<R: Itinerary>(record: &R) -> Self {
        Self {
            nights: record.nights(),
            city: record.city().to_string(),
        }
    }

    /// Parse the nights text box; anything but a positive integer becomes 1
    pub fn set_nights_input(&mut self, input: &str) {
        self.nights = parse_nights(input);
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }
}

impl From<&Package> for RecordDraft {
    fn from(package: &Package) -> Self {
        Self::from_record(package)
    }
}

fn parse_nights(input: &str) -> u32 {
    let trimmed = input.trim();
    let digits_end = trimmed
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && (*c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());

    match trimmed[..digits_end].trim_start_matches('+').parse::<u32>() {
        Ok(0) | Err(_) => 1,
        Ok(n) => n,
    }
}

/// Hotel dropdown plus room-type multi-select
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotelPicker {
    hotel: Option<String>,
    room_types: Vec<String>,
}

impl HotelPicker {
    pub fn hotel(&self) -> Option<&str> {
        self.hotel.as_deref()
    }

    pub fn room_types(&self) -> &[String] {
        &self.room_types
    }

    /// Choosing a different hotel clears the room-type selection
    pub fn select_hotel(&mut self, hotel: impl Into<String>) {
        let hotel = hotel.into();
        if self.hotel.as_deref() != Some(hotel.as_str()) {
            self.room_types.clear();
        }
        self.hotel = Some(hotel);
    }

    pub fn toggle_room_type(&mut self, room_type: impl Into<String>) {
        toggle(&mut self.room_types, room_type.into());
    }

    pub fn set_room_types(&mut self, room_types: Vec<String>) {
        self.room_types = room_types;
    }

    /// Whether the "Add Hotel" button would be enabled
    pub fn is_ready(&self) -> bool {
        self.hotel.is_some() && !self.room_types.is_empty()
    }

    pub fn clear(&mut self) {
        self.hotel = None;
        self.room_types.clear();
    }
}

/// Destination form: the stay fields, add-on selections and inline hotels
#[derive(Debug, Clone, Default)]
pub struct DestinationDraft {
    pub stay: RecordDraft,
    pub excursions: Vec<String>,
    pub tour_services: Vec<String>,
    pub hotel: HotelPicker,
    /// Hotels picked while creating; they join the record on submit
    pub staged_hotels: Vec<DestinationHotel>,
}

impl DestinationDraft {
    pub fn toggle_excursion(&mut self, name: impl Into<String>) {
        toggle(&mut self.excursions, name.into());
    }

    pub fn toggle_tour_service(&mut self, name: impl Into<String>) {
        toggle(&mut self.tour_services, name.into());
    }
}

impl From<&Destination> for DestinationDraft {
    fn from(destination: &Destination) -> Self {
        Self {
            stay: RecordDraft::from_record(destination),
            excursions: destination.excursions.iter().map(|e| e.name.clone()).collect(),
            tour_services: destination.tour_services.iter().map(|s| s.name.clone()).collect(),
            hotel: HotelPicker::default(),
            staged_hotels: Vec::new(),
        }
    }
}

/// The package "Add Services" dialog, opened for one package at a time
#[derive(Debug, Clone, Default)]
pub struct ServicesDialog {
    target: Option<Uuid>,
    pub hotel: HotelPicker,
    pub excursions: Vec<String>,
    pub tour_services: Vec<String>,
}

impl ServicesDialog {
    pub fn open(&mut self, package_id: Uuid) {
        self.target = Some(package_id);
    }

    pub fn is_visible(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<Uuid> {
        self.target
    }

    pub fn toggle_excursion(&mut self, name: impl Into<String>) {
        toggle(&mut self.excursions, name.into());
    }

    pub fn toggle_tour_service(&mut self, name: impl Into<String>) {
        toggle(&mut self.tour_services, name.into());
    }

    /// Close and reset all three sections
    pub fn close(&mut self) {
        self.target = None;
        self.hotel.clear();
        self.excursions.clear();
        self.tour_services.clear();
    }
}

fn toggle(selection: &mut Vec<String>, value: String) {
    if let Some(index) = selection.iter().position(|v| *v == value) {
        selection.remove(index);
    } else {
        selection.push(value);
    }
}
