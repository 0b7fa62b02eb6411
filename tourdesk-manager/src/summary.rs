use serde::{Deserialize, Serialize};
use tourdesk_shared::Itinerary;
use uuid::Uuid;

use crate::table::TableView;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Prefix the summary with a `Hotels:` line
    #[serde(default)]
    pub include_hotels: bool,
}

/// Summary column lines; a line is omitted when its collection is empty
pub fn summary_lines<R: Itinerary>(record: &R, options: SummaryOptions) -> Vec<String> {
    let mut lines = Vec::new();

    if options.include_hotels {
        let hotels = record.hotel_labels().join(", ");
        if !hotels.is_empty() {
            lines.push(format!("Hotels: {}", hotels));
        }
    }

    let excursions = join_names(record.excursions().iter().map(|e| e.name.as_str()));
    if !excursions.is_empty() {
        lines.push(format!("Excursions: {}", excursions));
    }

    let services = join_names(record.tour_services().iter().map(|s| s.name.as_str()));
    if !services.is_empty() {
        lines.push(format!("Services: {}", services));
    }

    lines
}

pub fn summary_text<R: Itinerary>(record: &R, options: SummaryOptions) -> String {
    summary_lines(record, options).join("\n")
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

/// One table row as the screen displays it
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub id: Uuid,
    pub city: String,
    pub nights: u32,
    pub summary: Vec<String>,
    pub hotel_count: usize,
    pub expanded: bool,
}

impl TableRow {
    pub fn new<R: Itinerary>(record: &R, view: &TableView, options: SummaryOptions) -> Self {
        Self {
            id: record.id(),
            city: record.city().to_string(),
            nights: record.nights(),
            summary: summary_lines(record, options),
            hotel_count: record.hotel_count(),
            expanded: view.is_expanded(record.id()),
        }
    }
}

pub fn table_rows<R: Itinerary>(records: &[R], view: &TableView, options: SummaryOptions) -> Vec<TableRow> {
    records
        .iter()
        .map(|record| TableRow::new(record, view, options))
        .collect()
}
