use std::fmt;

use serde::Serialize;
use uuid::Uuid;

/// Result of an edit whose preconditions may be unmet.
///
/// A missing required input is not an error: the edit is declined and the
/// state is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Applied(T),
    Declined(Decline),
}

impl<T> Outcome<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    pub fn applied(self) -> Option<T> {
        match self {
            Outcome::Applied(value) => Some(value),
            Outcome::Declined(_) => None,
        }
    }

    pub fn decline(&self) -> Option<Decline> {
        match self {
            Outcome::Applied(_) => None,
            Outcome::Declined(reason) => Some(*reason),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Applied(value) => Outcome::Applied(f(value)),
            Outcome::Declined(reason) => Outcome::Declined(reason),
        }
    }
}

/// Which precondition stopped an edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decline {
    InvalidNights,
    MissingCity,
    MissingHotel,
    EmptySelection,
    NoRecordSelected,
    ConfirmationDeclined,
}

impl fmt::Display for Decline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Decline::InvalidNights => "nights must be at least 1",
            Decline::MissingCity => "city is required",
            Decline::MissingHotel => "hotel is required",
            Decline::EmptySelection => "nothing selected",
            Decline::NoRecordSelected => "no record selected",
            Decline::ConfirmationDeclined => "confirmation declined",
        };
        f.write_str(text)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("Record not found: {0}")]
    RecordNotFound(Uuid),

    #[error("Hotel not found: {0}")]
    HotelNotFound(Uuid),

    #[error("Room type not found: {0}")]
    RoomTypeNotFound(Uuid),

    #[error("Item not found: {0}")]
    ItemNotFound(Uuid),

    #[error("Row {index} out of range for {len} rows")]
    RowOutOfRange { index: usize, len: usize },
}

/// Check the two required fields of a stay
pub(crate) fn check_stay(nights: u32, city: &str) -> Option<Decline> {
    if nights < 1 {
        Some(Decline::InvalidNights)
    } else if city.trim().is_empty() {
        Some(Decline::MissingCity)
    } else {
        None
    }
}

/// Check a hotel pick: a name and at least one room type
pub(crate) fn check_hotel_pick(hotel: &str, room_types: &[String]) -> Option<Decline> {
    if hotel.trim().is_empty() {
        Some(Decline::MissingHotel)
    } else if room_types.is_empty() {
        Some(Decline::EmptySelection)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_stay() {
        assert_eq!(check_stay(0, "Paris"), Some(Decline::InvalidNights));
        assert_eq!(check_stay(3, "  "), Some(Decline::MissingCity));
        assert_eq!(check_stay(3, "Paris"), None);
    }

    #[test]
    fn test_outcome_map_keeps_decline() {
        let declined: Outcome<u32> = Outcome::Declined(Decline::EmptySelection);
        assert_eq!(declined.map(|n| n + 1), Outcome::Declined(Decline::EmptySelection));
        assert_eq!(Outcome::Applied(1).map(|n| n + 1).applied(), Some(2));
    }
}
