pub mod outcome;
pub mod confirm;
pub mod roster;
pub mod package;
pub mod destination;
pub mod dialog;
pub mod table;
pub mod summary;
pub mod expansion;
pub mod screen;

pub use outcome::{Decline, Outcome, RosterError};
pub use confirm::{Confirm, ConfirmPrompt};
pub use roster::Roster;
pub use dialog::{DestinationDraft, EditorDialog, HotelPicker, RecordDraft, ServicesDialog};
pub use table::TableView;
pub use summary::{SummaryOptions, TableRow};
pub use expansion::{DestinationExpansion, HotelGroup, PackageExpansion};
pub use screen::{DestinationScreen, PackageScreen};
