pub mod models;

pub use models::{Excursion, Itinerary, TourService};
pub use models::package::{Package, PackageHotel};
pub use models::destination::{Destination, DestinationHotel, RoomType};
pub use models::events::{ChangeKind, RosterChangedEvent, ScreenKind};
