pub mod options;

pub use options::{HotelOption, OptionCatalog};
