//! Static turf catalog: record types, the closed city set, and the fixed
//! time-slot vocabulary.

mod catalog;
mod city;
mod slots;
mod turf;

pub use catalog::Catalog;
pub use city::{City, CityFilter};
pub use slots::{ANY_TIME, BOOKING_TIME_SLOTS, QUICK_AREAS, SEARCH_TIME_SLOTS};
pub use turf::TurfRecord;
