//! Pure domain models: vehicles, locations and the booking draft.
//! No I/O, no CLI.

pub mod car;
pub mod draft;
pub mod location;

pub use car::{Car, Fuel, Transmission};
pub use draft::{BookingDraft, BookingField};
pub use location::Location;
