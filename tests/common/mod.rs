#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use car_rental::{
    booking::SubmitOptions,
    config::{AppContext, ConfigManager},
    domain::{BookingDraft, BookingField},
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a unique directory that outlives the calling test.
pub fn temp_base_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn setup_config_manager() -> ConfigManager {
    ConfigManager::with_base_dir(temp_base_dir()).expect("create config manager for temp dir")
}

pub fn default_options() -> SubmitOptions<'static> {
    SubmitOptions {
        destination: "+351 912 345 678",
        currency_symbol: "€",
        fallback_rate: 50.0,
    }
}

pub fn english() -> AppContext {
    AppContext::default()
}

/// A draft with every step filled in, renting 2026-01-27 to 2026-01-30.
pub fn complete_draft(car_id: &str) -> BookingDraft {
    let mut draft = BookingDraft::new();
    for (field, value) in [
        (BookingField::PickupLocation, "Faro Airport"),
        (BookingField::DropoffLocation, "Lagos"),
        (BookingField::PickupDate, "2026-01-27"),
        (BookingField::PickupTime, "10:00"),
        (BookingField::ReturnDate, "2026-01-30"),
        (BookingField::ReturnTime, "18:00"),
        (BookingField::SelectedCarId, car_id),
        (BookingField::FirstName, "Ana"),
        (BookingField::LastName, "Silva"),
        (BookingField::Email, "ana@example.com"),
        (BookingField::Phone, "+351 912 000 000"),
    ] {
        draft.set(field, value);
    }
    draft
}

pub const CARS_JSON: &str = r#"[
  {
    "id": "a1",
    "slug": "peugeot-208",
    "brand": "Peugeot",
    "model": "208",
    "price_per_day": 42.5,
    "transmission": "manual",
    "fuel": "petrol",
    "seats": 5,
    "location_availability": ["Faro Airport", "Lagos"],
    "tags": ["Economy"]
  },
  {
    "id": "a2",
    "slug": "volvo-xc40",
    "brand": "Volvo",
    "model": "XC40",
    "price_per_day": 95,
    "transmission": "automatic",
    "fuel": "hybrid",
    "seats": 5,
    "horsepower": 197,
    "featured": true,
    "tags": ["SUV"]
  }
]"#;
