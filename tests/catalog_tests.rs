mod common;

use std::fs;

use car_rental::catalog::{
    load_catalog, load_from_source, CarCatalog, CatalogLoad, FallbackReason, JsonFileCatalog,
};
use car_rental::config::CatalogSource;
use car_rental::domain::{Fuel, Location, Transmission};

use common::{temp_base_dir, CARS_JSON};

#[test]
fn json_file_rows_are_fetched() {
    let path = temp_base_dir().join("cars.json");
    fs::write(&path, CARS_JSON).unwrap();

    let provider = JsonFileCatalog::new(&path);
    let load = load_catalog(Some(&provider as &dyn CarCatalog));
    assert!(!load.is_fallback());

    let catalog = load.into_catalog();
    let volvo = catalog.find_by_slug("volvo-xc40").unwrap();
    assert_eq!(volvo.price_per_day, 95.0);
    assert_eq!(volvo.transmission, Transmission::Automatic);
    assert_eq!(volvo.fuel, Fuel::Hybrid);
    assert_eq!(volvo.horsepower, Some(197));
    assert_eq!(catalog.featured().len(), 1);

    let at_tavira: Vec<&str> = catalog
        .available_at(Location::Tavira)
        .iter()
        .map(|car| car.id.as_str())
        .collect();
    assert_eq!(at_tavira, vec!["a2"]);
    assert_eq!(catalog.matching_type("suv").map(|car| car.id.as_str()), Some("a2"));
}

#[test]
fn malformed_file_falls_back_to_bundled_list() {
    let path = temp_base_dir().join("cars.json");
    fs::write(&path, "{ not json").unwrap();

    let load = load_from_source(&CatalogSource::File { path });
    match &load {
        CatalogLoad::FallbackUsed {
            reason: FallbackReason::Failed(message),
            cars,
        } => {
            assert!(message.contains("Malformed"), "{message}");
            assert_eq!(cars.len(), 6);
        }
        other => panic!("expected fallback, got {other:?}"),
    }
}

#[test]
fn empty_file_falls_back_with_reason() {
    let path = temp_base_dir().join("cars.json");
    fs::write(&path, "[]").unwrap();

    let load = load_from_source(&CatalogSource::File { path });
    assert!(matches!(
        load,
        CatalogLoad::FallbackUsed {
            reason: FallbackReason::Empty,
            ..
        }
    ));
    assert!(!load.cars().is_empty());
}

#[test]
fn missing_file_falls_back() {
    let path = temp_base_dir().join("absent.json");
    let load = load_from_source(&CatalogSource::File { path });
    assert!(load.is_fallback());
}

#[test]
fn bundled_source_is_not_configured() {
    let load = load_from_source(&CatalogSource::Bundled);
    assert!(matches!(
        load,
        CatalogLoad::FallbackUsed {
            reason: FallbackReason::NotConfigured,
            ..
        }
    ));
}

#[test]
fn integer_primary_keys_are_fetched() {
    let path = temp_base_dir().join("cars.json");
    fs::write(
        &path,
        r#"[{"id": 7, "slug": "seat-ibiza", "brand": "Seat", "model": "Ibiza",
             "price_per_day": 38, "transmission": "manual", "fuel": "petrol", "seats": 5}]"#,
    )
    .unwrap();

    let load = load_from_source(&CatalogSource::File { path });
    assert!(!load.is_fallback(), "{load:?}");
    let catalog = load.into_catalog();
    assert_eq!(catalog.find("7").map(|car| car.display_name()), Some("Seat Ibiza".into()));
}
