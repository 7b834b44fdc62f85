//! Static vehicle list used when the catalog backend is unavailable or empty.

use once_cell::sync::Lazy;

use crate::domain::{Car, Fuel, Transmission};

#[allow(clippy::too_many_arguments)]
fn car(
    id: &str,
    brand: &str,
    model: &str,
    price_per_day: f64,
    transmission: Transmission,
    fuel: Fuel,
    seats: u8,
    horsepower: u32,
    tags: &[&str],
    featured: bool,
) -> Car {
    let slug = format!("{}-{}", brand, model)
        .to_lowercase()
        .replace(' ', "-");
    Car {
        id: id.to_string(),
        images: vec![format!("/cars/{slug}.jpg")],
        slug,
        brand: brand.to_string(),
        model: model.to_string(),
        price_per_day,
        transmission,
        fuel,
        seats,
        horsepower: Some(horsepower),
        location_availability: Vec::new(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        featured,
    }
}

static FALLBACK_CARS: Lazy<Vec<Car>> = Lazy::new(|| {
    vec![
        car(
            "1",
            "Fiat",
            "500",
            35.0,
            Transmission::Manual,
            Fuel::Petrol,
            4,
            70,
            &["Economy", "City"],
            false,
        ),
        car(
            "2",
            "Renault",
            "Clio",
            40.0,
            Transmission::Manual,
            Fuel::Diesel,
            5,
            90,
            &["Economy"],
            true,
        ),
        car(
            "3",
            "Volkswagen",
            "Golf",
            55.0,
            Transmission::Automatic,
            Fuel::Petrol,
            5,
            130,
            &["Compact"],
            false,
        ),
        car(
            "4",
            "BMW",
            "X1",
            85.0,
            Transmission::Automatic,
            Fuel::Diesel,
            5,
            150,
            &["SUV", "Premium"],
            true,
        ),
        car(
            "5",
            "Tesla",
            "Model 3",
            110.0,
            Transmission::Automatic,
            Fuel::Electric,
            5,
            283,
            &["Premium", "Electric"],
            true,
        ),
        car(
            "6",
            "Mercedes-Benz",
            "Vito",
            120.0,
            Transmission::Automatic,
            Fuel::Diesel,
            9,
            163,
            &["Van", "Family"],
            false,
        ),
    ]
});

/// Returns a copy of the bundled vehicle list.
pub fn fallback_cars() -> Vec<Car> {
    FALLBACK_CARS.clone()
}
