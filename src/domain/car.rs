//! Vehicle reference data served by the catalog backend.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transmission {
    Manual,
    Automatic,
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Transmission::Manual => "Manual",
            Transmission::Automatic => "Automatic",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fuel {
    Petrol,
    Diesel,
    Hybrid,
    Electric,
}

impl fmt::Display for Fuel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Fuel::Petrol => "Petrol",
            Fuel::Diesel => "Diesel",
            Fuel::Hybrid => "Hybrid",
            Fuel::Electric => "Electric",
        };
        f.write_str(label)
    }
}

/// A rentable vehicle as stored by the catalog backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub slug: String,
    pub brand: String,
    pub model: String,
    pub price_per_day: f64,
    pub transmission: Transmission,
    pub fuel: Fuel,
    pub seats: u8,
    #[serde(default)]
    pub horsepower: Option<u32>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub location_availability: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Car {
    /// Brand and model joined for display, e.g. `BMW X1`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Cars without an availability list can be collected anywhere.
    pub fn is_available_at(&self, location: Location) -> bool {
        self.location_availability.is_empty()
            || self
                .location_availability
                .iter()
                .any(|label| location.matches(label))
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.trim();
        !tag.is_empty() && self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// Backends key rows by integer or by text/uuid; both become a string id.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Int(i64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Int(value) => value.to_string(),
        RawId::Text(value) => value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Car {
        Car {
            id: "car-1".into(),
            slug: "bmw-x1".into(),
            brand: "BMW".into(),
            model: "X1".into(),
            price_per_day: 85.0,
            transmission: Transmission::Automatic,
            fuel: Fuel::Diesel,
            seats: 5,
            horsepower: Some(150),
            images: Vec::new(),
            location_availability: vec!["faro-airport".into()],
            tags: vec!["SUV".into()],
            featured: true,
        }
    }

    #[test]
    fn deserializes_backend_rows_with_missing_optionals() {
        let row = r#"{
            "id": "7",
            "slug": "fiat-500",
            "brand": "Fiat",
            "model": "500",
            "price_per_day": 35,
            "transmission": "manual",
            "fuel": "petrol",
            "seats": 4
        }"#;
        let car: Car = serde_json::from_str(row).expect("parse car row");
        assert_eq!(car.display_name(), "Fiat 500");
        assert_eq!(car.price_per_day, 35.0);
        assert!(car.tags.is_empty());
        assert!(!car.featured);
    }

    #[test]
    fn integer_and_text_ids_both_parse() {
        let row = |id: &str| {
            format!(
                r#"{{"id": {id}, "slug": "x", "brand": "B", "model": "M", "price_per_day": 1,
                    "transmission": "manual", "fuel": "diesel", "seats": 2}}"#
            )
        };
        let numeric: Car = serde_json::from_str(&row("7")).expect("integer id");
        assert_eq!(numeric.id, "7");
        let uuid: Car = serde_json::from_str(&row("\"5f0c-aa\"")).expect("text id");
        assert_eq!(uuid.id, "5f0c-aa");
        assert!(serde_json::from_str::<Car>(&row("true")).is_err());
    }

    #[test]
    fn availability_respects_location_list() {
        let car = sample();
        assert!(car.is_available_at(Location::FaroAirport));
        assert!(!car.is_available_at(Location::Lagos));
    }

    #[test]
    fn tags_match_case_insensitively() {
        let car = sample();
        assert!(car.has_tag("suv"));
        assert!(!car.has_tag(""));
    }
}
