//! Car catalog providers and the fallback policy applied when they fail.

pub mod fallback;
pub mod json_file;
pub mod rest;

use std::fmt;

use crate::config::CatalogSource;
use crate::domain::{Car, Location};
use crate::errors::CatalogError;

pub use fallback::fallback_cars;
pub use json_file::JsonFileCatalog;
pub use rest::RestCatalog;

/// Read-only source of car records.
pub trait CarCatalog {
    fn fetch_all(&self) -> Result<Vec<Car>, CatalogError>;

    /// Short human-readable description used in logs.
    fn describe(&self) -> String;
}

/// Why the bundled list was substituted for provider data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    NotConfigured,
    Empty,
    Failed(String),
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::NotConfigured => f.write_str("no catalog provider configured"),
            FallbackReason::Empty => f.write_str("catalog provider returned no cars"),
            FallbackReason::Failed(message) => write!(f, "catalog fetch failed: {message}"),
        }
    }
}

/// Outcome of a catalog load: real data or degraded mode.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogLoad {
    Fetched(Vec<Car>),
    FallbackUsed { cars: Vec<Car>, reason: FallbackReason },
}

impl CatalogLoad {
    pub fn cars(&self) -> &[Car] {
        match self {
            CatalogLoad::Fetched(cars) | CatalogLoad::FallbackUsed { cars, .. } => cars,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, CatalogLoad::FallbackUsed { .. })
    }

    pub fn into_catalog(self) -> Catalog {
        match self {
            CatalogLoad::Fetched(cars) | CatalogLoad::FallbackUsed { cars, .. } => {
                Catalog::new(cars)
            }
        }
    }
}

/// Fetches once from `provider`, substituting the bundled list on error or
/// an empty result. Never fails.
pub fn load_catalog(provider: Option<&dyn CarCatalog>) -> CatalogLoad {
    let Some(provider) = provider else {
        return fallback(FallbackReason::NotConfigured);
    };
    match provider.fetch_all() {
        Ok(cars) if cars.is_empty() => {
            tracing::warn!(source = %provider.describe(), "catalog empty, using fallback list");
            fallback(FallbackReason::Empty)
        }
        Ok(cars) => {
            tracing::debug!(source = %provider.describe(), count = cars.len(), "catalog fetched");
            CatalogLoad::Fetched(cars)
        }
        Err(err) => {
            tracing::warn!(source = %provider.describe(), error = %err, "catalog fetch failed, using fallback list");
            fallback(FallbackReason::Failed(err.to_string()))
        }
    }
}

fn fallback(reason: FallbackReason) -> CatalogLoad {
    CatalogLoad::FallbackUsed {
        cars: fallback_cars(),
        reason,
    }
}

/// Builds the provider described by a configured [`CatalogSource`].
pub fn provider_for(source: &CatalogSource) -> Option<Box<dyn CarCatalog>> {
    match source {
        CatalogSource::Bundled => None,
        CatalogSource::File { path } => Some(Box::new(JsonFileCatalog::new(path.clone()))),
        CatalogSource::Rest {
            url,
            api_key,
            table,
        } => Some(Box::new(RestCatalog::new(url, api_key, table))),
    }
}

/// Loads the catalog for a configured source.
pub fn load_from_source(source: &CatalogSource) -> CatalogLoad {
    let provider = provider_for(source);
    load_catalog(provider.as_deref())
}

/// In-memory view over loaded cars.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    cars: Vec<Car>,
}

impl Catalog {
    pub fn new(cars: Vec<Car>) -> Self {
        Self { cars }
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Car> {
        let id = id.trim();
        self.cars.iter().find(|car| car.id == id)
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&Car> {
        let slug = slug.trim();
        self.cars
            .iter()
            .find(|car| car.slug.eq_ignore_ascii_case(slug))
    }

    /// Looks a car up by id first, then by slug.
    pub fn lookup(&self, reference: &str) -> Option<&Car> {
        self.find(reference).or_else(|| self.find_by_slug(reference))
    }

    pub fn featured(&self) -> Vec<&Car> {
        self.cars.iter().filter(|car| car.featured).collect()
    }

    pub fn available_at(&self, location: Location) -> Vec<&Car> {
        self.cars
            .iter()
            .filter(|car| car.is_available_at(location))
            .collect()
    }

    /// First car tagged with the requested free-text category.
    pub fn matching_type(&self, car_type: &str) -> Option<&Car> {
        self.cars.iter().find(|car| car.has_tag(car_type))
    }
}
