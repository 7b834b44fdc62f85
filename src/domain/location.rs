use std::fmt;

use serde::{Deserialize, Serialize};
use strsim::levenshtein;

/// Maximum edit distance accepted when resolving a misspelled location.
const MAX_LOCATION_DISTANCE: usize = 3;

/// Fixed set of pickup and drop-off points served by the rental desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Location {
    FaroAirport,
    Albufeira,
    Vilamoura,
    Lagos,
    Portimao,
    Tavira,
}

impl Location {
    pub const ALL: [Location; 6] = [
        Location::FaroAirport,
        Location::Albufeira,
        Location::Vilamoura,
        Location::Lagos,
        Location::Portimao,
        Location::Tavira,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Location::FaroAirport => "Faro Airport",
            Location::Albufeira => "Albufeira",
            Location::Vilamoura => "Vilamoura",
            Location::Lagos => "Lagos",
            Location::Portimao => "Portimão",
            Location::Tavira => "Tavira",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Location::FaroAirport => "faro-airport",
            Location::Albufeira => "albufeira",
            Location::Vilamoura => "vilamoura",
            Location::Lagos => "lagos",
            Location::Portimao => "portimao",
            Location::Tavira => "tavira",
        }
    }

    /// Resolves user input to a location by name, slug, or close spelling.
    pub fn resolve(input: &str) -> Option<Location> {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        if let Some(exact) = Self::ALL
            .iter()
            .find(|loc| loc.name().to_lowercase() == needle || loc.slug() == needle)
        {
            return Some(*exact);
        }
        Self::ALL
            .iter()
            .map(|loc| (levenshtein(&loc.name().to_lowercase(), &needle), *loc))
            .filter(|(distance, _)| *distance <= MAX_LOCATION_DISTANCE)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, loc)| loc)
    }

    /// Returns true when `label` (a name or slug stored on a car) refers to this location.
    pub fn matches(self, label: &str) -> bool {
        let label = label.trim();
        label.eq_ignore_ascii_case(self.slug()) || label.to_lowercase() == self.name().to_lowercase()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
