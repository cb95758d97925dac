//! Vehicle display name matching.
//!
//! The census vehicle catalog carries every variant the game knows about
//! (faction skins, event copies, turrets). Only records whose English name
//! contains one of the tracked vehicle names as a whole word are kept, and
//! they are keyed to that word lower-cased.

use regex::{Regex, RegexBuilder};

use crate::census::model::Vehicle;
use crate::translate::table::LookupTable;

/// Vehicle names tracked by the websocket service.
pub const RELEVANT_VEHICLES: &[&str] = &[
    "flash",
    "sunderer",
    "lightning",
    "scythe",
    "vanguard",
    "prowler",
    "reaver",
    "mosquito",
    "galaxy",
    "valkyrie",
    "liberator",
    "ant",
    "harasser",
    "dervish",
    "chimera",
    "javelin",
    "corsair",
    "magrider",
];

/// Case-insensitive whole-word matcher over a fixed set of vehicle names.
#[derive(Debug, Clone)]
pub struct VehicleMatcher {
    pattern: Regex,
}

impl VehicleMatcher {
    /// Build a matcher over `names`, which are matched literally.
    ///
    /// Matching is ASCII-only, so case folding and word boundaries never
    /// widen a match beyond the listed spellings.
    pub fn new(names: &[&str]) -> Result<Self, regex::Error> {
        let alternation = names
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = RegexBuilder::new(&format!(r"\b(?:{alternation})\b"))
            .case_insensitive(true)
            .unicode(false)
            .build()?;

        Ok(Self { pattern })
    }

    /// Matcher over [`RELEVANT_VEHICLES`].
    pub fn relevant() -> Result<Self, regex::Error> {
        Self::new(RELEVANT_VEHICLES)
    }

    /// Canonical name for a display name: the leftmost tracked word, lower-cased.
    pub fn canonical_name(&self, display_name: &str) -> Option<String> {
        self.pattern
            .find(display_name)
            .map(|matched| matched.as_str().to_lowercase())
    }
}

/// Build the vehicle table, dropping unnamed and untracked vehicles.
pub fn extract_vehicles(vehicles: &[Vehicle], matcher: &VehicleMatcher) -> LookupTable {
    let mut table = LookupTable::new();

    for vehicle in vehicles {
        let Some(display_name) = vehicle.display_name() else {
            continue;
        };

        if let Some(name) = matcher.canonical_name(display_name) {
            table.push(vehicle.vehicle_id.clone(), name);
        }
    }

    table
}
