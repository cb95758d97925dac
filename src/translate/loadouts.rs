use regex::Regex;

use crate::census::model::Loadout;
use crate::translate::table::{CanonicalEntry, LookupTable};

/// Faction tags that prefix (or occasionally suffix) loadout code names.
pub const FACTION_TAGS: &[&str] = &["tr", "nc", "vs", "nso"];

/// Derives canonical class names from loadout code names.
///
/// `"NC Heavy Assault"` becomes `"heavy_assault"`; the MAX class is code
/// named "Defector" and comes out as `"max"`.
#[derive(Debug, Clone)]
pub struct ClassNormalizer {
    faction: Regex,
    defector: Regex,
}

impl ClassNormalizer {
    /// Compile the faction and rename patterns.
    pub fn new() -> Result<Self, regex::Error> {
        let tags = FACTION_TAGS.join("|");

        // Only a standalone tag at either end of the code name counts,
        // surrounding whitespace included.
        let faction = Regex::new(&format!(r"^\s*(?:{tags})\b|\b(?:{tags})\s*$"))?;
        let defector = Regex::new(r"\bdefector\b")?;

        Ok(Self { faction, defector })
    }

    /// Canonical class name for a loadout code name.
    pub fn canonical_name(&self, code_name: &str) -> String {
        let lowered = code_name.to_lowercase();
        let untagged = self.faction.replacen(&lowered, 1, "");
        let renamed = self.defector.replace_all(untagged.trim(), "max");

        renamed.replace(' ', "_")
    }
}

/// Build the loadout table. Every loadout yields exactly one entry.
pub fn extract_loadouts(loadouts: &[Loadout], normalizer: &ClassNormalizer) -> LookupTable {
    loadouts
        .iter()
        .map(|loadout| CanonicalEntry {
            id: loadout.loadout_id.clone(),
            name: normalizer.canonical_name(&loadout.code_name),
        })
        .collect()
}
