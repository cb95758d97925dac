/// Loadout code name normalization.
pub mod loadouts;
/// Ordered identifier to name tables.
pub mod table;
/// Vehicle display name matching.
pub mod vehicles;
