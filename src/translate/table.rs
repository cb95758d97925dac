/// One external identifier mapped to its canonical short name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalEntry {
    /// Identifier exactly as the census API reported it.
    pub id: String,
    /// Lower-case canonical name.
    pub name: String,
}

/// Entries in the order their records appeared in the census response.
///
/// Duplicate identifiers are kept; the generated map lets the later one win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupTable {
    entries: Vec<CanonicalEntry>,
}

impl LookupTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry after every entry already in the table.
    pub fn push(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.entries.push(CanonicalEntry {
            id: id.into(),
            name: name.into(),
        });
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CanonicalEntry] {
        &self.entries
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no record produced an entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Canonical name for `id` with last-entry-wins semantics.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.id == id)
            .map(|entry| entry.name.as_str())
    }
}

impl FromIterator<CanonicalEntry> for LookupTable {
    fn from_iter<I: IntoIterator<Item = CanonicalEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
