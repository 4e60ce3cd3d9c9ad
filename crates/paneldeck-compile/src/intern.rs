//! Entity reference interning.

use indexmap::IndexSet;
use smol_str::SmolStr;

/// An interned entity reference.
///
/// Symbols index into the [`EntityTable`] that produced them and compare
/// by first-seen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntitySymbol(u32);

impl EntitySymbol {
    /// Position of the reference in its table.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Insertion-ordered table of distinct entity references.
///
/// Scoped to one compile; every compile starts from an empty table.
#[derive(Debug, Clone, Default)]
pub struct EntityTable {
    entries: IndexSet<SmolStr>,
}

impl EntityTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns an entity reference.
    ///
    /// The first call for a given reference appends it to the table and
    /// returns a fresh symbol; later calls return the same symbol.
    pub fn intern(&mut self, entity_id: &str) -> EntitySymbol {
        if let Some(index) = self.entries.get_index_of(entity_id) {
            return EntitySymbol(index as u32);
        }
        let (index, _) = self.entries.insert_full(SmolStr::new(entity_id));
        EntitySymbol(index as u32)
    }

    /// Looks up a previously interned reference.
    #[must_use]
    pub fn get(&self, entity_id: &str) -> Option<EntitySymbol> {
        self.entries
            .get_index_of(entity_id)
            .map(|index| EntitySymbol(index as u32))
    }

    /// Returns the reference behind a symbol.
    #[must_use]
    pub fn resolve(&self, symbol: EntitySymbol) -> Option<&SmolStr> {
        self.entries.get_index(symbol.index())
    }

    /// Iterates references in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (EntitySymbol, &SmolStr)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, id)| (EntitySymbol(index as u32), id))
    }

    /// Number of distinct references.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
