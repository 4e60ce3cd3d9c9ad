//! Unique identifier allocation.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

/// Issues identifiers for pages and items that lack a user-supplied one.
///
/// One counter is shared across every identifier kind, so two generated
/// identifiers never collide regardless of prefix. User-supplied page ids
/// are reserved up front and any generated candidate that would collide
/// with one is skipped.
#[derive(Debug, Default)]
pub struct UidAllocator {
    counter: u32,
    reserved: FxHashSet<SmolStr>,
}

impl UidAllocator {
    /// Creates an allocator with nothing reserved and the counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves a user-supplied identifier.
    ///
    /// Returns false when the identifier was already reserved; the caller
    /// reports that as a duplicate.
    pub fn reserve(&mut self, id: &str) -> bool {
        self.reserved.insert(SmolStr::new(id))
    }

    /// Returns the next free identifier with the given prefix.
    pub fn next(&mut self, prefix: &str) -> SmolStr {
        loop {
            self.counter += 1;
            let candidate = SmolStr::new(format!("{prefix}{}", self.counter));
            if !self.reserved.contains(&candidate) {
                return candidate;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotonic_across_prefixes() {
        let mut alloc = UidAllocator::new();
        assert_eq!(alloc.next("page_"), "page_1");
        assert_eq!(alloc.next("page_"), "page_2");
        assert_eq!(alloc.next("item_"), "item_3");
        assert_eq!(alloc.next("nav_"), "nav_4");
    }

    #[test]
    fn test_reserve_detects_duplicates() {
        let mut alloc = UidAllocator::new();
        assert!(alloc.reserve("hall"));
        assert!(alloc.reserve("kitchen"));
        assert!(!alloc.reserve("hall"));
    }

    #[test]
    fn test_skips_reserved_identifiers() {
        let mut alloc = UidAllocator::new();
        assert!(alloc.reserve("page_1"));
        assert!(alloc.reserve("page_3"));
        assert_eq!(alloc.next("page_"), "page_2");
        assert_eq!(alloc.next("page_"), "page_4");
    }
}
