use core::any::TypeId;
use core::fmt;

use hashbrown::hash_map::Entry;

use crate::hash::{HashMap, NoOpHashState};

// -----------------------------------------------------------------------------
// TypeIdMap

/// A map keyed by [`TypeId`].
///
/// `TypeId` is already a hash, so keys go through [`NoOpHashState`].
/// Only map-shaped operations are exposed; the backing container is
/// an implementation detail.
pub struct TypeIdMap<V>(HashMap<TypeId, V, NoOpHashState>);

impl<V> TypeIdMap<V> {
    /// Creates an empty `TypeIdMap`, usable in `static` items.
    ///
    /// # Examples
    ///
    /// ```
    /// use csx_utils::TypeIdMap;
    /// let map = TypeIdMap::<&str>::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self(HashMap::with_hasher(NoOpHashState))
    }

    /// Creates an empty `TypeIdMap` with room for `capacity` entries.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(HashMap::with_capacity_and_hasher(capacity, NoOpHashState))
    }

    /// Returns the value for `type_id`, inserting `f()` first if it is absent.
    ///
    /// `f` runs only when the key is missing, so the first inserted
    /// value is the one every later caller observes.
    #[inline]
    pub fn get_or_insert(&mut self, type_id: TypeId, f: impl FnOnce() -> V) -> &mut V {
        match self.0.entry(type_id) {
            Entry::Vacant(entry) => entry.insert(f()),
            Entry::Occupied(entry) => entry.into_mut(),
        }
    }

    pub fn get(&self, type_id: &TypeId) -> Option<&V> {
        self.0.get(type_id)
    }

    /// Inserts a value, returning the one it replaced.
    pub fn insert(&mut self, type_id: TypeId, v: V) -> Option<V> {
        self.0.insert(type_id, v)
    }

    #[inline(always)]
    pub fn insert_type<T: ?Sized + 'static>(&mut self, v: V) -> Option<V> {
        self.insert(TypeId::of::<T>(), v)
    }

    pub fn remove(&mut self, type_id: &TypeId) -> Option<V> {
        self.0.remove(type_id)
    }

    #[inline(always)]
    pub fn remove_type<T: ?Sized + 'static>(&mut self) -> Option<V> {
        self.remove(&TypeId::of::<T>())
    }

    pub fn contains(&self, type_id: &TypeId) -> bool {
        self.0.contains_key(type_id)
    }

    /// Removes every entry, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Visits all entries in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&TypeId, &V)> {
        self.0.iter()
    }

    #[inline]
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> {
        self.0.values()
    }
}

// -----------------------------------------------------------------------------
// Traits

impl<V> Default for TypeIdMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Clone for TypeIdMap<V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<V: fmt::Debug> fmt::Debug for TypeIdMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::TypeIdMap;

    #[test]
    fn first_insert_wins() {
        let mut map = TypeIdMap::new();
        assert_eq!(*map.get_or_insert(TypeId::of::<u8>(), || 1), 1);
        assert_eq!(*map.get_or_insert(TypeId::of::<u8>(), || 2), 1);
        assert_eq!(*map.get_or_insert(TypeId::of::<u16>(), || 4), 4);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn typed_accessors() {
        let mut map = TypeIdMap::new();
        assert_eq!(map.insert_type::<u64>("string"), None);
        assert_eq!(map.insert_type::<u64>("text"), Some("string"));
        assert!(map.contains(&TypeId::of::<u64>()));
        assert_eq!(map.get(&TypeId::of::<u64>()), Some(&"text"));
        assert_eq!(map.remove_type::<u64>(), Some("text"));
        assert!(map.is_empty());
    }
}
