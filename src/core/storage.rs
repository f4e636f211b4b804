use crate::core::DebrisHandle;
use crate::error::FieldError;
use crate::Result;

use std::collections::HashMap;

/// Handle-keyed arena for debris.
///
/// Handles are never reused, so the smallest live handle is always the
/// oldest-inserted item; FIFO eviction leans on that. Callers snapshot
/// `handles()` before a mutating pass instead of iterating while removing.
pub struct DebrisStorage<T> {
    items: HashMap<DebrisHandle, T>,
    next_id: u32,
}

impl<T> DebrisStorage<T> {
    /// Creates a new empty storage
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            next_id: 1, // Start at 1, so 0 can represent invalid handle
        }
    }

    /// Adds an item and returns its handle
    pub fn add(&mut self, item: T) -> DebrisHandle {
        let handle = DebrisHandle(self.next_id);
        self.next_id += 1;
        self.items.insert(handle, item);
        handle
    }

    /// Gets a reference to an item by its handle
    pub fn get(&self, handle: DebrisHandle) -> Option<&T> {
        self.items.get(&handle)
    }

    /// Gets a mutable reference to an item by its handle
    pub fn get_mut(&mut self, handle: DebrisHandle) -> Option<&mut T> {
        self.items.get_mut(&handle)
    }

    /// Removes an item from the storage
    pub fn remove(&mut self, handle: DebrisHandle) -> Option<T> {
        self.items.remove(&handle)
    }

    /// Takes an item out of the storage, to be restored under the same
    /// handle after mutating it against another item
    pub fn take(&mut self, handle: DebrisHandle) -> Option<T> {
        self.items.remove(&handle)
    }

    /// Restores a previously taken item under its original handle
    pub fn restore(&mut self, handle: DebrisHandle, item: T) {
        self.items.insert(handle, item);
    }

    /// Returns the number of items in the storage
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the storage is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clears all items from the storage
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns all live handles, in unspecified order
    pub fn handles(&self) -> Vec<DebrisHandle> {
        self.items.keys().copied().collect()
    }

    /// Returns the oldest-inserted handle still live
    pub fn oldest(&self) -> Option<DebrisHandle> {
        self.items.keys().copied().min()
    }

    /// Returns an iterator over all items
    pub fn iter(&self) -> impl Iterator<Item = (DebrisHandle, &T)> {
        self.items.iter().map(|(h, item)| (*h, item))
    }

    /// Gets an item by its handle, returning an error if not found
    pub fn get_debris(&self, handle: DebrisHandle) -> Result<&T> {
        self.get(handle).ok_or_else(|| {
            FieldError::DebrisNotFound(format!("Debris with handle {:?} not found", handle))
        })
    }

    /// Gets a mutable reference by handle, returning an error if not found
    pub fn get_debris_mut(&mut self, handle: DebrisHandle) -> Result<&mut T> {
        self.get_mut(handle).ok_or_else(|| {
            FieldError::DebrisNotFound(format!("Debris with handle {:?} not found", handle))
        })
    }
}

impl<T> Default for DebrisStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}
