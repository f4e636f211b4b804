use crate::core::DebrisHandle;

/// An unordered pair of debris handles, used to resolve each potential
/// collision at most once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollisionPair {
    /// The first debris in the pair (smaller handle)
    pub debris_a: DebrisHandle,

    /// The second debris in the pair (larger handle)
    pub debris_b: DebrisHandle,
}

impl CollisionPair {
    /// Creates a new collision pair with canonical ordering
    pub fn new(debris_a: DebrisHandle, debris_b: DebrisHandle) -> Self {
        if debris_a <= debris_b {
            Self { debris_a, debris_b }
        } else {
            Self {
                debris_a: debris_b,
                debris_b: debris_a,
            }
        }
    }

    /// Checks if this pair contains the specified debris
    pub fn contains(&self, debris: DebrisHandle) -> bool {
        self.debris_a == debris || self.debris_b == debris
    }

    /// Returns the other debris in the pair
    pub fn other(&self, debris: DebrisHandle) -> Option<DebrisHandle> {
        if self.debris_a == debris {
            Some(self.debris_b)
        } else if self.debris_b == debris {
            Some(self.debris_a)
        } else {
            None
        }
    }
}
