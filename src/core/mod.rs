pub mod config;
pub mod events;
pub mod field;
pub mod storage;

pub use self::config::{FieldConfig, FieldFeatures};
pub use self::events::{DebrisEvent, DebrisEventType, EventQueue, ImpactEvent};
pub use self::field::DebrisField;
pub use self::storage::DebrisStorage;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// A unique identifier for a piece of debris in the field.
///
/// Handles are issued in increasing order at insertion time and never
/// reused, so handle order doubles as insertion age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DebrisHandle(pub(crate) u32);

/// Running counters the field maintains for external reporting.
///
/// Never used as control state; the authoritative live count is the
/// field's storage length.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct FieldStats {
    /// Total debris ever created in this field
    pub total_created: u64,

    /// Collisions resolved during the most recent tick
    pub collisions_this_tick: u32,

    /// Fragments spawned by shattering, total
    pub fragments_created: u64,

    /// Debris removed for any reason, total
    pub removed: u64,
}
