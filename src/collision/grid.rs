use crate::core::DebrisHandle;
use crate::math::Vector2;

use std::collections::HashMap;

/// Default cell size in world units
pub const DEFAULT_CELL_SIZE: f32 = 200.0;

/// Extra distance allowed when filtering collision candidates
pub const COLLISION_MARGIN: f32 = 5.0;

/// Broad-phase radius multiplier applied to a piece's own size
const CANDIDATE_RADIUS_FACTOR: f32 = 3.0;

/// Snapshot of one debris taken when the grid was built
#[derive(Debug, Clone, Copy)]
struct GridEntry {
    position: Vector2,
    size: f32,
}

/// Uniform-bucket spatial index over debris positions.
///
/// Rebuilt from scratch once per tick and never mutated incrementally, so
/// every query during a tick answers against the pre-tick snapshot
/// regardless of how objects have moved since.
pub struct SpatialGrid {
    /// The cell size in world units
    cell_size: f32,

    /// The cells containing debris handles
    cells: HashMap<(i32, i32), Vec<DebrisHandle>>,

    /// Per-handle position/size snapshot for exact filtering
    entries: HashMap<DebrisHandle, GridEntry>,
}

impl SpatialGrid {
    /// Creates a new spatial grid with the given cell size
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size: cell_size.max(1.0),
            cells: HashMap::new(),
            entries: HashMap::new(),
        }
    }

    /// Returns the cell size
    pub fn get_cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Empties all buckets
    pub fn clear(&mut self) {
        self.cells.clear();
        self.entries.clear();
    }

    /// Gets the cell index for a position
    fn cell_index(&self, position: Vector2) -> (i32, i32) {
        (
            (position.x / self.cell_size).floor() as i32,
            (position.y / self.cell_size).floor() as i32,
        )
    }

    /// Inserts a debris snapshot into the cell covering its position
    pub fn insert(&mut self, handle: DebrisHandle, position: Vector2, size: f32) {
        let key = self.cell_index(position);
        self.cells.entry(key).or_default().push(handle);
        self.entries.insert(handle, GridEntry { position, size });
    }

    /// Returns all debris within `radius` of `position`.
    ///
    /// Scans the square of cells that could contain a match, then filters
    /// to exact Euclidean distance. Non-positive radii yield no results.
    pub fn query_radius(&self, position: Vector2, radius: f32) -> Vec<DebrisHandle> {
        if radius <= 0.0 {
            return Vec::new();
        }

        let cell_radius = (radius / self.cell_size).ceil() as i32;
        let center = self.cell_index(position);

        let mut found = Vec::new();
        for x_offset in -cell_radius..=cell_radius {
            for y_offset in -cell_radius..=cell_radius {
                let key = (center.0 + x_offset, center.1 + y_offset);
                let Some(bucket) = self.cells.get(&key) else {
                    continue;
                };
                for &handle in bucket {
                    if let Some(entry) = self.entries.get(&handle) {
                        if entry.position.distance(&position) <= radius {
                            found.push(handle);
                        }
                    }
                }
            }
        }

        found
    }

    /// Returns debris whose bounding circles might overlap the given piece.
    ///
    /// Broad phase over a generous `size * 3` radius, then narrowed to
    /// pieces within `size + other_size` plus a small buffer. The piece
    /// itself is excluded; an unknown handle yields no results.
    pub fn collision_candidates(&self, handle: DebrisHandle) -> Vec<DebrisHandle> {
        let Some(entry) = self.entries.get(&handle).copied() else {
            return Vec::new();
        };

        let nearby = self.query_radius(entry.position, entry.size * CANDIDATE_RADIUS_FACTOR);

        let mut candidates = Vec::new();
        for other in nearby {
            if other == handle {
                continue;
            }
            let Some(other_entry) = self.entries.get(&other) else {
                continue;
            };
            let distance = entry.position.distance(&other_entry.position);
            if distance <= entry.size + other_entry.size + COLLISION_MARGIN {
                candidates.push(other);
            }
        }

        candidates
    }

    /// Returns the number of debris in the grid
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the grid is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of occupied cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

impl Default for SpatialGrid {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIZE)
    }
}
