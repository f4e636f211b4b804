mod grid;
mod pair;
mod response;

pub use self::grid::{SpatialGrid, COLLISION_MARGIN, DEFAULT_CELL_SIZE};
pub use self::pair::CollisionPair;
pub use self::response::resolve_collision;
