use crate::collision::{CollisionPair, SpatialGrid};
use crate::core::events::{DebrisEvent, DebrisEventType, EventQueue, ImpactEvent};
use crate::core::{DebrisHandle, DebrisStorage, FieldConfig, FieldFeatures, FieldStats};
use crate::debris::{Debris, DebrisKind};
use crate::forces::{GravitySource, MAX_INTERACTION_DISTANCE};
use crate::math::Vector2;
use crate::Result;

use rand::Rng;
use std::collections::HashSet;

/// Only debris larger than this can shatter in a collision
const SHATTER_MIN_SIZE: f32 = 15.0;

/// Kinds scattered by `create_field` when the caller passes none
const DEFAULT_FIELD_KINDS: [DebrisKind; 3] =
    [DebrisKind::Metal, DebrisKind::Ice, DebrisKind::ShipPart];

/// The debris field manager.
///
/// Owns the single authoritative arena of live debris, the spatial grid
/// it rebuilds every tick, and the per-frame orchestration: integration,
/// deduplicated collision resolution, fragmentation, expiry cleanup and
/// population capping. External callers work exclusively through handles;
/// a handle may stop resolving after any tick.
pub struct DebrisField {
    /// All live debris
    debris: DebrisStorage<Debris>,

    /// Spatial index, rebuilt from pre-tick positions each tick
    grid: SpatialGrid,

    /// Configuration for the simulation
    config: FieldConfig,

    /// Queue of field events
    events: EventQueue,

    /// Unordered pairs already resolved this tick
    processed_pairs: HashSet<CollisionPair>,

    /// Running counters for external reporting
    stats: FieldStats,

    /// The total elapsed simulation time
    time: f32,
}

impl DebrisField {
    /// Creates a new debris field with default settings
    pub fn new() -> Self {
        Self::with_config(FieldConfig::default())
    }

    /// Creates a new debris field with the given configuration
    pub fn with_config(config: FieldConfig) -> Self {
        Self {
            debris: DebrisStorage::new(),
            grid: SpatialGrid::new(config.cell_size),
            config,
            events: EventQueue::new(),
            processed_pairs: HashSet::new(),
            stats: FieldStats::default(),
            time: 0.0,
        }
    }

    /// Returns the current simulation time
    pub fn get_time(&self) -> f32 {
        self.time
    }

    /// Returns a reference to the field configuration
    pub fn get_config(&self) -> &FieldConfig {
        &self.config
    }

    /// Returns a mutable reference to the field configuration.
    ///
    /// Changes take effect on the next tick; a changed `cell_size` causes
    /// the spatial grid to be rebuilt at that size.
    pub fn get_config_mut(&mut self) -> &mut FieldConfig {
        &mut self.config
    }

    /// Turns simulation features on or off in one call
    pub fn set_features(&mut self, features: FieldFeatures) {
        self.config.features = features;
    }

    /// Returns the field statistics
    pub fn get_stats(&self) -> FieldStats {
        self.stats
    }

    /// Returns the number of live debris
    pub fn active_count(&self) -> usize {
        self.debris.len()
    }

    /// Returns whether the field has no live debris
    pub fn is_empty(&self) -> bool {
        self.debris.is_empty()
    }

    /// Gets a reference to a piece of debris by its handle
    pub fn get(&self, handle: DebrisHandle) -> Result<&Debris> {
        self.debris.get_debris(handle)
    }

    /// Gets a mutable reference to a piece of debris by its handle
    pub fn get_mut(&mut self, handle: DebrisHandle) -> Result<&mut Debris> {
        self.debris.get_debris_mut(handle)
    }

    /// Returns all live handles, in unspecified order
    pub fn handles(&self) -> Vec<DebrisHandle> {
        self.debris.handles()
    }

    /// Iterates over all live debris, read-only (renderer surface)
    pub fn iter(&self) -> impl Iterator<Item = (DebrisHandle, &Debris)> {
        self.debris.iter()
    }

    /// Returns a mutable reference to the event queue
    pub fn get_events_mut(&mut self) -> &mut EventQueue {
        &mut self.events
    }

    /// Returns a reference to the event queue
    pub fn get_events(&self) -> &EventQueue {
        &self.events
    }

    /// Adds a piece of debris to the field.
    ///
    /// Returns None and drops the debris when the field is at its
    /// population cap.
    pub fn add(&mut self, debris: Debris) -> Option<DebrisHandle> {
        if self.debris.len() >= self.config.max_debris {
            return None;
        }

        let handle = self.debris.add(debris);
        self.stats.total_created += 1;
        self.events.add_debris_event(DebrisEvent {
            event_type: DebrisEventType::Added,
            debris: handle,
        });

        Some(handle)
    }

    /// Scatters debris uniformly within a disc around a center point.
    ///
    /// Asteroid chunks drift slowly; everything else scatters faster. An
    /// empty `kinds` slice falls back to metal, ice and ship parts.
    /// Non-positive radius or zero count creates nothing.
    pub fn create_field(
        &mut self,
        center: Vector2,
        radius: f32,
        count: usize,
        kinds: &[DebrisKind],
    ) -> Vec<DebrisHandle> {
        if radius <= 0.0 || count == 0 {
            return Vec::new();
        }

        let kinds = if kinds.is_empty() {
            &DEFAULT_FIELD_KINDS[..]
        } else {
            kinds
        };

        let mut rng = rand::thread_rng();
        let mut created = Vec::with_capacity(count);

        for _ in 0..count {
            let angle = rng.gen_range(0.0..std::f32::consts::TAU);
            let distance = rng.gen_range(0.0..radius);
            let position = center + Vector2::from_angle(angle) * distance;

            let kind = kinds[rng.gen_range(0..kinds.len())];
            let mut debris = Debris::new(position, kind);

            let drift = if kind == DebrisKind::AsteroidChunk {
                5.0
            } else {
                30.0
            };
            debris.set_velocity(Vector2::new(
                rng.gen_range(-drift..drift),
                rng.gen_range(-drift..drift),
            ));

            if let Some(handle) = self.add(debris) {
                created.push(handle);
            }
        }

        created
    }

    /// Creates shrapnel from an explosion at a center point.
    ///
    /// Debris spawns clustered within ~20 units and flies radially outward
    /// from its spawn offset, scaled by `force`, spinning hard. A negative
    /// force creates nothing.
    pub fn create_explosion_burst(
        &mut self,
        center: Vector2,
        force: f32,
        count: usize,
    ) -> Vec<DebrisHandle> {
        if force < 0.0 || count == 0 {
            return Vec::new();
        }

        let mut rng = rand::thread_rng();
        let mut created = Vec::with_capacity(count);

        for _ in 0..count {
            let offset = Vector2::new(rng.gen_range(-20.0..20.0), rng.gen_range(-20.0..20.0));

            let kind = if rng.gen_bool(0.5) {
                DebrisKind::ShipPart
            } else {
                DebrisKind::Metal
            };
            let mut debris = Debris::new(center + offset, kind);

            let direction = if offset.is_zero() {
                Vector2::unit_x()
            } else {
                offset.normalize()
            };
            debris.set_velocity(direction * force * rng.gen_range(0.5..1.5));
            debris.set_angular_velocity(rng.gen_range(-90.0..90.0));

            if let Some(handle) = self.add(debris) {
                created.push(handle);
            }
        }

        created
    }

    /// Creates a ring of metal debris orbiting a center point.
    ///
    /// Pieces are evenly spaced by angle at `orbit_radius` (jittered by
    /// 0.8-1.2) with velocity tangential to the ring.
    pub fn create_orbital_ring(
        &mut self,
        center: Vector2,
        orbit_radius: f32,
        count: usize,
        orbital_speed: f32,
    ) -> Vec<DebrisHandle> {
        if orbit_radius <= 0.0 || count == 0 {
            return Vec::new();
        }

        let mut rng = rand::thread_rng();
        let mut created = Vec::with_capacity(count);

        for i in 0..count {
            let angle = i as f32 / count as f32 * std::f32::consts::TAU;
            let radial = Vector2::from_angle(angle);
            let radius = orbit_radius * rng.gen_range(0.8..1.2);

            let mut debris = Debris::new(center + radial * radius, DebrisKind::Metal);
            debris.set_velocity(radial.perpendicular() * orbital_speed * rng.gen_range(0.8..1.2));

            if let Some(handle) = self.add(debris) {
                created.push(handle);
            }
        }

        created
    }

    /// Runs one simulation tick.
    ///
    /// Phase order is fixed: reset per-tick state, rebuild the grid from
    /// pre-tick positions, per-object integrate then collide (pairs
    /// deduplicated), fragment, collect expiries, apply removals, enforce
    /// the population cap. Non-positive or non-finite time steps are
    /// ignored.
    ///
    /// The event queue is cleared here, so events survive exactly until
    /// the next tick; consumers read them between ticks.
    pub fn tick(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }

        self.stats.collisions_this_tick = 0;
        self.processed_pairs.clear();
        self.events.clear();

        if self.grid.get_cell_size() != self.config.cell_size.max(1.0) {
            self.grid = SpatialGrid::new(self.config.cell_size);
        } else {
            self.grid.clear();
        }
        for (handle, debris) in self.debris.iter() {
            self.grid
                .insert(handle, debris.get_position(), debris.get_size());
        }

        // Snapshot in handle order so results don't depend on hash state
        let mut handles = self.debris.handles();
        handles.sort();

        let mut expired = Vec::new();

        for handle in handles {
            // May have shattered earlier in this pass
            if self.debris.get(handle).is_none() {
                continue;
            }

            let nearby = if self.config.features.contains(FieldFeatures::GRAVITY) {
                self.gravity_sources(handle)
            } else {
                Vec::new()
            };

            if let Some(debris) = self.debris.get_mut(handle) {
                debris.update(dt, &nearby);
            }

            if self.config.features.contains(FieldFeatures::COLLISIONS) {
                self.resolve_collisions_for(handle);
            }

            if self.config.features.contains(FieldFeatures::EXPIRY_CLEANUP)
                && self.debris.get(handle).is_some_and(|d| d.is_expired())
            {
                expired.push(handle);
            }
        }

        for handle in expired {
            if self.debris.remove(handle).is_some() {
                self.stats.removed += 1;
                self.events.add_debris_event(DebrisEvent {
                    event_type: DebrisEventType::Expired,
                    debris: handle,
                });
            }
        }

        self.enforce_population_cap();
        self.time += dt;
    }

    /// Collects gravity-source snapshots for one piece of debris
    fn gravity_sources(&self, handle: DebrisHandle) -> Vec<GravitySource> {
        let Some(debris) = self.debris.get(handle) else {
            return Vec::new();
        };

        let nearby = self
            .grid
            .query_radius(debris.get_position(), MAX_INTERACTION_DISTANCE);

        let mut sources = Vec::with_capacity(nearby.len());
        for other in nearby {
            if other == handle {
                continue;
            }
            if let Some(other_debris) = self.debris.get(other) {
                sources.push(GravitySource::from(other_debris));
            }
        }

        sources
    }

    /// Resolves collisions between one piece of debris and its candidates
    fn resolve_collisions_for(&mut self, handle: DebrisHandle) {
        let candidates = self.grid.collision_candidates(handle);

        for candidate in candidates {
            let pair = CollisionPair::new(handle, candidate);
            if !self.processed_pairs.insert(pair) {
                continue;
            }

            // The arena can't lend two mutable references, so the subject
            // steps out while it collides with the candidate
            let Some(mut subject) = self.debris.take(handle) else {
                return;
            };
            let collided = match self.debris.get_mut(candidate) {
                Some(other) => subject.collide_with(other),
                None => false,
            };
            let impact_position = subject.get_position();
            self.debris.restore(handle, subject);

            if collided {
                self.stats.collisions_this_tick += 1;
                self.events.add_impact_event(ImpactEvent {
                    debris_a: pair.debris_a,
                    debris_b: pair.debris_b,
                    position: impact_position,
                });

                if self
                    .config
                    .features
                    .contains(FieldFeatures::FRAGMENTATION)
                {
                    self.try_fragment(handle, candidate);
                    // The subject may have shattered; stop colliding it
                    if self.debris.get(handle).is_none() {
                        return;
                    }
                }
            }
        }
    }

    /// Applies the fragmentation policy after a confirmed collision.
    ///
    /// When the combined kinetic energy exceeds the size-scaled threshold,
    /// the piece that is large enough to shatter and whose counterpart
    /// carried more energy is replaced by its fragments. At most one of
    /// the two shatters per collision.
    fn try_fragment(&mut self, a: DebrisHandle, b: DebrisHandle) {
        let (Some(debris_a), Some(debris_b)) = (self.debris.get(a), self.debris.get(b)) else {
            return;
        };

        let energy_a = debris_a.kinetic_energy();
        let energy_b = debris_b.kinetic_energy();
        let threshold = debris_a.get_size().max(debris_b.get_size())
            * self.config.fragmentation_energy_factor;

        if energy_a + energy_b <= threshold {
            return;
        }

        let victim = if debris_a.get_size() > SHATTER_MIN_SIZE && energy_b > energy_a {
            a
        } else if debris_b.get_size() > SHATTER_MIN_SIZE && energy_a > energy_b {
            b
        } else {
            return;
        };

        if let Some(parent) = self.debris.remove(victim) {
            self.stats.removed += 1;
            self.events.add_debris_event(DebrisEvent {
                event_type: DebrisEventType::Shattered,
                debris: victim,
            });

            for fragment in parent.fragment(None) {
                if self.add(fragment).is_some() {
                    self.stats.fragments_created += 1;
                }
            }
        }
    }

    /// Evicts oldest-first until the live count is back at the cap
    fn enforce_population_cap(&mut self) {
        while self.debris.len() > self.config.max_debris {
            let Some(oldest) = self.debris.oldest() else {
                break;
            };
            if self.debris.remove(oldest).is_some() {
                self.stats.removed += 1;
                self.events.add_debris_event(DebrisEvent {
                    event_type: DebrisEventType::Evicted,
                    debris: oldest,
                });
            }
        }
    }

    /// Returns debris within a radius of a position.
    ///
    /// Answers from the spatial grid, so results reflect positions as of
    /// the start of the most recent tick.
    pub fn objects_near(&self, position: Vector2, radius: f32) -> Vec<DebrisHandle> {
        self.grid.query_radius(position, radius)
    }

    /// Removes all debris within a radius of a position, returning the
    /// number removed
    pub fn remove_near(&mut self, position: Vector2, radius: f32) -> usize {
        let nearby = self.grid.query_radius(position, radius);

        let mut removed = 0;
        for handle in nearby {
            if self.debris.remove(handle).is_some() {
                removed += 1;
                self.stats.removed += 1;
                self.events.add_debris_event(DebrisEvent {
                    event_type: DebrisEventType::Removed,
                    debris: handle,
                });
            }
        }

        removed
    }

    /// Applies a force to all debris within a radius of a position.
    ///
    /// The force falls off linearly to zero at the radius boundary and is
    /// consumed as acceleration (`F / m`) by each piece's next update.
    pub fn apply_force_near(&mut self, position: Vector2, force: Vector2, radius: f32) {
        if radius <= 0.0 {
            return;
        }

        let nearby = self.grid.query_radius(position, radius);
        for handle in nearby {
            if let Some(debris) = self.debris.get_mut(handle) {
                let distance = debris.get_position().distance(&position);
                let falloff = (1.0 - distance / radius).max(0.0);
                debris.apply_acceleration(force * falloff / debris.get_mass());
            }
        }
    }

    /// Removes all debris from the field
    pub fn clear(&mut self) {
        self.stats.removed += self.debris.len() as u64;
        self.debris.clear();
        self.grid.clear();
        self.processed_pairs.clear();
        self.events.clear();
        self.time = 0.0;
    }
}

impl Default for DebrisField {
    fn default() -> Self {
        Self::new()
    }
}
