use crate::collision::resolve_collision;
use crate::debris::material::{DebrisKind, MaterialProfile};
use crate::debris::particles::{SparkParticle, TrailParticle};
use crate::forces::{gravity_force, GravitySource};
use crate::math::Vector2;

use rand::Rng;

/// Debris below this size is considered gone and marked expired
pub const MIN_DEBRIS_SIZE: f32 = 1.0;

/// Debris below this size is too small to split further
pub const FRAGMENT_MIN_SIZE: f32 = 10.0;

/// Speed above which debris leaves a particle trail
pub const TRAIL_SPEED_THRESHOLD: f32 = 10.0;

/// Upper bound on live trail particles per debris
const MAX_TRAIL_PARTICLES: usize = 24;

/// Upper bound on live sparks per debris
const MAX_SPARKS: usize = 32;

/// Angular velocity retention per update (slow spin bleed)
const ANGULAR_VELOCITY_BLEED: f32 = 0.999;

/// One free-floating piece of debris: kinematics, material-derived
/// properties, decay state and transient visual effects.
#[derive(Debug, Clone)]
pub struct Debris {
    /// World position
    position: Vector2,

    /// Linear velocity
    velocity: Vector2,

    /// Acceleration accumulator, consumed and cleared by each update
    acceleration: Vector2,

    /// Orientation in degrees
    rotation: f32,

    /// Spin in degrees per second
    angular_velocity: f32,

    /// Mass, derived from kind density and size
    mass: f32,

    /// Bounding-circle radius
    size: f32,

    /// Coefficient of restitution, 0-1
    restitution: f32,

    /// Per-update velocity retention factor
    friction: f32,

    /// Whether magnetic salvage equipment can grab this piece
    magnetic: bool,

    /// Kind-specific material data
    profile: MaterialProfile,

    /// Seconds this piece has existed
    age: f32,

    /// Seconds until this piece expires
    lifetime: f32,

    /// Unit-scale render outline, 4-8 vertices; renderer scales by size
    shape_outline: Vec<Vector2>,

    /// Fading trail left while moving fast
    particle_trail: Vec<TrailParticle>,

    /// Short-lived sparks from recent impacts
    collision_sparks: Vec<SparkParticle>,
}

impl Debris {
    /// Creates a new piece of debris of the given kind at a position.
    ///
    /// Size, mass, restitution, friction and magnetism come from the kind's
    /// material table; velocity, spin, lifetime and the render outline are
    /// randomized.
    pub fn new(position: Vector2, kind: DebrisKind) -> Self {
        let mut rng = rand::thread_rng();

        let (size_min, size_max) = kind.size_range();
        let size = rng.gen_range(size_min..size_max);

        Self {
            position,
            velocity: Vector2::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)),
            acceleration: Vector2::zero(),
            rotation: rng.gen_range(0.0..360.0),
            angular_velocity: rng.gen_range(-30.0..30.0),
            mass: kind.density() * size,
            size,
            restitution: kind.restitution(),
            friction: kind.friction(),
            magnetic: kind.is_magnetic(),
            profile: kind.sample_profile(&mut rng),
            age: 0.0,
            lifetime: rng.gen_range(120.0..360.0),
            shape_outline: generate_outline(&mut rng),
            particle_trail: Vec::new(),
            collision_sparks: Vec::new(),
        }
    }

    /// Advances this piece by `dt` seconds.
    ///
    /// `nearby` holds the gravity sources the owning field considers in
    /// range; pass an empty slice when gravity is disabled. Any acceleration
    /// applied externally since the last update is consumed here as well.
    pub fn update(&mut self, dt: f32, nearby: &[GravitySource]) {
        for source in nearby {
            let force = gravity_force(self.position, self.mass, source);
            self.acceleration += force / self.mass;
        }

        // Per-update multiplicative decay, deliberately not time-scaled
        self.velocity *= self.friction;

        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;

        self.angular_velocity *= ANGULAR_VELOCITY_BLEED;
        self.rotation += self.angular_velocity * dt;

        if let MaterialProfile::Ice { sublimation_rate } = self.profile {
            self.size *= (1.0 - sublimation_rate * dt).max(0.0);
            if self.size < MIN_DEBRIS_SIZE {
                // Sublimated away; expire immediately
                self.lifetime = 0.0;
            }
        }

        if self.velocity.length() > TRAIL_SPEED_THRESHOLD {
            self.particle_trail.push(TrailParticle::new(self.position));
        }
        for particle in &mut self.particle_trail {
            particle.update(dt);
        }
        self.particle_trail.retain(|p| p.is_alive());
        if self.particle_trail.len() > MAX_TRAIL_PARTICLES {
            let excess = self.particle_trail.len() - MAX_TRAIL_PARTICLES;
            self.particle_trail.drain(0..excess);
        }

        for spark in &mut self.collision_sparks {
            spark.update(dt);
        }
        self.collision_sparks.retain(|s| s.is_alive());

        self.acceleration = Vector2::zero();
        self.age += dt;
    }

    /// Returns whether this piece has aged out or decayed to nothing
    pub fn is_expired(&self) -> bool {
        self.age >= self.lifetime || self.size < MIN_DEBRIS_SIZE
    }

    /// Kinetic energy, 0.5 * m * |v|^2
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Resolves a collision with another piece of debris.
    ///
    /// Returns false without touching either object when the bounding
    /// circles do not overlap. On overlap the impulse kernel mutates both
    /// velocities (and may separate positions), and both pieces emit sparks
    /// at the contact midpoint.
    pub fn collide_with(&mut self, other: &mut Debris) -> bool {
        let distance = self.position.distance(&other.position);
        if distance > self.size + other.size {
            return false;
        }

        resolve_collision(self, other);

        let midpoint = (self.position + other.position) * 0.5;
        let mut rng = rand::thread_rng();
        self.emit_sparks(midpoint, &mut rng);
        other.emit_sparks(midpoint, &mut rng);

        true
    }

    /// Splits this piece into 2-4 smaller pieces of the same kind.
    ///
    /// Returns an empty vector when the piece is too small to split. The
    /// parent itself is not modified; the owning field removes it and adds
    /// the returned fragments.
    pub fn fragment(&self, count: Option<usize>) -> Vec<Debris> {
        if self.size < FRAGMENT_MIN_SIZE {
            return Vec::new();
        }

        let mut rng = rand::thread_rng();
        let count = count.unwrap_or_else(|| rng.gen_range(2..=4));
        if count == 0 {
            return Vec::new();
        }

        let mut fragments = Vec::with_capacity(count);
        for _ in 0..count {
            let angle = rng.gen_range(0.0..std::f32::consts::TAU);
            let offset = Vector2::from_angle(angle) * rng.gen_range(0.0..self.size);

            let mut fragment = Debris::new(self.position + offset, self.kind());

            let size = self.size / (count as f32).sqrt() * rng.gen_range(0.8..1.2);
            fragment.mass = self.mass * (size / self.size);
            fragment.size = size;

            // Children carry half the parent's momentum plus dispersal
            fragment.velocity = self.velocity * 0.5
                + Vector2::new(rng.gen_range(-15.0..15.0), rng.gen_range(-15.0..15.0));

            fragments.push(fragment);
        }

        fragments
    }

    fn emit_sparks<R: Rng>(&mut self, at: Vector2, rng: &mut R) {
        let count = rng.gen_range(3..=6);
        for _ in 0..count {
            let direction = Vector2::from_angle(rng.gen_range(0.0..std::f32::consts::TAU));
            let speed = rng.gen_range(20.0..60.0);
            self.collision_sparks
                .push(SparkParticle::new(at, direction * speed));
        }
        if self.collision_sparks.len() > MAX_SPARKS {
            let excess = self.collision_sparks.len() - MAX_SPARKS;
            self.collision_sparks.drain(0..excess);
        }
    }

    /// Returns the position
    pub fn get_position(&self) -> Vector2 {
        self.position
    }

    /// Sets the position
    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    /// Returns the linear velocity
    pub fn get_velocity(&self) -> Vector2 {
        self.velocity
    }

    /// Sets the linear velocity
    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Adds to the acceleration accumulator consumed by the next update
    pub fn apply_acceleration(&mut self, acceleration: Vector2) {
        self.acceleration += acceleration;
    }

    /// Returns the pending acceleration accumulator
    pub fn get_acceleration(&self) -> Vector2 {
        self.acceleration
    }

    /// Returns the orientation in degrees
    pub fn get_rotation(&self) -> f32 {
        self.rotation
    }

    /// Returns the spin in degrees per second
    pub fn get_angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    /// Sets the spin in degrees per second
    pub fn set_angular_velocity(&mut self, angular_velocity: f32) {
        self.angular_velocity = angular_velocity;
    }

    /// Returns the mass
    pub fn get_mass(&self) -> f32 {
        self.mass
    }

    /// Sets the mass; non-positive values are ignored
    pub fn set_mass(&mut self, mass: f32) {
        if mass > 0.0 {
            self.mass = mass;
        }
    }

    /// Returns the bounding-circle radius
    pub fn get_size(&self) -> f32 {
        self.size
    }

    /// Sets the bounding-circle radius; non-positive values are ignored
    pub fn set_size(&mut self, size: f32) {
        if size > 0.0 {
            self.size = size;
        }
    }

    /// Returns the coefficient of restitution
    pub fn get_restitution(&self) -> f32 {
        self.restitution
    }

    /// Returns the per-update velocity retention factor
    pub fn get_friction(&self) -> f32 {
        self.friction
    }

    /// Returns whether this piece is magnetic
    pub fn is_magnetic(&self) -> bool {
        self.magnetic
    }

    /// Returns the material kind
    pub fn kind(&self) -> DebrisKind {
        self.profile.kind()
    }

    /// Returns the kind-specific material data
    pub fn get_profile(&self) -> MaterialProfile {
        self.profile
    }

    /// Salvage value for ship parts, None for other kinds
    pub fn get_salvage_value(&self) -> Option<f32> {
        match self.profile {
            MaterialProfile::ShipPart { salvage_value } => Some(salvage_value),
            _ => None,
        }
    }

    /// Returns the age in seconds
    pub fn get_age(&self) -> f32 {
        self.age
    }

    /// Sets the age in seconds
    pub fn set_age(&mut self, age: f32) {
        self.age = age;
    }

    /// Returns the lifetime in seconds
    pub fn get_lifetime(&self) -> f32 {
        self.lifetime
    }

    /// Sets the lifetime in seconds
    pub fn set_lifetime(&mut self, lifetime: f32) {
        self.lifetime = lifetime;
    }

    /// Unit-scale render outline; scale by size and rotate by rotation
    pub fn get_shape_outline(&self) -> &[Vector2] {
        &self.shape_outline
    }

    /// Live trail particles, oldest first
    pub fn get_particle_trail(&self) -> &[TrailParticle] {
        &self.particle_trail
    }

    /// Live collision sparks, oldest first
    pub fn get_collision_sparks(&self) -> &[SparkParticle] {
        &self.collision_sparks
    }
}

/// Generates a closed irregular polygon with 4-8 vertices at unit-scale
/// radii in [0.6, 1.0]
fn generate_outline<R: Rng>(rng: &mut R) -> Vec<Vector2> {
    let vertex_count = rng.gen_range(4..=8);
    let mut outline = Vec::with_capacity(vertex_count);
    for i in 0..vertex_count {
        let angle = i as f32 / vertex_count as f32 * std::f32::consts::TAU;
        let radius = rng.gen_range(0.6..1.0);
        outline.push(Vector2::from_angle(angle) * radius);
    }
    outline
}
