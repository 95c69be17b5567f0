use rand::Rng;

/// Emission parameters for a particle emitter. Lifetimes are in ticks,
/// speeds in world units per tick. Both ranges are half-open `[min, max)`.
#[derive(Debug, Clone)]
pub struct EmitterConfig {
    pub lifetime_min: i32,
    pub lifetime_max: i32,
    pub speed_min: f64,
    pub speed_max: f64,
    pub capacity: usize,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        EmitterConfig {
            lifetime_min: 45,
            lifetime_max: 60,
            speed_min: 0.4,
            speed_max: 0.6,
            capacity: 512,
        }
    }
}

impl EmitterConfig {
    pub fn sample_lifetime<R: Rng>(&self, rng: &mut R) -> i32 {
        sample_i32(rng, self.lifetime_min, self.lifetime_max)
    }

    pub fn sample_speed<R: Rng>(&self, rng: &mut R) -> f64 {
        sample_f64(rng, self.speed_min, self.speed_max)
    }
}

#[derive(Debug, Clone)]
pub struct BulletConfig {
    pub lifetime_min: i32,
    pub lifetime_max: i32,
    pub speed_min: f64,
    pub speed_max: f64,
    /// Ticks a bullet keeps fading after its lifetime runs out.
    pub decay_time: i32,
    pub capacity: usize,
}

impl Default for BulletConfig {
    fn default() -> Self {
        BulletConfig {
            lifetime_min: 120,
            lifetime_max: 120,
            speed_min: 3.0,
            speed_max: 3.0,
            decay_time: 24,
            capacity: 64,
        }
    }
}

impl BulletConfig {
    pub fn sample_lifetime<R: Rng>(&self, rng: &mut R) -> i32 {
        sample_i32(rng, self.lifetime_min, self.lifetime_max)
    }

    pub fn sample_speed<R: Rng>(&self, rng: &mut R) -> f64 {
        sample_f64(rng, self.speed_min, self.speed_max)
    }
}

// Empty or inverted ranges collapse to `min`.
fn sample_i32<R: Rng>(rng: &mut R, min: i32, max: i32) -> i32 {
    if max <= min {
        return min;
    }
    rng.gen_range(min..max)
}

fn sample_f64<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    if !(max > min) {
        return min;
    }
    rng.gen_range(min..max)
}
