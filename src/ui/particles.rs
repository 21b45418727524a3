//! Decorative particles drifting behind the welcome screen.

use std::time::Duration;

pub const PARTICLE_COUNT: usize = 30;

const MAX_DELAY_SECS: f32 = 15.0;
const MIN_DURATION_SECS: f32 = 15.0;
const DURATION_SPREAD_SECS: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position in percent of the available width, `[0, 100)`.
    pub left: f32,
    /// Vertical start position in percent of the available height, `[0, 100)`.
    pub top: f32,
    pub delay: Duration,
    pub duration: Duration,
}

impl Particle {
    fn random(rng: &mut fastrand::Rng) -> Self {
        Self {
            left: rng.f32() * 100.0,
            top: rng.f32() * 100.0,
            delay: Duration::from_secs_f32(rng.f32() * MAX_DELAY_SECS),
            duration: Duration::from_secs_f32(
                MIN_DURATION_SECS + rng.f32() * DURATION_SPREAD_SECS,
            ),
        }
    }

    /// Vertical position in percent at `elapsed` since start-up.
    ///
    /// Before its delay the particle rests at `top`; afterwards it floats up
    /// one full height per cycle and wraps around.
    pub fn position_at(&self, elapsed: Duration) -> f32 {
        let Some(running) = elapsed.checked_sub(self.delay) else {
            return self.top;
        };
        let cycle = self.duration.as_secs_f32();
        if cycle <= 0.0 {
            return self.top;
        }
        let progress = (running.as_secs_f32() % cycle) / cycle;
        (self.top - progress * 100.0).rem_euclid(100.0)
    }
}

/// Generate the background particles.
pub fn generate() -> Vec<Particle> {
    generate_with(&mut fastrand::Rng::new())
}

/// Same as [`generate`] with a caller-supplied generator.
pub fn generate_with(rng: &mut fastrand::Rng) -> Vec<Particle> {
    (0..PARTICLE_COUNT).map(|_| Particle::random(rng)).collect()
}
