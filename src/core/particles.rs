use super::constants::*;
use super::error::{ensure_non_negative, ensure_positive, ensure_range, ConfigError};
use rand::Rng;

#[derive(Clone, Copy, Debug)]
pub struct ParticleConfig {
    pub count: usize,
    pub min_size: f32,
    pub max_size: f32,
    pub min_duration: f32,
    pub max_duration: f32,
    pub max_delay: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            min_size: PARTICLE_MIN_SIZE_PX,
            max_size: PARTICLE_MAX_SIZE_PX,
            min_duration: PARTICLE_MIN_DURATION_SEC,
            max_duration: PARTICLE_MAX_DURATION_SEC,
            max_delay: PARTICLE_MAX_DELAY_SEC,
        }
    }
}

impl ParticleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("particle min size", self.min_size)?;
        ensure_range("particle size", self.min_size, self.max_size)?;
        ensure_positive("particle min duration", self.min_duration)?;
        ensure_range("particle duration", self.min_duration, self.max_duration)?;
        ensure_non_negative("particle max delay", self.max_delay)?;
        Ok(())
    }
}

/// One floating particle: size in px, position in % of the container, timing in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub size: f32,
    pub left_pct: f32,
    pub top_pct: f32,
    pub duration: f32,
    pub delay: f32,
}

impl Particle {
    pub fn inline_style(&self) -> String {
        format!(
            "width:{size:.2}px;height:{size:.2}px;left:{:.2}%;top:{:.2}%;animation-duration:{:.2}s;animation-delay:{:.2}s",
            self.left_pct,
            self.top_pct,
            self.duration,
            self.delay,
            size = self.size,
        )
    }
}

#[inline]
fn uniform<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + rng.gen::<f32>() * (max - min)
}

pub fn generate<R: Rng + ?Sized>(
    config: &ParticleConfig,
    rng: &mut R,
) -> Result<Vec<Particle>, ConfigError> {
    config.validate()?;
    Ok((0..config.count)
        .map(|_| Particle {
            size: uniform(rng, config.min_size, config.max_size),
            left_pct: uniform(rng, 0.0, 100.0),
            top_pct: uniform(rng, 0.0, 100.0),
            duration: uniform(rng, config.min_duration, config.max_duration),
            delay: uniform(rng, 0.0, config.max_delay),
        })
        .collect())
}
