//! Hero background particle layout.
//!
//! Positions must be identical on the server and in the browser so the
//! hydrated markup matches, so they come from a fixed hash of the particle
//! index rather than a runtime RNG.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

pub const PARTICLE_COUNT: usize = 50;

/// Inline style values for one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Horizontal position, percent of the hero width.
    pub left_pct: f64,
    /// Vertical position, percent of the hero height.
    pub top_pct: f64,
    /// Animation delay in seconds, in `[0, 3)`.
    pub delay_s: f64,
    /// Animation duration in seconds, in `[2, 4)`.
    pub duration_s: f64,
}

impl Particle {
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s",
            self.left_pct, self.top_pct, self.delay_s, self.duration_s
        )
    }
}

/// All hero particles.
#[must_use]
pub fn particles() -> Vec<Particle> {
    (0..PARTICLE_COUNT).map(particle).collect()
}

/// Layout of particle `index`.
#[must_use]
pub fn particle(index: usize) -> Particle {
    let seed = index as u64;
    Particle {
        left_pct: unit(seed, 0) * 100.0,
        top_pct: unit(seed, 1) * 100.0,
        delay_s: unit(seed, 2) * 3.0,
        duration_s: 2.0 + unit(seed, 3) * 2.0,
    }
}

/// Deterministic value in `[0, 1)` for (`seed`, `lane`), via splitmix64.
#[allow(clippy::cast_precision_loss)]
fn unit(seed: u64, lane: u64) -> f64 {
    let mut z = seed
        .wrapping_mul(4)
        .wrapping_add(lane)
        .wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    let mantissa = (z >> 11) as f64;
    mantissa / (1_u64 << 53) as f64
}
