//! Random draws used by population sampling and the motion integrator.
//!
//! All draws go through one caller-owned `Rng` so a seeded simulation
//! replays exactly.

use std::f64::consts::PI;

use rand::Rng;
use rand_chacha::ChaChaRng;

/// The simulation's PRNG stream.
pub type SimRng = ChaChaRng;

/// Uniform in `[0, 1)`.
#[inline]
pub fn uniform<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen::<f64>()
}

/// Uniform in `(0, 1]`, safe to feed into `ln`.
#[inline]
pub fn uniform_open_closed<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    1.0 - rng.gen::<f64>()
}

/// Standard normal sample via the Box-Muller transform (cosine branch only).
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u1 = uniform_open_closed(rng);
    let u2 = uniform_open_closed(rng);
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

#[inline]
pub fn normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, sd: f64) -> f64 {
    mean + standard_normal(rng) * sd
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn open_closed_never_hits_zero() {
        let mut rng = SimRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let u = uniform_open_closed(&mut rng);
            assert!(u > 0.0 && u <= 1.0);
        }
    }

    #[test]
    fn normal_sd_converges() {
        let mut rng = SimRng::seed_from_u64(42);
        let sd = 0.25;
        let n = 100_000;
        let samples: Vec<f64> = (0..n).map(|_| normal(&mut rng, 0.0, sd)).collect();
        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        let empirical = var.sqrt();
        assert!(mean.abs() < 0.01, "mean drifted: {}", mean);
        assert!((empirical - sd).abs() / sd < 0.05, "sd {} vs {}", empirical, sd);
    }

    #[test]
    fn normal_respects_mean() {
        let mut rng = SimRng::seed_from_u64(3);
        let n = 50_000;
        let mean = (0..n).map(|_| normal(&mut rng, 5.0, 1.0)).sum::<f64>() / n as f64;
        assert!((mean - 5.0).abs() < 0.05);
    }
}
