//! Motion integrator: one randomized step per body per frame, then
//! containment.

use rand::Rng;

use crate::core::random::{normal, uniform};
use crate::core::Vec3;
use crate::domain::{Floor, Shell, SpeciesParams, StepKernel};

use super::population::{Body, Population};

/// Counters collected while stepping; folded into perf stats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionStats {
    pub bodies_stepped: u32,
    pub radial_clamps: u32,
    pub floor_clamps: u32,
    pub degenerate_rescales: u32,
}

/// Step every species group of the population once.
pub fn step_population<R: Rng + ?Sized>(population: &mut Population, rng: &mut R, stats: &mut MotionStats) {
    for idx in 0..population.groups().len() {
        if let Some((params, bodies)) = population.group_mut(idx) {
            step_group(bodies, params, rng, stats);
        }
    }
}

/// Step one species group. Identity and species are never touched.
pub fn step_group<R: Rng + ?Sized>(
    bodies: &mut [Body],
    params: &SpeciesParams,
    rng: &mut R,
    stats: &mut MotionStats,
) {
    for body in bodies.iter_mut() {
        let mut p = body.position + displacement(rng, params.kernel);
        contain(&mut p, params.containment, stats);
        if let Some(floor) = params.floor {
            apply_floor(&mut p, floor, stats);
        }
        body.position = p;
        stats.bodies_stepped += 1;
    }
}

/// Draw one 3D displacement from `kernel`.
pub fn displacement<R: Rng + ?Sized>(rng: &mut R, kernel: StepKernel) -> Vec3 {
    match kernel {
        StepKernel::Uniform { speed } => {
            let speed = speed as f64;
            Vec3::new(
                ((uniform(rng) - 0.5) * speed) as f32,
                ((uniform(rng) - 0.5) * speed) as f32,
                ((uniform(rng) - 0.5) * speed) as f32,
            )
        }
        StepKernel::Gaussian { mean, sd } => Vec3::new(
            normal(rng, mean, sd) as f32,
            normal(rng, mean, sd) as f32,
            normal(rng, mean, sd) as f32,
        ),
    }
}

/// Clamp `|p|` into the shell. The max and min checks run independently,
/// in that order.
pub fn contain(p: &mut Vec3, shell: Shell, stats: &mut MotionStats) {
    if !p.is_finite() {
        // NaN or infinite coordinates carry no usable direction.
        stats.degenerate_rescales += 1;
        stats.radial_clamps += 1;
        log::warn!("non-finite position reset to {} along +x", shell.max_radius);
        *p = Vec3::X * shell.max_radius;
        return;
    }
    if p.length() > shell.max_radius {
        *p = rescale(*p, shell.max_radius, stats);
        stats.radial_clamps += 1;
    }
    if p.length() < shell.min_radius {
        *p = rescale(*p, shell.min_radius, stats);
        stats.radial_clamps += 1;
    }
}

fn rescale(p: Vec3, len: f32, stats: &mut MotionStats) -> Vec3 {
    let (scaled, ok) = p.with_length(len);
    if ok {
        return scaled;
    }
    // Zero vector: no direction to keep, fall back to +x.
    stats.degenerate_rescales += 1;
    log::warn!("zero-length position rescaled to {} along +x", len);
    Vec3::X * len
}

/// Per-axis floors, z then y.
pub fn apply_floor(p: &mut Vec3, floor: Floor, stats: &mut MotionStats) {
    if let Some(fz) = floor.z {
        if p.z < fz {
            p.z = fz;
            stats.floor_clamps += 1;
        }
    }
    if let Some(fy) = floor.y {
        if p.y < fy {
            p.y = fy;
            stats.floor_clamps += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::SimRng;
    use crate::domain::{Sampling, Species, StepModel};
    use rand::SeedableRng;

    fn body_at(p: Vec3) -> Body {
        Body { id: 0, species: Species::Protein, position: p }
    }

    #[test]
    fn containment_holds_over_many_steps() {
        let mut rng = SimRng::seed_from_u64(11);
        let specs = vec![
            SpeciesParams::uniform(Species::Water, 300, 1.0, 0.0, 7.8).unwrap(),
            SpeciesParams::uniform(Species::Protein, 100, 0.1, 1.95, 7.8).unwrap(),
            SpeciesParams::uniform(Species::ExtracellularMolecule, 20, 0.05, 7.8, 23.4).unwrap(),
        ];
        let mut pop = Population::initialize(&specs, &mut rng).unwrap();
        let mut stats = MotionStats::default();

        for _ in 0..200 {
            step_population(&mut pop, &mut rng, &mut stats);
            for group in pop.groups() {
                let shell = group.params.containment;
                for body in &pop.bodies()[group.range.clone()] {
                    let r = body.position.length();
                    assert!(
                        r >= shell.min_radius - 1e-4 && r <= shell.max_radius + 1e-4,
                        "{:?} at r = {}",
                        body.species,
                        r
                    );
                }
            }
        }
        assert_eq!(stats.bodies_stepped, 200 * 420);
        assert!(stats.radial_clamps > 0);
    }

    #[test]
    fn origin_body_with_zero_speed_sits_on_min_radius() {
        let mut rng = SimRng::seed_from_u64(12);
        let params = SpeciesParams::uniform(Species::Water, 1, 0.0, 2.0, 5.0).unwrap();
        let mut bodies = [body_at(Vec3::ZERO)];
        let mut stats = MotionStats::default();

        for _ in 0..10 {
            step_group(&mut bodies, &params, &mut rng, &mut stats);
            assert_eq!(bodies[0].position.length(), 2.0);
        }
        assert_eq!(bodies[0].position, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(stats.degenerate_rescales, 1);
    }

    #[test]
    fn degenerate_rescale_does_not_panic() {
        let mut stats = MotionStats::default();
        let mut p = Vec3::ZERO;
        contain(&mut p, Shell::new(3.5, 4.0), &mut stats);
        assert_eq!(p.length(), 3.5);
        assert_eq!(stats.degenerate_rescales, 1);
    }

    #[test]
    fn outside_max_is_pulled_back_along_direction() {
        let mut stats = MotionStats::default();
        let mut p = Vec3::new(0.0, 6.0, 8.0);
        contain(&mut p, Shell::new(1.0, 5.0), &mut stats);
        assert!((p.length() - 5.0).abs() < 1e-5);
        assert!((p.y - 3.0).abs() < 1e-5);
        assert!((p.z - 4.0).abs() < 1e-5);
        assert_eq!(stats.radial_clamps, 1);
    }

    #[test]
    fn far_outside_max_keeps_direction() {
        let mut stats = MotionStats::default();
        let mut p = Vec3::new(0.0, 0.0, 1e20);
        contain(&mut p, Shell::new(0.0, 5.0), &mut stats);
        assert_eq!(p, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(stats.degenerate_rescales, 0);

        let mut p = Vec3::new(-f32::MAX, 0.0, 0.0);
        contain(&mut p, Shell::new(0.0, 5.0), &mut stats);
        assert_eq!(p, Vec3::new(-5.0, 0.0, 0.0));
        assert_eq!(stats.degenerate_rescales, 0);
    }

    #[test]
    fn non_finite_position_is_put_back_in_the_shell() {
        for bad in [
            Vec3::new(f32::NAN, 0.0, 0.0),
            Vec3::new(0.0, f32::INFINITY, 1.0),
            Vec3::new(0.0, 0.0, f32::NEG_INFINITY),
        ] {
            let mut stats = MotionStats::default();
            let mut p = bad;
            contain(&mut p, Shell::new(2.0, 5.0), &mut stats);
            assert_eq!(p, Vec3::new(5.0, 0.0, 0.0));
            assert_eq!(stats.degenerate_rescales, 1);
        }
    }

    #[test]
    fn inside_shell_is_left_alone() {
        let mut stats = MotionStats::default();
        let mut p = Vec3::new(1.0, 1.0, 1.0);
        contain(&mut p, Shell::new(1.0, 5.0), &mut stats);
        assert_eq!(p, Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(stats.radial_clamps, 0);
    }

    #[test]
    fn floors_apply_after_containment() {
        let params = SpeciesParams::new(
            Species::ViralParticle,
            1,
            StepModel::Uniform { speed: 0.0 },
            Shell::new(0.0, 10.0),
            None,
            Sampling::Naive,
            Some(Floor { y: Some(-1.0), z: Some(0.5) }),
        )
        .unwrap();
        let mut bodies = [body_at(Vec3::new(0.0, -20.0, -3.0))];
        let mut rng = SimRng::seed_from_u64(13);
        let mut stats = MotionStats::default();
        step_group(&mut bodies, &params, &mut rng, &mut stats);

        let p = bodies[0].position;
        assert_eq!(p.y, -1.0);
        assert_eq!(p.z, 0.5);
        assert_eq!(stats.floor_clamps, 2);
        assert_eq!(stats.radial_clamps, 1);
    }

    #[test]
    fn uniform_displacement_is_bounded_by_half_speed() {
        let mut rng = SimRng::seed_from_u64(14);
        for _ in 0..10_000 {
            let d = displacement(&mut rng, StepKernel::Uniform { speed: 0.4 });
            for c in d.to_array() {
                assert!((-0.2..=0.2).contains(&c));
            }
        }
    }

    #[test]
    fn gaussian_displacement_sd_converges() {
        let mut rng = SimRng::seed_from_u64(15);
        let sd = 0.03;
        let n = 100_000;
        let xs: Vec<f64> = (0..n)
            .map(|_| displacement(&mut rng, StepKernel::Gaussian { mean: 0.0, sd }).x as f64)
            .collect();
        let mean = xs.iter().sum::<f64>() / n as f64;
        let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        let empirical = var.sqrt();
        assert!((empirical - sd).abs() / sd < 0.05, "sd {} vs {}", empirical, sd);
    }

    #[test]
    fn species_and_ids_survive_steps() {
        let mut rng = SimRng::seed_from_u64(16);
        let specs = vec![
            SpeciesParams::uniform(Species::Bacterium, 5, 2.0, 0.0, 3.0).unwrap(),
            SpeciesParams::uniform(Species::Water, 5, 2.0, 0.0, 3.0).unwrap(),
        ];
        let mut pop = Population::initialize(&specs, &mut rng).unwrap();
        let before: Vec<_> = pop.bodies().iter().map(|b| (b.id, b.species)).collect();
        let mut stats = MotionStats::default();
        for _ in 0..50 {
            step_population(&mut pop, &mut rng, &mut stats);
        }
        let after: Vec<_> = pop.bodies().iter().map(|b| (b.id, b.species)).collect();
        assert_eq!(before, after);
    }
}
