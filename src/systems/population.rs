//! Particle population: the fixed set of bodies and their species groups.

use std::f64::consts::PI;
use std::ops::Range;

use rand::Rng;

use crate::core::random::uniform;
use crate::core::Vec3;
use crate::domain::{ConfigError, Result, Sampling, SceneConfig, Shell, Species, SpeciesParams, MAX_BODIES};

/// Dense handle the host uses to map bodies onto its scene nodes.
pub type BodyId = u32;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub id: BodyId,
    pub species: Species,
    pub position: Vec3,
}

/// One species group: its parameters and the contiguous id range it owns.
#[derive(Clone, Debug)]
pub struct SpeciesGroup {
    pub params: SpeciesParams,
    pub range: Range<usize>,
}

#[derive(Clone, Debug, Default)]
pub struct Population {
    bodies: Vec<Body>,
    groups: Vec<SpeciesGroup>,
}

impl Population {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Spawn every group in order. Ids are assigned consecutively across
    /// groups, so group `i` owns a contiguous id range.
    pub fn initialize<R: Rng + ?Sized>(species: &[SpeciesParams], rng: &mut R) -> Result<Self> {
        for params in species {
            params.validate()?;
        }

        let total = species
            .iter()
            .try_fold(0usize, |acc, p| acc.checked_add(p.count))
            .filter(|&n| n <= MAX_BODIES)
            .ok_or(ConfigError::TooManyBodies { max: MAX_BODIES })?;
        let mut bodies = Vec::with_capacity(total);
        let mut groups = Vec::with_capacity(species.len());

        for params in species {
            let start = bodies.len();
            for _ in 0..params.count {
                let id = bodies.len() as BodyId;
                let position = sample_in_shell(rng, params.spawn, params.sampling);
                bodies.push(Body { id, species: params.species, position });
            }
            groups.push(SpeciesGroup { params: params.clone(), range: start..bodies.len() });
        }

        Ok(Self { bodies, groups })
    }

    pub fn from_config<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> Result<Self> {
        Self::initialize(&config.species, rng)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id as usize)
    }

    pub fn groups(&self) -> &[SpeciesGroup] {
        &self.groups
    }

    /// Parameters and bodies of group `idx`, for the integrator.
    pub fn group_mut(&mut self, idx: usize) -> Option<(&SpeciesParams, &mut [Body])> {
        let group = self.groups.get(idx)?;
        Some((&group.params, &mut self.bodies[group.range.clone()]))
    }

    /// Overwrite one body's position. Returns false for an unknown id or a
    /// non-finite position.
    pub fn set_position(&mut self, id: BodyId, position: Vec3) -> bool {
        if !position.is_finite() {
            return false;
        }
        match self.bodies.get_mut(id as usize) {
            Some(body) => {
                body.position = position;
                true
            }
            None => false,
        }
    }

    /// Pack positions as `x, y, z` triples in id order.
    pub fn positions_into(&self, out: &mut Vec<f32>) {
        out.clear();
        out.reserve(self.bodies.len() * 3);
        for body in &self.bodies {
            out.extend_from_slice(&body.position.to_array());
        }
    }
}

/// Draw a starting position inside `shell`.
pub fn sample_in_shell<R: Rng + ?Sized>(rng: &mut R, shell: Shell, sampling: Sampling) -> Vec3 {
    match sampling {
        Sampling::Naive => sample_naive(rng, shell),
        Sampling::VolumeUniform => sample_volume_uniform(rng, shell.max_radius),
    }
}

// Normalized cube draw times uniform radius. Denser towards the centre than
// a volume-uniform draw; kept as the stock look of the scene.
fn sample_naive<R: Rng + ?Sized>(rng: &mut R, shell: Shell) -> Vec3 {
    let raw = Vec3::new(
        (uniform(rng) - 0.5) as f32,
        (uniform(rng) - 0.5) as f32,
        (uniform(rng) - 0.5) as f32,
    );
    let dir = raw.try_normalize().unwrap_or(Vec3::X);
    let span = (shell.max_radius - shell.min_radius) as f64;
    let radius = uniform(rng) * span + shell.min_radius as f64;
    dir * radius as f32
}

fn sample_volume_uniform<R: Rng + ?Sized>(rng: &mut R, max_radius: f32) -> Vec3 {
    let theta = 2.0 * PI * uniform(rng);
    let phi = (2.0 * uniform(rng) - 1.0).acos();
    let r = uniform(rng).cbrt() * max_radius as f64;
    Vec3::new(
        (r * phi.sin() * theta.cos()) as f32,
        (r * phi.sin() * theta.sin()) as f32,
        (r * phi.cos()) as f32,
    )
}
