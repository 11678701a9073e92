use std::fs;
use std::path::Path;

use cellview_engine::domain::{Sampling, StepKernel};
use cellview_engine::{SceneConfig, SimulationCore, Species};

fn read_scene(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("scenes").join(name);
    fs::read_to_string(&path).expect("scene file should exist")
}

#[test]
fn bundled_cell_scene_matches_builtin_defaults() {
    let parsed = SceneConfig::from_json(&read_scene("cell_viewer.json")).expect("scene should parse");
    let builtin = SceneConfig::cell_viewer();

    assert_eq!(parsed.body_count(), builtin.body_count());
    assert_eq!(parsed.placement, builtin.placement);
    for (a, b) in parsed.species.iter().zip(&builtin.species) {
        assert_eq!(a.species, b.species);
        assert_eq!(a.count, b.count);
        assert_eq!(a.kernel, b.kernel);
        assert!((a.containment.min_radius - b.containment.min_radius).abs() < 1e-5);
        assert!((a.containment.max_radius - b.containment.max_radius).abs() < 1e-5);
        assert!((a.spawn.min_radius - b.spawn.min_radius).abs() < 1e-5);
        assert!((a.spawn.max_radius - b.spawn.max_radius).abs() < 1e-5);
    }
}

#[test]
fn brownian_scene_resolves_gaussian_kernels() {
    let cfg = SceneConfig::from_json(&read_scene("brownian_demo.json")).expect("scene should parse");
    assert_eq!(cfg.species[0].species, Species::ViralParticle);
    assert_eq!(cfg.species[0].sampling, Sampling::VolumeUniform);
    for params in &cfg.species {
        match params.kernel {
            StepKernel::Gaussian { mean, sd } => {
                assert_eq!(mean, 0.0);
                assert!(sd > 0.0 && sd < 1.0, "sd = {}", sd);
            }
            other => panic!("expected gaussian kernel, got {:?}", other),
        }
    }
    // Larger particles diffuse more slowly.
    let sd_of = |i: usize| match cfg.species[i].kernel {
        StepKernel::Gaussian { sd, .. } => sd,
        _ => unreachable!(),
    };
    assert!(sd_of(1) < sd_of(0));
}

#[test]
fn brownian_scene_respects_floor_while_stepping() {
    let mut sim = SimulationCore::new(2024);
    sim.load_config_json(&read_scene("brownian_demo.json")).expect("scene should load");
    for _ in 0..200 {
        sim.step(1.0 / 60.0);
    }
    for body in sim.population().bodies() {
        assert!(body.position.length() <= 7.8 + 1e-3);
        if body.species == Species::Bacterium {
            assert!(body.position.y >= -2.0);
        }
    }
}
