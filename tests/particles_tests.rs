// Host-side tests for particle generation.

use letter_web::core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn default_field_respects_bounds() {
    let config = ParticleConfig::default();
    let mut rng = StdRng::seed_from_u64(7);
    let particles = generate(&config, &mut rng).unwrap();
    assert_eq!(particles.len(), 30);
    for p in &particles {
        assert!(p.size >= 15.0 && p.size < 50.0, "{:?}", p);
        assert!((0.0..100.0).contains(&p.left_pct), "{:?}", p);
        assert!((0.0..100.0).contains(&p.top_pct), "{:?}", p);
        assert!(p.duration >= 5.0 && p.duration < 10.0, "{:?}", p);
        assert!(p.delay >= 0.0 && p.delay < 10.0, "{:?}", p);
    }
}

#[test]
fn same_seed_same_field() {
    let config = ParticleConfig::default();
    let a = generate(&config, &mut StdRng::seed_from_u64(42)).unwrap();
    let b = generate(&config, &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(a, b);
    let c = generate(&config, &mut StdRng::seed_from_u64(43)).unwrap();
    assert_ne!(a, c);
}

#[test]
fn fixed_size_range_is_allowed() {
    let config = ParticleConfig {
        count: 5,
        min_size: 20.0,
        max_size: 20.0,
        ..ParticleConfig::default()
    };
    let particles = generate(&config, &mut StdRng::seed_from_u64(1)).unwrap();
    assert!(particles.iter().all(|p| p.size == 20.0));
}

#[test]
fn zero_count_is_empty() {
    let config = ParticleConfig {
        count: 0,
        ..ParticleConfig::default()
    };
    assert!(generate(&config, &mut StdRng::seed_from_u64(1))
        .unwrap()
        .is_empty());
}

#[test]
fn inverted_range_is_rejected() {
    let config = ParticleConfig {
        min_size: 60.0,
        max_size: 10.0,
        ..ParticleConfig::default()
    };
    let err = generate(&config, &mut StdRng::seed_from_u64(1)).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvertedRange {
            name: "particle size",
            min: 60.0,
            max: 10.0
        }
    );
    assert!(err.to_string().contains("inverted"));
}

#[test]
fn negative_delay_is_rejected() {
    let config = ParticleConfig {
        max_delay: -1.0,
        ..ParticleConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Negative { .. })
    ));
}

#[test]
fn inline_style_carries_size_position_and_timing() {
    let p = Particle {
        size: 20.0,
        left_pct: 12.5,
        top_pct: 80.0,
        duration: 6.0,
        delay: 1.25,
    };
    assert_eq!(
        p.inline_style(),
        "width:20.00px;height:20.00px;left:12.50%;top:80.00%;animation-duration:6.00s;animation-delay:1.25s"
    );
}
