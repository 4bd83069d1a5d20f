//! End-to-end properties of the public generation API.
//!
//! Everything here runs on fixed seeds; a failure is a real regression,
//! not sampling noise.

use tda_datagen_core::neighbors::l2_norm;
use tda_datagen_core::optimizer::{self, Selection};
use tda_datagen_core::sampler;
use tda_datagen_core::{
    generate_sphere, generate_sphere_product, DatagenError, SphereConfig, SphereProductConfig,
};

use rand_chacha::ChaCha8Rng;

fn sphere_config(dimension: usize, num_points: usize, trials: usize) -> SphereConfig {
    SphereConfig {
        dimension,
        num_points,
        trials,
        ..SphereConfig::default()
    }
}

#[test]
fn unit_sphere_has_requested_shape_and_unit_norms() {
    let config = sphere_config(3, 1000, 1);
    let cloud = generate_sphere(&config).expect("generation should succeed");

    assert_eq!(cloud.num_points(), 1000);
    assert_eq!(cloud.dimension(), 3);
    for point in cloud.iter() {
        let norm = l2_norm(point);
        assert!(
            (norm - 1.0).abs() < 1e-9,
            "unit-sphere point norm should be 1.0, got {}",
            norm
        );
    }
}

#[test]
fn shell_points_stay_within_radius_bounds() {
    let config = SphereConfig {
        r1: 1.0,
        r2: 2.0,
        ..sphere_config(4, 800, 2)
    };
    let cloud = generate_sphere(&config).expect("generation should succeed");

    for point in cloud.iter() {
        let norm = l2_norm(point);
        assert!(
            (1.0..=2.0).contains(&norm),
            "shell point norm {} outside [1.0, 2.0]",
            norm
        );
    }
}

#[test]
fn all_output_coordinates_are_finite() {
    let config = SphereConfig {
        r1: 0.5,
        r2: 3.0,
        ..sphere_config(5, 500, 2)
    };
    let cloud = generate_sphere(&config).expect("generation should succeed");

    assert!(
        cloud.to_row_major().iter().all(|x| x.is_finite()),
        "downstream wire format requires finite floats"
    );
    assert_eq!(cloud.to_row_major().len(), 500 * 5);
}

#[test]
fn product_of_2_and_3_spheres_is_five_wide() {
    let config = SphereProductConfig {
        dimensions: vec![2, 3],
        num_points: 500,
        trials: 2,
        ..SphereProductConfig::default()
    };
    let cloud = generate_sphere_product(&config).expect("generation should succeed");

    assert_eq!(cloud.num_points(), 500);
    assert_eq!(cloud.dimension(), 5);
}

#[test]
fn torus_config_generates_four_wide_cloud() {
    let config = SphereProductConfig {
        num_points: 200,
        trials: 1,
        ..SphereProductConfig::torus(2)
    };
    let cloud = generate_sphere_product(&config).expect("generation should succeed");

    assert_eq!(cloud.dimension(), 4);
    // Each circle block of the flat torus sits on the unit circle.
    for point in cloud.iter() {
        assert!((l2_norm(&point[0..2]) - 1.0).abs() < 1e-9);
        assert!((l2_norm(&point[2..4]) - 1.0).abs() < 1e-9);
    }
}

#[test]
fn degenerate_dimension_is_rejected() {
    let config = sphere_config(1, 100, 1);
    assert_eq!(
        generate_sphere(&config).unwrap_err(),
        DatagenError::InvalidDimension { dimension: 1 }
    );
}

#[test]
fn inverted_radius_range_is_rejected() {
    let config = SphereConfig {
        r1: 2.0,
        r2: 1.0,
        ..sphere_config(3, 100, 1)
    };
    assert_eq!(
        generate_sphere(&config).unwrap_err(),
        DatagenError::InvalidRadiusRange { r1: 2.0, r2: 1.0 }
    );
}

#[test]
fn empty_product_dimension_list_is_rejected() {
    let config = SphereProductConfig {
        dimensions: vec![],
        ..SphereProductConfig::default()
    };
    assert_eq!(
        generate_sphere_product(&config).unwrap_err(),
        DatagenError::DimensionListEmpty
    );
}

#[test]
fn product_error_names_the_offending_sub_dimension() {
    let config = SphereProductConfig {
        dimensions: vec![3, 2, 0],
        num_points: 100,
        ..SphereProductConfig::default()
    };
    match generate_sphere_product(&config).unwrap_err() {
        DatagenError::SubSphere {
            index,
            dimension,
            source,
        } => {
            assert_eq!(index, 2);
            assert_eq!(dimension, 0);
            assert_eq!(*source, DatagenError::InvalidDimension { dimension: 0 });
        }
        other => panic!("expected SubSphere error, got {:?}", other),
    }
}

#[test]
fn same_config_reproduces_identical_clouds() {
    let config = sphere_config(3, 300, 4);
    let first = generate_sphere(&config).expect("generation should succeed");
    let second = generate_sphere(&config).expect("generation should succeed");
    assert_eq!(first, second, "fixed seed must reproduce the dataset");
}

#[test]
fn different_seeds_produce_different_clouds() {
    let base = sphere_config(3, 300, 1);
    let other = SphereConfig { seed: 43, ..base.clone() };
    let first = generate_sphere(&base).expect("generation should succeed");
    let second = generate_sphere(&other).expect("generation should succeed");
    assert_ne!(first, second);
}

#[test]
fn winning_min_nn_distance_is_monotone_in_trial_count() {
    // Per-trial streams depend only on (seed, trial index), so each trial
    // count's candidate set is a prefix of the next; taking the max of
    // the per-trial minima can only improve.
    let mut previous = f64::NEG_INFINITY;
    for trials in [1, 2, 4, 8] {
        let winner = optimizer::optimize::<ChaCha8Rng, _>(
            |rng| sampler::sample_cloud(rng, 3, 128, 1.0, 1.0),
            trials,
            Selection::Min,
            42,
        )
        .expect("optimize should succeed");
        let score = Selection::Min.score(&winner.nn_distances);
        assert!(
            score >= previous,
            "winning min NN distance regressed from {} to {} at trials={}",
            previous,
            score,
            trials
        );
        previous = score;
    }
}
