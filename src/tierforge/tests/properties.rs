//! End-to-end checks of the engine's published guarantees

use rand::rngs::StdRng;
use rand::SeedableRng;
use tierforge::{
    classify_item, estimate, generate, sample, summarize, unit_source, verify, Catalog, Category,
    RarityConfig, RarityDistribution, RarityError, RarityTier, Trait,
};

const CATALOG_YAML: &str = r#"
name: Test Bros
description: Fixture collection
layers:
  - name: Background
    traits:
      - { id: bg-sand, name: Sand, weight: 55 }
      - { id: bg-sky, name: Sky, weight: 30 }
      - { id: bg-void, name: Void, weight: 10 }
      - { id: bg-gold, name: Gold, weight: 5 }
  - name: Body
    traits:
      - { id: body-plain, name: Plain, weight: 60 }
      - { id: body-robot, name: Robot, weight: 25 }
      - { id: body-ghost, name: Ghost, weight: 15 }
  - name: Eyes
    traits:
      - { id: eyes-dots, name: Dots, weight: 92 }
      - { id: eyes-laser, name: Laser, weight: 8 }
  - name: Hat
    traits:
      - { id: hat-none, name: None, weight: 75 }
      - { id: hat-cap, name: Cap, weight: 20 }
      - { id: hat-crown, name: Crown, weight: 5 }
  - name: Watermark
    visible: false
    traits:
      - { id: wm, name: Mark, weight: 1 }
"#;

fn catalog() -> Catalog {
    Catalog::from_yaml(CATALOG_YAML).expect("fixture parses")
}

#[test]
fn sampling_converges_to_uniform_weights() {
    let options = [20.0, 20.0, 20.0, 20.0, 20.0];
    let mut std_rng = StdRng::seed_from_u64(2024);
    let mut rng = unit_source(&mut std_rng);

    let mut hits = [0u32; 5];
    for _ in 0..10_000 {
        hits[sample(&options, &mut rng).unwrap()] += 1;
    }

    for h in hits {
        let pct = f64::from(h) / 10_000.0 * 100.0;
        assert!((pct - 20.0).abs() <= 2.0, "{}% not within 20±2", pct);
    }
}

#[test]
fn classifier_never_drops_tier_when_a_weight_rises() {
    let config = RarityConfig::default();
    let mut std_rng = StdRng::seed_from_u64(11);
    let mut rng = unit_source(&mut std_rng);

    for _ in 0..200 {
        let weights: Vec<f64> = (0..4).map(|_| rng() * 100.0).collect();
        let before = classify_item(&weights, &config).unwrap().tier;

        for slot in 0..weights.len() {
            let mut raised = weights.clone();
            raised[slot] += rng() * 50.0;
            let after = classify_item(&raised, &config).unwrap().tier;
            assert!(
                !before.is_richer_than(after),
                "{:?} → {:?} moved {} to {}",
                weights,
                raised,
                before,
                after
            );
        }
    }
}

#[test]
fn threshold_boundaries_under_default_table() {
    let config = RarityConfig::default();

    let mythic = classify_item(&[95.0; 5], &config).unwrap();
    assert_eq!(mythic.tier, RarityTier::Mythic);
    assert_eq!(mythic.multiplier, 1000);
    assert_eq!(mythic.total_weight, 475.0);

    let common = classify_item(&[10.0; 5], &config).unwrap();
    assert_eq!(common.tier, RarityTier::Common);
    assert_eq!(common.multiplier, 1);
    assert_eq!(common.total_weight, 50.0);
}

#[test]
fn verifying_against_own_tally_always_passes() {
    let catalog = catalog();
    let config = RarityConfig::default();

    for seed in 0..5 {
        let mut std_rng = StdRng::seed_from_u64(seed);
        let mut rng = unit_source(&mut std_rng);
        let items = generate(&catalog.categories, 300, &mut rng, &config).unwrap();

        let expected = RarityDistribution::tally(&items);
        let report = verify(&items, &expected, 0.0).unwrap();
        assert!(report.is_valid);
        assert!(report.discrepancies.is_empty());
    }
}

#[test]
fn estimate_conserves_mass_within_rounding_drift() {
    let catalog = catalog();
    let config = RarityConfig::default();

    for seed in [1, 2, 3, 40, 500] {
        let mut std_rng = StdRng::seed_from_u64(seed);
        let mut rng = unit_source(&mut std_rng);
        let dist = estimate(&catalog.categories, 1000, &mut rng, &config).unwrap();

        let drift = (dist.total() as i64 - 1000).abs();
        assert!(drift <= RarityTier::ALL.len() as i64, "seed {} drift {}", seed, drift);
    }
}

#[test]
fn estimate_predicts_generated_population() {
    // Same catalog and config, independent streams: shares should be close
    let catalog = catalog();
    let config = RarityConfig::default();

    let mut est_rng = StdRng::seed_from_u64(8);
    let expected = estimate(&catalog.categories, 2000, &mut unit_source(&mut est_rng), &config)
        .unwrap();

    let mut gen_rng = StdRng::seed_from_u64(9);
    let items = generate(&catalog.categories, 2000, &mut unit_source(&mut gen_rng), &config)
        .unwrap();
    let actual = RarityDistribution::tally(&items);

    for tier in RarityTier::ALL {
        let gap = (expected.percent(tier) - actual.percent(tier)).abs();
        assert!(gap < 8.0, "{} differs by {:.2} points", tier, gap);
    }
}

#[test]
fn empty_inputs_fail_with_their_own_kind() {
    let config = RarityConfig::default();
    let no_traits: Vec<Trait> = Vec::new();
    assert_eq!(
        classify_item(&no_traits, &config),
        Err(RarityError::EmptyTraitSet)
    );

    assert_eq!(summarize(&[]), Err(RarityError::EmptyPopulation));

    let mut rng = || 0.5;
    assert_eq!(
        estimate(&catalog().categories, 0, &mut rng, &config),
        Err(RarityError::InvalidSupply(0))
    );
}

#[test]
fn invisible_and_empty_categories_contribute_nothing() {
    let mut catalog = catalog();
    catalog.categories.push(Category::new("Blank", vec![]));

    let mut std_rng = StdRng::seed_from_u64(77);
    let mut rng = unit_source(&mut std_rng);
    let items = generate(&catalog.categories, 50, &mut rng, &RarityConfig::default()).unwrap();

    for item in &items {
        assert_eq!(item.traits.len(), 4);
        assert!(item.trait_in("Watermark").is_none());
    }
}

#[test]
fn population_survives_file_round_trip_for_audit() -> anyhow::Result<()> {
    let catalog = catalog();
    let config = RarityConfig::default();
    let mut std_rng = StdRng::seed_from_u64(5);
    let mut rng = unit_source(&mut std_rng);
    let items = generate(&catalog.categories, 40, &mut rng, &config)?;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("population.json");
    tierforge::save_population(&path, &items)?;
    let loaded = tierforge::load_population(&path)?;

    assert_eq!(summarize(&loaded)?, summarize(&items)?);
    Ok(())
}
