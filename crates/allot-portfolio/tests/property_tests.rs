//! Property-based tests for allocation invariants.
//!
//! These tests verify the guarantees every allocation must meet:
//! - Amounts sum exactly to the total
//! - Every amount is a multiple of the tick
//! - Every amount reaches the minimum
//! - Results are deterministic and both apportionment methods agree on the above
//! - Consistent constraints are met exactly, label by label

use std::collections::BTreeMap;

use allot_core::{Category, Country, Dimension, Industry, Size, Style};
use allot_portfolio::belongs_to;
use allot_portfolio::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

/// Simple deterministic hash for reproducible pseudo-random test data.
fn simple_hash(seed: u64, i: u64) -> u64 {
    let mut x = seed.wrapping_add(i).wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x = x.wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x
}

/// Generates `n` instruments with varying classifications.
///
/// Roughly one attribute in eight is left out.
fn generate_instruments(n: usize, seed: u64) -> Vec<Instrument> {
    let countries = [
        Country::US,
        Country::CA,
        Country::DE,
        Country::FR,
        Country::GB,
        Country::JP,
        Country::BR,
        Country::CN,
    ];
    let industries = [
        Industry::Semiconductors,
        Industry::SoftwareApplication,
        Industry::BanksDiversified,
        Industry::OilGasIntegrated,
        Industry::Biotechnology,
        Industry::UtilitiesRegulatedElectric,
        Industry::AutoManufacturers,
    ];

    (0..n)
        .map(|i| {
            let hash = simple_hash(seed, i as u64);
            let pick = |shift: u32, len: usize| ((hash >> shift) as usize) % len;
            let present = |shift: u32| (hash >> shift) % 8 != 0;

            let mut instrument = Instrument::new(format!("I{i:03}"));
            if present(40) {
                instrument = instrument.with_country(countries[pick(0, countries.len())]);
            }
            if present(44) {
                instrument = instrument.with_industry(industries[pick(8, industries.len())]);
            }
            if present(48) {
                instrument = instrument.with_size(Size::ALL[pick(16, Size::ALL.len())]);
            }
            if present(52) {
                instrument = instrument.with_style(Style::ALL[pick(24, Style::ALL.len())]);
            }
            instrument
        })
        .collect()
}

/// Random proportions in [0, 1] for every category held by some instrument.
///
/// Generally inconsistent across dimensions.
fn generate_constraints(instruments: &[Instrument], seed: u64) -> ConstraintSet {
    let held = ConstraintSet::equal_weight(instruments, &Dimension::ALL);
    held.iter()
        .enumerate()
        .map(|(i, (category, _))| {
            let hash = simple_hash(seed ^ 0xABCD, i as u64);
            (category, (hash % 1001) as f64 / 1000.0)
        })
        .collect()
}

/// Options with a tick and a feasible minimum derived from the seed.
fn generate_options(n: usize, seed: u64) -> AllocationOptions {
    let hash = simple_hash(seed, 7_919);
    let tick = [dec!(1), dec!(5), dec!(10), dec!(0.25)][(hash % 4) as usize];
    let seats = 10_000u64;
    let floor_ticks = (hash >> 8) % (seats / n as u64 + 1);
    AllocationOptions::new(tick * Decimal::from(seats))
        .with_tick(tick)
        .with_min_amount(tick * Decimal::from(floor_ticks))
}

/// A consistent problem together with the amount each category must receive.
struct KnownAllocation {
    instruments: Vec<Instrument>,
    constraints: ConstraintSet,
    options: AllocationOptions,
    expected: BTreeMap<Category, Decimal>,
}

/// Builds a consistent problem from a known allocation.
///
/// Instruments come in cells sharing every attribute. Each cell has its own
/// region and sector, so the constraints fix every cell total and each dimension
/// covers all instruments. Per-instrument amounts and the minimum are multiples of
/// 12 ticks, so a cell's excess splits evenly over any 1 to 4 of its members.
fn generate_known_allocation(seed: u64) -> KnownAllocation {
    let countries = [Country::US, Country::DE, Country::JP, Country::GB, Country::BR];
    let industries = [
        Industry::Semiconductors,
        Industry::BanksDiversified,
        Industry::OilGasIntegrated,
        Industry::Biotechnology,
        Industry::UtilitiesRegulatedElectric,
    ];

    let hash = simple_hash(seed, 104_729);
    let cells = 1 + (hash % countries.len() as u64) as usize;
    let tick = [dec!(1), dec!(5), dec!(0.25)][((hash >> 8) % 3) as usize];
    let floor_units = (hash >> 16) % 2;

    let mut instruments = Vec::new();
    let mut ticks = Vec::new();
    for cell in 0..cells {
        let cell_hash = simple_hash(seed ^ 0x5EED, cell as u64);
        let members = 1 + (cell_hash % 4) as usize;
        let units = floor_units + 1 + (cell_hash >> 8) % 6;
        for k in 0..members {
            instruments.push(
                Instrument::new(format!("C{cell}M{k}"))
                    .with_country(countries[cell])
                    .with_industry(industries[cell])
                    .with_size(Size::ALL[cell % Size::ALL.len()])
                    .with_style(Style::ALL[(cell + seed as usize) % Style::ALL.len()]),
            );
            ticks.push(12 * units);
        }
    }

    let total_ticks: u64 = ticks.iter().sum();
    let mut category_ticks: BTreeMap<Category, u64> = BTreeMap::new();
    for (instrument, &t) in instruments.iter().zip(&ticks) {
        for dimension in Dimension::ALL {
            if let Some(category) = instrument.category(dimension) {
                *category_ticks.entry(category).or_insert(0) += t;
            }
        }
    }

    let mut constraints = ConstraintSet::new();
    for (&category, &t) in &category_ticks {
        constraints.insert(category, t as f64 / total_ticks as f64);
    }
    let expected = category_ticks
        .into_iter()
        .map(|(category, t)| (category, tick * Decimal::from(t)))
        .collect();
    let options = AllocationOptions::new(tick * Decimal::from(total_ticks))
        .with_tick(tick)
        .with_min_amount(tick * Decimal::from(12 * floor_units));

    KnownAllocation {
        instruments,
        constraints,
        options,
        expected,
    }
}

fn check_invariants(result: &AllocationResult, options: &AllocationOptions, context: &str) {
    assert_eq!(result.total(), options.total_amount, "total for {context}");
    for weighted in &result.weighted_instruments {
        assert!(
            (weighted.amount % options.tick).is_zero(),
            "{} is not a multiple of {} for {context}",
            weighted.amount,
            options.tick
        );
        assert!(
            weighted.amount >= options.min_amount,
            "{} below minimum {} for {context}",
            weighted.amount,
            options.min_amount
        );
    }
    assert!(result.rse >= 0.0 && result.rse.is_finite());
}

// =============================================================================
// PROPERTY: EXACT TOTAL, TICKS AND MINIMUM
// =============================================================================

#[test]
fn property_invariants_with_random_targets() {
    for seed in 0..10 {
        for size in [1, 5, 12, 30] {
            let instruments = generate_instruments(size, seed);
            let constraints = generate_constraints(&instruments, seed);
            let base = generate_options(size, seed);

            for algorithm in ApportionmentMethod::ALL {
                let options = base.clone().with_algorithm(algorithm);
                let result = compute(&instruments, &constraints, &options).unwrap();
                let context = format!("seed={seed}, size={size}, {algorithm}");
                check_invariants(&result, &options, &context);
                assert_eq!(result.weighted_instruments.len(), size);
            }
        }
    }
}

#[test]
fn property_invariants_with_equal_weight_targets() {
    for seed in 0..10 {
        for size in [3, 8, 20, 40] {
            let instruments = generate_instruments(size, seed);
            let constraints = ConstraintSet::equal_weight(&instruments, &Dimension::ALL);
            let options = generate_options(size, seed);

            let result = compute(&instruments, &constraints, &options).unwrap();
            check_invariants(&result, &options, &format!("seed={seed}, size={size}"));
        }
    }
}

#[test]
fn property_equal_weight_targets_are_met_within_rounding() {
    // Equal weights satisfy their own proportions, including dimensions that leave
    // instruments unclassified.
    for seed in 0..10 {
        for size in [4, 10, 25] {
            let instruments = generate_instruments(size, seed);
            let constraints = ConstraintSet::equal_weight(&instruments, &Dimension::ALL);
            let options = AllocationOptions::new(dec!(1000));

            let result = compute(&instruments, &constraints, &options).unwrap();
            assert!(
                result.rse < 1e-9,
                "rse {} for seed={seed}, size={size}",
                result.rse
            );

            for (category, proportion) in constraints.iter() {
                let members: Vec<usize> = (0..size)
                    .filter(|&j| belongs_to(&instruments[j], category))
                    .collect();
                let allocated: Decimal = members
                    .iter()
                    .map(|&j| result.weighted_instruments[j].amount)
                    .sum();
                let target = proportion * 1000.0;
                let slack = (members.len() + 1) as f64;
                let allocated = allocated.to_f64().unwrap();
                assert!(
                    (allocated - target).abs() <= slack,
                    "{category}: {allocated} vs {target} for seed={seed}, size={size}"
                );
            }
        }
    }
}

// =============================================================================
// PROPERTY: CONSISTENT CONSTRAINTS ARE MET EXACTLY
// =============================================================================

#[test]
fn property_known_allocation_is_reproduced_exactly() {
    for seed in 0..40 {
        let known = generate_known_allocation(seed);
        for algorithm in ApportionmentMethod::ALL {
            let options = known.options.clone().with_algorithm(algorithm);
            let result = compute(&known.instruments, &known.constraints, &options).unwrap();
            let context = format!("seed={seed}, {algorithm}");

            check_invariants(&result, &options, &context);
            assert_eq!(result.rse, 0.0, "rse for {context}");
            for (&category, &amount) in &known.expected {
                let allocated: Decimal = known
                    .instruments
                    .iter()
                    .zip(&result.weighted_instruments)
                    .filter(|(instrument, _)| belongs_to(instrument, category))
                    .map(|(_, weighted)| weighted.amount)
                    .sum();
                assert_eq!(allocated, amount, "{category} for {context}");
            }
        }
    }
}

// =============================================================================
// PROPERTY: DETERMINISM
// =============================================================================

#[test]
fn property_deterministic() {
    for seed in 0..5 {
        let instruments = generate_instruments(15, seed);
        let constraints = generate_constraints(&instruments, seed);
        let options = generate_options(15, seed);

        let first = compute(&instruments, &constraints, &options).unwrap();
        let second = compute(&instruments, &constraints, &options).unwrap();
        assert_eq!(first, second, "seed={seed}");
    }
}

#[test]
fn property_methods_agree_on_aggregates() {
    for seed in 0..10 {
        let instruments = generate_instruments(20, seed);
        let constraints = generate_constraints(&instruments, seed);
        let base = generate_options(20, seed);

        let divisor = compute(
            &instruments,
            &constraints,
            &base.clone().with_algorithm(ApportionmentMethod::SainteLague),
        )
        .unwrap();
        let remainder = compute(
            &instruments,
            &constraints,
            &base.clone().with_algorithm(ApportionmentMethod::HareNiemeyer),
        )
        .unwrap();

        assert_eq!(divisor.total(), remainder.total());
        assert_eq!(divisor.rse, remainder.rse);
        // Both round the same weights, so no amount differs by more than one tick
        // beyond what the minimum repair moves.
        if divisor.diagnostics.floor_repairs == 0 && remainder.diagnostics.floor_repairs == 0 {
            for (d, r) in divisor
                .weighted_instruments
                .iter()
                .zip(&remainder.weighted_instruments)
            {
                assert!(
                    (d.amount - r.amount).abs() <= base.tick * Decimal::from(2),
                    "seed={seed}: {} vs {} for {}",
                    d.amount,
                    r.amount,
                    d.id
                );
            }
        }
    }
}
