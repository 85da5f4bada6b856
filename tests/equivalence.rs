//! Representation equivalence against the f64 reference.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use diffbench::numeric::equivalence::{approx_equal, check, check_values};
use diffbench::{Log16, Log23, Numeric};

#[test]
fn f32_passes_against_f64() {
    let report = check::<f64, f32>();
    assert!(report.passed(), "{:#?}", report.failures);
    assert_eq!(report.reference, "f64");
    assert_eq!(report.candidate, "f32");
}

#[test]
fn log23_passes_against_f64() {
    let report = check::<f64, Log23>();
    assert!(report.passed(), "{:#?}", report.failures);
    assert_eq!(report.candidate, "log<23>");
}

#[test]
fn log23_passes_on_random_values() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0x5eed);
    let values: Vec<f64> = (0..24)
        .map(|_| {
            let magnitude = 10f64.powf(rng.random_range(-3.0..4.0));
            if rng.random_bool(0.5) {
                -magnitude
            } else {
                magnitude
            }
        })
        .collect();

    let report = check_values::<f64, Log23>(&values);
    let real_failures: Vec<_> = report
        .failures
        .iter()
        // Near-cancelling sums and truncation next to an integer are
        // sensitive to the last bit.
        .filter(|f| !matches!(f.operation, "add" | "sub" | "to_i64"))
        .collect();
    assert!(real_failures.is_empty(), "{:#?}", real_failures);
}

fn assert_round_trip<R: Numeric>(seed: u64) {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    for _ in 0..10_000 {
        let exponent = rng.random_range(-200.0..200.0);
        let sign = if rng.random_bool(0.5) { -1.0 } else { 1.0 };
        let value: f64 = sign * 2f64.powf(exponent);

        let back = R::from_f64(value).to_f64();
        assert!(
            approx_equal(value, back),
            "{} round trip of {} gave {}",
            R::name(),
            value,
            back
        );
    }
}

#[test]
fn log_round_trip_within_tolerance() {
    assert_round_trip::<Log23>(1);
    assert_round_trip::<Log16>(2);
}

#[test]
fn nan_round_trips_to_nan() {
    assert!(Log23::from_f64(f64::NAN).to_f64().is_nan());
    assert!(Log16::from_f64(f64::NAN).to_f64().is_nan());
    assert!(f32::from_f64(f64::NAN).to_f64().is_nan());
}

#[test]
fn log_comparisons_follow_f64_order() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
    for _ in 0..10_000 {
        let a: f64 = rng.random_range(-1e6..1e6);
        let b: f64 = rng.random_range(-1e6..1e6);
        // Values closer than the representation's resolution may collapse.
        if ((a - b) / a.abs().max(b.abs())).abs() < 1e-5 {
            continue;
        }
        let (la, lb) = (Log23::from_f64(a), Log23::from_f64(b));
        assert_eq!(a < b, la < lb, "{} < {}", a, b);
        assert_eq!(a == b, la == lb);
    }
}

fn assert_range_edges<R: Numeric>() {
    let big = R::from_f64(1e300);
    let tiny = R::from_f64(1e-300);

    assert!((big * big).is_positive_infinite(), "{} overflow", R::name());
    assert!((-big * big).is_negative_infinite(), "{} overflow", R::name());
    assert!((big / tiny).is_infinite());
    assert!((big * big + R::from_f64(0.5)).is_positive_infinite());

    let vanished = tiny * tiny;
    assert!(vanished.is_zero(), "{} underflow", R::name());
    assert_eq!(vanished.to_f64(), 0.0);

    assert!(approx_equal(1e300, (big + tiny).to_f64()));
    assert!(approx_equal(-1e300, (tiny - big).to_f64()));
    assert!((big - big).is_zero());
}

#[test]
fn values_past_the_f64_range_saturate_like_f64() {
    assert_range_edges::<f64>();
    assert_range_edges::<Log23>();
    assert_range_edges::<Log16>();
}
