//! Compare f32 and a logarithmic number system against f64 on the built-in
//! workloads.
//!
//! Run with `RUST_LOG=diffbench=debug` to see per-run timings, and
//! `DIFFBENCH_RESOLUTION=ns` for finer timing.

use std::error::Error;

use diffbench::numeric::equivalence;
use diffbench::output::format_report;
use diffbench::workloads::{EdgeDetect, InverseKinematics, Saxpy, SyntheticInput, TriangleHit};
use diffbench::{DiffOracle, Log23, Numeric, Workload};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    println!("diffbench comparison example\n");

    let equivalence = equivalence::check::<f64, Log23>();
    println!(
        "{} vs {}: {} of {} operation checks agree\n",
        equivalence.reference,
        equivalence.candidate,
        equivalence.checks - equivalence.failures.len(),
        equivalence.checks
    );

    let oracle = DiffOracle::from_env();
    let vectors = SyntheticInput::new(200_000, 42);
    let image = SyntheticInput::new(256, 42);

    run_all::<f32>(&oracle, &vectors, &image)?;
    run_all::<Log23>(&oracle, &vectors, &image)?;

    Ok(())
}

fn run_all<C: Numeric>(
    oracle: &DiffOracle,
    vectors: &SyntheticInput,
    image: &SyntheticInput,
) -> Result<(), Box<dyn Error>> {
    show::<C, _>(oracle, &Saxpy, vectors)?;
    show::<C, _>(oracle, &InverseKinematics, vectors)?;
    show::<C, _>(oracle, &TriangleHit, vectors)?;
    show::<C, _>(oracle, &EdgeDetect, image)?;
    Ok(())
}

fn show<C, W>(oracle: &DiffOracle, workload: &W, input: &W::Param) -> Result<(), Box<dyn Error>>
where
    C: Numeric,
    W: Workload,
{
    let report = oracle.run::<f64, C, W>(workload, input)?;
    println!("{}", format_report(&report));
    Ok(())
}
