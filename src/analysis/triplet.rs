//! Euclidean distance between aligned three-channel samples.

use nalgebra::Vector3;

use crate::error::DegenerateInput;
use crate::result::TripletMetrics;

/// Squared Euclidean distance between two triples, exact in integer arithmetic.
pub fn triple_distance_squared(reference: [i32; 3], candidate: [i32; 3]) -> i128 {
    let r = Vector3::from(reference.map(i128::from));
    let c = Vector3::from(candidate.map(i128::from));
    let diff = r - c;
    diff.dot(&diff)
}

/// Euclidean distance between two triples.
pub fn triple_distance(reference: [i32; 3], candidate: [i32; 3]) -> f64 {
    (triple_distance_squared(reference, candidate) as f64).sqrt()
}

fn triple(chunk: &[i32]) -> [i32; 3] {
    [chunk[0], chunk[1], chunk[2]]
}

/// Squared distance of every aligned triple.
pub(crate) fn squared_distances(reference: &[i32], candidate: &[i32], parallel: bool) -> Vec<i128> {
    let distance = |(r, c): (&[i32], &[i32])| triple_distance_squared(triple(r), triple(c));

    #[cfg(feature = "parallel")]
    if parallel {
        use rayon::prelude::*;
        return crate::thread_pool::install(|| {
            reference
                .par_chunks_exact(3)
                .zip(candidate.par_chunks_exact(3))
                .map(distance)
                .collect()
        });
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    reference
        .chunks_exact(3)
        .zip(candidate.chunks_exact(3))
        .map(distance)
        .collect()
}

/// Metrics over equal-length slices whose length is a multiple of 3.
///
/// Mean and RMS are divided by the element count (three per triple).
pub fn triplet_metrics(reference: &[i32], candidate: &[i32], parallel: bool) -> TripletMetrics {
    let squared = squared_distances(reference, candidate, parallel);

    let mut max_distance = 0.0f64;
    let mut sum_distance = 0.0;
    let mut sum_squared = 0.0;
    for &sq in &squared {
        let sq = sq as f64;
        let distance = sq.sqrt();
        sum_squared += sq;
        sum_distance += distance;
        max_distance = max_distance.max(distance);
    }

    let elements = squared.len() * 3;
    let (mean_distance, rms_distance) = if elements == 0 {
        (Err(DegenerateInput::EmptyResult), Err(DegenerateInput::EmptyResult))
    } else {
        let n = elements as f64;
        (Ok(sum_distance / n), Ok((sum_squared / n).sqrt()))
    };

    TripletMetrics {
        triples: squared.len(),
        max_distance,
        mean_distance,
        rms_distance,
    }
}
