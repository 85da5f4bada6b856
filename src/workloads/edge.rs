//! Sobel edge detection on a synthetic RGB image.

use std::convert::Infallible;

use rand::Rng;

use super::SyntheticInput;
use crate::numeric::Numeric;
use crate::types::ResultVector;
use crate::workload::Workload;

/// Luminance weights, pre-divided by the channel range.
const LUMA: [f64; 3] = [0.30 / 256.0, 0.59 / 256.0, 0.11 / 256.0];

const KERNEL_X: [[f64; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const KERNEL_Y: [[f64; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Gradient magnitude of a `size x size` image, written back as grey pixels.
///
/// Pixels outside the image read as zero. Output holds three equal channel
/// values per pixel, row by row.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeDetect;

impl EdgeDetect {
    /// Source image as `[r, g, b]` pixels, row by row.
    ///
    /// A diagonal ramp with noise, so edges exist but are not uniform.
    pub fn image(input: &SyntheticInput) -> Vec<[u8; 3]> {
        let mut rng = input.rng();
        let side = input.size.max(1);
        (0..input.size * input.size)
            .map(|i| {
                let (row, col) = (i / side, i % side);
                let ramp = ((row + col) * 255 / (2 * side)) as i32;
                std::array::from_fn(|_| (ramp + rng.random_range(-24..=24)).clamp(0, 255) as u8)
            })
            .collect()
    }
}

fn grayscale<R: Numeric>(image: &[[u8; 3]]) -> Vec<R> {
    let weights = LUMA.map(R::from_f64);
    image
        .iter()
        .map(|px| {
            let [r, g, b] = px.map(|c| R::from_f64(f64::from(c)));
            weights[0] * r + weights[1] * g + weights[2] * b
        })
        .collect()
}

fn window<R: Numeric>(grey: &[R], side: usize, row: usize, col: usize) -> [[R; 3]; 3] {
    std::array::from_fn(|dy| {
        std::array::from_fn(|dx| {
            let (y, x) = ((row + dy).wrapping_sub(1), (col + dx).wrapping_sub(1));
            if y < side && x < side {
                grey[y * side + x]
            } else {
                R::from_f64(0.0)
            }
        })
    })
}

fn convolve<R: Numeric>(w: &[[R; 3]; 3], kernel: &[[R; 3]; 3]) -> R {
    let mut acc = R::from_f64(0.0);
    for (w_row, k_row) in w.iter().zip(kernel) {
        for (&v, &k) in w_row.iter().zip(k_row) {
            acc = acc + v * k;
        }
    }
    acc
}

impl Workload for EdgeDetect {
    type Param = SyntheticInput;
    type Error = Infallible;

    fn name(&self) -> &str {
        "edge-detect"
    }

    fn run<R: Numeric>(&self, input: &SyntheticInput) -> Result<ResultVector, Infallible> {
        let side = input.size;
        let grey = grayscale::<R>(&Self::image(input));

        let kx = KERNEL_X.map(|row| row.map(R::from_f64));
        let ky = KERNEL_Y.map(|row| row.map(R::from_f64));
        let scale = R::from_f64(256.0 * 256.0 * 2.0).sqrt();
        let ceiling = R::from_f64(256.0) / scale;
        let saturated = R::from_f64(255.0) / scale;

        let mut out = Vec::with_capacity(side * side * 3);
        for row in 0..side {
            for col in 0..side {
                let w = window(&grey, side, row, col);
                let gx = convolve(&w, &kx);
                let gy = convolve(&w, &ky);
                let mut s = (gx.square() + gy.square()).sqrt();
                if s >= ceiling {
                    s = saturated;
                }
                let level = (s * scale).to_i64() as i32;
                out.extend_from_slice(&[level; 3]);
            }
        }
        Ok(ResultVector::Triplet(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_image_has_no_interior_edges() {
        let side = 5;
        let grey = vec![0.5f64; side * side];
        let kx = KERNEL_X;
        let w = window(&grey, side, 2, 2);
        assert_eq!(convolve(&w, &kx), 0.0);

        let corner = window(&grey, side, 0, 0);
        assert_eq!(corner[0], [0.0; 3]);
        assert_eq!(corner[1][1], 0.5);
    }

    #[test]
    fn test_output_shape_and_range() {
        let input = SyntheticInput::new(16, 5);
        let ResultVector::Triplet(out) = EdgeDetect.run::<f64>(&input).unwrap() else {
            panic!("expected triplet output");
        };
        assert_eq!(out.len(), 16 * 16 * 3);
        assert!(out.iter().all(|&v| (0..=255).contains(&v)));
        for px in out.chunks_exact(3) {
            assert!(px[0] == px[1] && px[1] == px[2]);
        }
    }

    #[test]
    fn test_image_deterministic() {
        let input = SyntheticInput::new(8, 1);
        assert_eq!(EdgeDetect::image(&input), EdgeDetect::image(&input));
        assert_eq!(EdgeDetect::image(&input).len(), 64);
    }
}
