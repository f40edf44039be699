use crate::blurring::domain::pixel_filter::PixelFilter;
use crate::shared::constants::CHANNELS;

/// Kernel reach in standard deviations; beyond 3σ the weights are negligible.
const SIGMA_REACH: f64 = 3.0;

/// Separable Gaussian blur with `sigma = intensity` pixels.
///
/// Both passes use clamp-to-edge sampling and f32 accumulation. Each pass
/// rounds back to 8-bit channels before the next one reads it. The kernel
/// radius never exceeds the longer image side, since taps past it would
/// only sample edge pixels again.
pub struct GaussianFilter;

impl GaussianFilter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GaussianFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelFilter for GaussianFilter {
    fn apply(&self, src: &[u8], width: usize, height: usize, intensity: i32) -> Vec<u8> {
        if intensity < 1 || width == 0 || height == 0 {
            return src.to_vec();
        }
        let kernel = gaussian_kernel_1d(intensity as f64, width.max(height));
        separable_gaussian_blur(src, width, height, &kernel)
    }
}

/// Kernel radius for a given sigma: `ceil(3σ)` capped at `max_radius`, at least 1.
pub fn kernel_radius(sigma: f64, max_radius: usize) -> usize {
    ((sigma * SIGMA_REACH).ceil() as usize).min(max_radius).max(1)
}

/// Precompute a normalized 1D Gaussian kernel of `2 * kernel_radius(sigma, max_radius) + 1` taps.
pub fn gaussian_kernel_1d(sigma: f64, max_radius: usize) -> Vec<f32> {
    debug_assert!(sigma > 0.0);
    let radius = kernel_radius(sigma, max_radius) as f64;
    let mut kernel_f64: Vec<f64> = (0..(2 * radius as usize + 1))
        .map(|i| {
            let x = i as f64 - radius;
            (-x * x / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let sum: f64 = kernel_f64.iter().sum();
    for v in &mut kernel_f64 {
        *v /= sum;
    }
    kernel_f64.iter().map(|&v| v as f32).collect()
}

/// Apply a separable Gaussian blur to an RGBA buffer with a pre-computed kernel.
///
/// The horizontal pass writes an 8-bit snapshot that the vertical pass reads;
/// `src` is left untouched.
pub fn separable_gaussian_blur(src: &[u8], width: usize, height: usize, kernel: &[f32]) -> Vec<u8> {
    let kernel_size = kernel.len();
    if kernel_size <= 1 || width == 0 || height == 0 {
        return src.to_vec();
    }
    let half = (kernel_size / 2) as isize;

    // Horizontal pass: src → temp
    let mut temp = vec![0u8; src.len()];
    for y in 0..height {
        for x in 0..width {
            for c in 0..CHANNELS {
                let mut sum = 0.0f32;
                for (k, &w) in kernel.iter().enumerate() {
                    let sx = (x as isize + k as isize - half).clamp(0, (width - 1) as isize) as usize;
                    sum += src[(y * width + sx) * CHANNELS + c] as f32 * w;
                }
                temp[(y * width + x) * CHANNELS + c] = to_channel(sum);
            }
        }
    }

    // Vertical pass: temp → out
    let mut out = vec![0u8; src.len()];
    for y in 0..height {
        for x in 0..width {
            for c in 0..CHANNELS {
                let mut sum = 0.0f32;
                for (k, &w) in kernel.iter().enumerate() {
                    let sy = (y as isize + k as isize - half).clamp(0, (height - 1) as isize) as usize;
                    sum += temp[(sy * width + x) * CHANNELS + c] as f32 * w;
                }
                out[(y * width + x) * CHANNELS + c] = to_channel(sum);
            }
        }
    }
    out
}

fn to_channel(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    fn solid(width: usize, height: usize, rgba: [u8; 4]) -> Vec<u8> {
        rgba.iter()
            .copied()
            .cycle()
            .take(width * height * CHANNELS)
            .collect()
    }

    #[rstest]
    #[case(0.5)]
    #[case(1.0)]
    #[case(5.0)]
    #[case(30.0)]
    fn test_kernel_sums_to_one(#[case] sigma: f64) {
        let k = gaussian_kernel_1d(sigma, usize::MAX);
        let sum: f32 = k.iter().sum();
        assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-5);
    }

    #[rstest]
    #[case(1.0, 3)]
    #[case(5.0, 15)]
    #[case(0.1, 1)]
    fn test_kernel_length(#[case] sigma: f64, #[case] radius: usize) {
        assert_eq!(kernel_radius(sigma, usize::MAX), radius);
        assert_eq!(gaussian_kernel_1d(sigma, usize::MAX).len(), 2 * radius + 1);
    }

    #[test]
    fn test_kernel_is_symmetric() {
        let k = gaussian_kernel_1d(2.0, usize::MAX);
        for i in 0..k.len() / 2 {
            assert_abs_diff_eq!(k[i], k[k.len() - 1 - i], epsilon = 1e-7);
        }
    }

    #[test]
    fn test_kernel_center_is_largest() {
        let k = gaussian_kernel_1d(2.0, usize::MAX);
        let center = k[k.len() / 2];
        assert!(k.iter().all(|&v| center >= v));
    }

    #[test]
    fn test_blur_uniform_image_unchanged() {
        let src = solid(10, 10, [128, 64, 250, 255]);
        let out = GaussianFilter::new().apply(&src, 10, 10, 3);
        assert_eq!(out, src);
    }

    #[test]
    fn test_blur_modifies_high_contrast() {
        let mut src = solid(15, 15, [0, 0, 0, 255]);
        let cx = (7 * 15 + 7) * CHANNELS;
        src[cx] = 255;
        src[cx + 1] = 255;
        src[cx + 2] = 255;

        let out = GaussianFilter::new().apply(&src, 15, 15, 1);

        assert!(out[cx] < 255);
        let neighbor = (7 * 15 + 8) * CHANNELS;
        assert!(out[neighbor] > 0);
        // Alpha was uniform and stays that way
        assert!(out.chunks(CHANNELS).all(|p| p[3] == 255));
    }

    #[test]
    fn test_zero_intensity_is_identity() {
        let src: Vec<u8> = (0..(5 * 5 * 4)).map(|v| (v * 3) as u8).collect();
        assert_eq!(GaussianFilter::new().apply(&src, 5, 5, 0), src);
    }

    #[test]
    fn test_single_pixel_image_unchanged() {
        let src = vec![10, 20, 30, 40];
        assert_eq!(GaussianFilter::new().apply(&src, 1, 1, 8), src);
    }

    #[rstest]
    #[case::sigma_far_beyond_image(1000.0, 8, 8)]
    #[case::sigma_max(i32::MAX as f64, 1, 1)]
    #[case::within_cap(2.0, 100, 6)]
    fn test_kernel_radius_capped(#[case] sigma: f64, #[case] max: usize, #[case] radius: usize) {
        assert_eq!(kernel_radius(sigma, max), radius);
    }

    #[test]
    fn test_capped_kernel_sums_to_one() {
        let k = gaussian_kernel_1d(500.0, 4);
        assert_eq!(k.len(), 9);
        assert_abs_diff_eq!(k.iter().sum::<f32>(), 1.0, epsilon = 1e-5);
    }

    #[rstest]
    #[case::large(9_000_000)]
    #[case::max(i32::MAX)]
    fn test_huge_intensity_on_single_pixel(#[case] intensity: i32) {
        let src = vec![200, 100, 50, 255];
        assert_eq!(GaussianFilter::new().apply(&src, 1, 1, intensity), src);
    }

    #[test]
    fn test_huge_intensity_keeps_uniform_image() {
        let src = solid(6, 4, [30, 60, 90, 255]);
        assert_eq!(GaussianFilter::new().apply(&src, 6, 4, i32::MAX), src);
    }

    #[test]
    fn test_blur_is_deterministic() {
        let src: Vec<u8> = (0..(9 * 6 * 4)).map(|v| (v * 41 % 256) as u8).collect();
        let filter = GaussianFilter::new();
        assert_eq!(filter.apply(&src, 9, 6, 2), filter.apply(&src, 9, 6, 2));
    }
}
