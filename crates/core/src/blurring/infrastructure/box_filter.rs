use crate::blurring::domain::pixel_filter::PixelFilter;
use crate::shared::constants::CHANNELS;

/// Separable box blur: a horizontal running average followed by a vertical
/// one, each over `2 * radius + 1` clamp-to-edge samples with
/// `radius = intensity`.
///
/// Edge samples are replicated rather than dropped, so the divisor is always
/// the full window size. Channel averages truncate toward zero, where the
/// browser canvas version of this blur rounds to nearest (so `(255 + 0) / 2`
/// is 127 here and 128 there).
pub struct BoxFilter;

impl BoxFilter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BoxFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelFilter for BoxFilter {
    fn apply(&self, src: &[u8], width: usize, height: usize, intensity: i32) -> Vec<u8> {
        if intensity < 1 || width == 0 || height == 0 {
            return src.to_vec();
        }
        let radius = intensity as usize;

        // Horizontal pass: src → horizontal. The vertical pass then reads
        // from this snapshot, never from the buffer it writes.
        let mut horizontal = vec![0u8; src.len()];
        box_pass(src, &mut horizontal, width, height, radius, Axis::Horizontal);

        let mut out = vec![0u8; src.len()];
        box_pass(&horizontal, &mut out, width, height, radius, Axis::Vertical);
        out
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Axis {
    Horizontal,
    Vertical,
}

/// One 1-D box average along `axis`, reading `src` and writing `dst`.
///
/// Window samples that fall outside the line are clamped to the first or
/// last pixel. Those repeats are added as a multiple of the edge value, so
/// the cost per pixel is bounded by the line length, not the radius.
pub(crate) fn box_pass(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    radius: usize,
    axis: Axis,
) {
    let window = 2 * radius as u64 + 1;
    let last = match axis {
        Axis::Horizontal => width - 1,
        Axis::Vertical => height - 1,
    };
    let index = |x: usize, y: usize, s: usize| match axis {
        Axis::Horizontal => (y * width + s) * CHANNELS,
        Axis::Vertical => (s * width + x) * CHANNELS,
    };

    for y in 0..height {
        for x in 0..width {
            let pos = match axis {
                Axis::Horizontal => x,
                Axis::Vertical => y,
            };
            // Window is pos - radius ..= pos + radius.
            let below = radius.saturating_sub(pos) as u64;
            let above = pos.saturating_add(radius).saturating_sub(last) as u64;
            let lo = pos.saturating_sub(radius);
            let hi = pos.saturating_add(radius).min(last);

            let mut sum = [0u64; CHANNELS];
            for s in lo..=hi {
                let idx = index(x, y, s);
                for (c, acc) in sum.iter_mut().enumerate() {
                    *acc += src[idx + c] as u64;
                }
            }
            let first_idx = index(x, y, 0);
            let last_idx = index(x, y, last);
            for (c, acc) in sum.iter_mut().enumerate() {
                *acc += below * src[first_idx + c] as u64 + above * src[last_idx + c] as u64;
            }

            let idx = (y * width + x) * CHANNELS;
            for (c, acc) in sum.iter().enumerate() {
                dst[idx + c] = (acc / window) as u8;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn solid(width: usize, height: usize, rgba: [u8; 4]) -> Vec<u8> {
        rgba.iter()
            .copied()
            .cycle()
            .take(width * height * CHANNELS)
            .collect()
    }

    fn pixel(data: &[u8], width: usize, x: usize, y: usize) -> [u8; 4] {
        let i = (y * width + x) * CHANNELS;
        [data[i], data[i + 1], data[i + 2], data[i + 3]]
    }

    #[test]
    fn test_zero_intensity_is_verbatim_copy() {
        let src: Vec<u8> = (0..(5 * 3 * 4)).map(|v| v as u8).collect();
        assert_eq!(BoxFilter::new().apply(&src, 5, 3, 0), src);
    }

    #[test]
    fn test_negative_intensity_is_verbatim_copy() {
        let src: Vec<u8> = (0..(4 * 4 * 4)).map(|v| (v * 7) as u8).collect();
        assert_eq!(BoxFilter::new().apply(&src, 4, 4, -5), src);
    }

    #[test]
    fn test_uniform_image_unchanged() {
        let src = solid(10, 8, [37, 140, 201, 255]);
        assert_eq!(BoxFilter::new().apply(&src, 10, 8, 3), src);
    }

    #[test]
    fn test_all_black_4x4_stays_black() {
        let src = solid(4, 4, [0, 0, 0, 0]);
        let out = BoxFilter::new().apply(&src, 4, 4, 2);
        assert!(out.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_horizontal_pass_on_single_column_is_identity() {
        let src: Vec<u8> = (0..(6 * 4)).map(|v| (v * 11) as u8).collect();
        let mut dst = vec![0u8; src.len()];
        box_pass(&src, &mut dst, 1, 6, 4, Axis::Horizontal);
        assert_eq!(dst, src);
    }

    #[test]
    fn test_vertical_pass_on_single_row_is_identity() {
        let src: Vec<u8> = (0..(6 * 4)).map(|v| (v * 13) as u8).collect();
        let mut dst = vec![0u8; src.len()];
        box_pass(&src, &mut dst, 6, 1, 2, Axis::Vertical);
        assert_eq!(dst, src);
    }

    #[test]
    fn test_horizontal_pass_replicates_edge_pixels() {
        // Row: 0, 90, 180 in the red channel; radius 1
        let mut src = solid(3, 1, [0, 0, 0, 255]);
        src[4] = 90;
        src[8] = 180;
        let mut dst = vec![0u8; src.len()];
        box_pass(&src, &mut dst, 3, 1, 1, Axis::Horizontal);
        // x=0: (0 + 0 + 90) / 3, left sample clamped to x=0
        assert_eq!(pixel(&dst, 3, 0, 0), [30, 0, 0, 255]);
        assert_eq!(pixel(&dst, 3, 1, 0), [90, 0, 0, 255]);
        // x=2: (90 + 180 + 180) / 3
        assert_eq!(pixel(&dst, 3, 2, 0), [150, 0, 0, 255]);
    }

    #[test]
    fn test_average_truncates_toward_zero() {
        // (0 + 0 + 100) / 3 = 33.33
        let mut src = solid(3, 1, [0, 0, 0, 0]);
        src[8] = 100;
        let mut dst = vec![0u8; src.len()];
        box_pass(&src, &mut dst, 3, 1, 1, Axis::Horizontal);
        assert_eq!(dst[4], 33);
    }

    #[test]
    fn test_bright_pixel_spreads_in_both_directions() {
        let (w, h) = (9, 9);
        let mut src = solid(w, h, [0, 0, 0, 255]);
        let center = (4 * w + 4) * CHANNELS;
        src[center] = 255;

        let out = BoxFilter::new().apply(&src, w, h, 1);
        // 255 / 3 / 3 with truncation at each pass
        assert_eq!(pixel(&out, w, 4, 4)[0], 28);
        assert!(pixel(&out, w, 3, 3)[0] > 0);
        assert!(pixel(&out, w, 5, 5)[0] > 0);
        assert_eq!(pixel(&out, w, 2, 4)[0], 0);
        assert_eq!(pixel(&out, w, 4, 6)[0], 0);
    }

    #[test]
    fn test_radius_larger_than_image() {
        let mut src = solid(2, 2, [0, 0, 0, 255]);
        src[0] = 200;
        let out = BoxFilter::new().apply(&src, 2, 2, 30);
        assert_eq!(out.len(), src.len());
        // Every output pixel sees the same clamped samples per row/column
        assert!(out.chunks(4).all(|p| p[3] == 255));
    }

    #[rstest]
    #[case::large(9_000_000)]
    #[case::max(i32::MAX)]
    fn test_huge_intensity_on_single_pixel(#[case] intensity: i32) {
        let src = vec![255, 128, 7, 255];
        assert_eq!(BoxFilter::new().apply(&src, 1, 1, intensity), src);
    }

    #[test]
    fn test_huge_intensity_averages_whole_line_with_edge_weight() {
        // Row 0, 90, 180 with a radius far beyond the row: nearly every
        // sample is a clamped edge, so outputs sit at (0 + 180) / 2.
        let mut src = solid(3, 1, [0, 0, 0, 255]);
        src[4] = 90;
        src[8] = 180;
        let out = BoxFilter::new().apply(&src, 3, 1, 1_000_000);
        // x=0: (999_998 * 180 + 270) / 2_000_001, just under 90
        assert_eq!(pixel(&out, 3, 0, 0), [89, 0, 0, 255]);
        assert_eq!(pixel(&out, 3, 1, 0), [90, 0, 0, 255]);
        assert_eq!(pixel(&out, 3, 2, 0), [90, 0, 0, 255]);
    }

    #[test]
    fn test_source_not_mutated() {
        let mut src = solid(5, 5, [10, 20, 30, 40]);
        src[0] = 250;
        let copy = src.clone();
        let _ = BoxFilter::new().apply(&src, 5, 5, 2);
        assert_eq!(src, copy);
    }
}
