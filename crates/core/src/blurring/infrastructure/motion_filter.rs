use crate::blurring::domain::pixel_filter::PixelFilter;
use crate::shared::constants::{CHANNELS, MOTION_MAX_RANGE};

/// Horizontal motion blur that averages each pixel with the pixels to its
/// right only.
///
/// The look-ahead spans `min(intensity * 2, MOTION_MAX_RANGE)` samples
/// starting at the pixel itself, clamped to the last column. The rightmost
/// column therefore always keeps its original value. Averages truncate, like
/// [`BoxFilter`](super::box_filter::BoxFilter).
pub struct MotionFilter;

impl MotionFilter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MotionFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of samples averaged for a given intensity.
pub fn motion_range(intensity: i32) -> usize {
    if intensity < 1 {
        return 0;
    }
    (intensity as usize).saturating_mul(2).min(MOTION_MAX_RANGE)
}

impl PixelFilter for MotionFilter {
    fn apply(&self, src: &[u8], width: usize, height: usize, intensity: i32) -> Vec<u8> {
        let range = motion_range(intensity);
        if range == 0 || width == 0 || height == 0 {
            return src.to_vec();
        }

        let last = width - 1;
        let mut out = vec![0u8; src.len()];
        for y in 0..height {
            let row = y * width;
            for x in 0..width {
                let mut sum = [0u32; CHANNELS];
                for k in 0..range {
                    let idx = (row + (x + k).min(last)) * CHANNELS;
                    for (c, acc) in sum.iter_mut().enumerate() {
                        *acc += src[idx + c] as u32;
                    }
                }
                let idx = (row + x) * CHANNELS;
                for (c, acc) in sum.iter().enumerate() {
                    out[idx + c] = (acc / range as u32) as u8;
                }
            }
        }
        out
    }
}
