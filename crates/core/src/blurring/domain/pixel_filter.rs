/// Domain interface for a whole-image blur over a tightly packed RGBA buffer.
///
/// Implementations borrow `src` read-only and return a new buffer of the
/// same length. The caller guarantees `src.len() == width * height * 4`.
pub trait PixelFilter: Send + Sync {
    fn apply(&self, src: &[u8], width: usize, height: usize, intensity: i32) -> Vec<u8>;
}
