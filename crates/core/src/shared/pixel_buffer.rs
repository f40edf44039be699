use crate::blurring::domain::blur_error::BlurError;
use crate::shared::constants::CHANNELS;

/// An owned RGBA image: `width * height` pixels of four 8-bit channels,
/// stored row-major with no padding between rows.
///
/// The length invariant is checked once at construction, so filters can
/// index the data without re-validating.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Result<Self, BlurError> {
        check_shape(data.len(), width, height)?;
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// A buffer with every pixel set to `rgba`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let count = width as usize * height as usize;
        let data = rgba.iter().copied().cycle().take(count * CHANNELS).collect();
        Self {
            data,
            width,
            height,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the RGBA value at `(x, y)`.
    ///
    /// Panics if the coordinate lies outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

/// Fails with [`BlurError::InvalidBufferShape`] unless `len == width * height * 4`.
pub fn check_shape(len: usize, width: u32, height: u32) -> Result<(), BlurError> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS));
    match expected {
        Some(expected) if expected == len => Ok(()),
        expected => Err(BlurError::InvalidBufferShape {
            width,
            height,
            expected: expected.unwrap_or(usize::MAX),
            actual: len,
        }),
    }
}
