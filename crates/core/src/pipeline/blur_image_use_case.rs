use std::path::Path;
use std::time::Instant;

use crate::blurring::engine::process_buffer;
use crate::imaging::domain::image_reader::ImageReader;
use crate::imaging::domain::image_writer::ImageWriter;
use crate::shared::pixel_buffer::PixelBuffer;

use super::blur_settings::BlurSettings;

/// Single-image blurring pipeline: read → blur → write.
pub struct BlurImageUseCase {
    reader: Box<dyn ImageReader>,
    writer: Box<dyn ImageWriter>,
    settings: BlurSettings,
}

impl BlurImageUseCase {
    pub fn new(
        reader: Box<dyn ImageReader>,
        writer: Box<dyn ImageWriter>,
        settings: BlurSettings,
    ) -> Self {
        Self {
            reader,
            writer,
            settings,
        }
    }

    pub fn settings(&self) -> BlurSettings {
        self.settings
    }

    /// Reads the input image, blurs it with the configured settings, and
    /// writes the result. Returns the blurred buffer.
    pub fn execute(
        &self,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<PixelBuffer, Box<dyn std::error::Error>> {
        let BlurSettings {
            algorithm,
            intensity,
        } = self.settings;

        let start = Instant::now();
        let source = self.reader.read(input_path)?;
        log::debug!(
            "Read {}x{} image in {:.1}ms",
            source.width(),
            source.height(),
            start.elapsed().as_secs_f64() * 1000.0
        );

        log::info!("Applying {algorithm} (intensity={intensity})");
        let start = Instant::now();
        let intensity = i32::try_from(intensity).unwrap_or(i32::MAX);
        let blurred = process_buffer(&source, algorithm, intensity)?;
        log::debug!("Blur took {:.1}ms", start.elapsed().as_secs_f64() * 1000.0);

        self.writer.write(output_path, &blurred)?;
        Ok(blurred)
    }
}
