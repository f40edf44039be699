use crate::blurring::domain::blur_algorithm::BlurAlgorithm;
use crate::blurring::domain::pixel_filter::PixelFilter;

use super::box_filter::BoxFilter;
use super::gaussian::GaussianFilter;
use super::motion_filter::MotionFilter;

/// Returns the filter implementation for `algorithm`.
///
/// The match is exhaustive, so a new [`BlurAlgorithm`] variant does not
/// compile until it has a filter here.
pub fn filter_for(algorithm: BlurAlgorithm) -> Box<dyn PixelFilter> {
    match algorithm {
        BlurAlgorithm::Gaussian => Box::new(GaussianFilter::new()),
        BlurAlgorithm::Box => Box::new(BoxFilter::new()),
        BlurAlgorithm::Motion => Box::new(MotionFilter::new()),
    }
}
