pub mod blur_algorithm;
pub mod blur_error;
pub mod pixel_filter;
