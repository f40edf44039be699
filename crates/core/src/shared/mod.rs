pub mod constants;
pub mod intensity;
pub mod pixel_buffer;
