pub mod blur_image_use_case;
pub mod blur_settings;
