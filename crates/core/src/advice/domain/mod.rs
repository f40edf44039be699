pub mod blur_advisor;
pub mod suggestion;
