pub mod box_filter;
pub mod filter_factory;
pub mod gaussian;
pub mod motion_filter;
