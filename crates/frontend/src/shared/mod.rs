pub mod config;
pub mod icons;
pub mod page_frame;
pub mod page_loader;
pub mod page_standard;
