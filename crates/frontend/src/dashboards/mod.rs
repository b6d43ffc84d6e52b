//! Dashboard content pages, reachable once onboarding is complete.

pub mod overview;
pub mod records;
pub mod registry;

pub use registry::{PAGE_MODULES, OVERVIEW};
