//! Page category constants.
//!
//! Every page rendered in the app declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"employees--list"`)
//!   - `data-page-category` with one of the constants below

/// List of records: table with filters.
pub const PAGE_CAT_LIST: &str = "list";

/// Analytical dashboard / overview.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Onboarding step (sector, account type).
pub const PAGE_CAT_ONBOARDING: &str = "onboarding";

/// System page: not found, loading placeholders.
pub const PAGE_CAT_SYSTEM: &str = "system";
