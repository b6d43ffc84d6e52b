//! Progressive access gate.
//!
//! A session advances through login → sector selection → account-type
//! selection → dashboard. Every navigation is checked against that progress
//! and either allowed or redirected to the next step the user has not
//! completed yet.

pub mod catalog;
pub mod error;
pub mod guard;
pub mod model;
pub mod persisted;
pub mod resolver;
pub mod routes;
pub mod store;

pub use error::OnboardingError;
pub use guard::{Guard, GuardOutcome};
pub use model::{AccountTypeId, OnboardingProgress, SectorId, Stage};
pub use resolver::{resolve, Decision};
pub use routes::{RouteDescriptor, RouteKind, RouteTable, RouteTableError, StageAnchors};
pub use store::{MemoryStorage, ProgressStorage, SessionStore, StorageError, SubscriptionId};
