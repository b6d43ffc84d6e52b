use thiserror::Error;

use super::model::Stage;

/// Ошибки прогресса онбординга
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OnboardingError {
    /// An action was called out of order. Guarded UI never exposes such a
    /// sequence, so this is a caller bug rather than a user-facing failure.
    #[error("{action} is not allowed at stage {stage:?}")]
    PreconditionViolation { action: &'static str, stage: Stage },

    #[error("persisted progress is corrupt: {0}")]
    CorruptPersistedState(String),
}
