//! Route table: path → required onboarding stage.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::model::Stage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteKind {
    /// Requires the session to have reached `required_stage`.
    Protected,
    /// Meant for sessions that have *not* progressed past `required_stage`.
    Public,
    /// One of the onboarding screens; gated like `Protected`.
    OnboardingStep,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDescriptor {
    pub path: String,
    pub required_stage: Stage,
    pub kind: RouteKind,
}

impl RouteDescriptor {
    pub fn protected(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            required_stage: Stage::Onboarded,
            kind: RouteKind::Protected,
        }
    }

    pub fn public(path: impl Into<String>, anchor: Stage) -> Self {
        Self {
            path: path.into(),
            required_stage: anchor,
            kind: RouteKind::Public,
        }
    }

    pub fn onboarding_step(path: impl Into<String>, required_stage: Stage) -> Self {
        Self {
            path: path.into(),
            required_stage,
            kind: RouteKind::OnboardingStep,
        }
    }
}

/// Canonical path for each stage: the page where that stage is completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageAnchors {
    pub login: String,
    pub select_sector: String,
    pub select_account_type: String,
    pub dashboard: String,
}

impl Default for StageAnchors {
    fn default() -> Self {
        Self {
            login: "/login".to_string(),
            select_sector: "/select-sector".to_string(),
            select_account_type: "/select-account".to_string(),
            dashboard: "/dashboard".to_string(),
        }
    }
}

impl StageAnchors {
    pub fn canonical_path(&self, stage: Stage) -> &str {
        match stage {
            Stage::Anonymous => &self.login,
            Stage::SectorPending => &self.select_sector,
            Stage::AccountTypePending => &self.select_account_type,
            Stage::Onboarded => &self.dashboard,
        }
    }

    fn normalized(self) -> Self {
        let norm = |path: String| normalize_path(&path).to_string();
        Self {
            login: norm(self.login),
            select_sector: norm(self.select_sector),
            select_account_type: norm(self.select_account_type),
            dashboard: norm(self.dashboard),
        }
    }

    fn descriptors(&self) -> [RouteDescriptor; 4] {
        [
            RouteDescriptor::public(self.login.clone(), Stage::Anonymous),
            RouteDescriptor::onboarding_step(self.select_sector.clone(), Stage::SectorPending),
            RouteDescriptor::onboarding_step(
                self.select_account_type.clone(),
                Stage::AccountTypePending,
            ),
            RouteDescriptor::protected(self.dashboard.clone()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("route already registered: {0}")]
    DuplicatePath(String),

    #[error("route path must start with '/': {0:?}")]
    InvalidPath(String),

    #[error("path is a stage anchor and cannot be re-registered: {0}")]
    AnchorConflict(String),
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    anchors: StageAnchors,
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    /// Builds a table holding the four anchor routes.
    /// Anchors are stored normalised, so redirects and lookups agree.
    pub fn new(anchors: StageAnchors) -> Result<Self, RouteTableError> {
        let mut table = Self {
            anchors: anchors.normalized(),
            routes: Vec::new(),
        };
        for descriptor in table.anchors.descriptors() {
            table.insert(descriptor)?;
        }
        Ok(table)
    }

    pub fn anchors(&self) -> &StageAnchors {
        &self.anchors
    }

    pub fn canonical_path(&self, stage: Stage) -> &str {
        self.anchors.canonical_path(stage)
    }

    pub fn register(&mut self, descriptor: RouteDescriptor) -> Result<(), RouteTableError> {
        let path = normalize_path(&descriptor.path);
        if self
            .anchors
            .descriptors()
            .iter()
            .any(|a| normalize_path(&a.path) == path)
        {
            return Err(RouteTableError::AnchorConflict(path.to_string()));
        }
        self.insert(descriptor)
    }

    /// Descriptor for `path`; unknown paths get the strictest requirement.
    pub fn lookup(&self, path: &str) -> RouteDescriptor {
        let path = normalize_path(path);
        self.routes
            .iter()
            .find(|r| r.path == path)
            .cloned()
            .unwrap_or_else(|| RouteDescriptor::protected(path))
    }

    pub fn contains(&self, path: &str) -> bool {
        let path = normalize_path(path);
        self.routes.iter().any(|r| r.path == path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter()
    }

    fn insert(&mut self, mut descriptor: RouteDescriptor) -> Result<(), RouteTableError> {
        if !descriptor.path.starts_with('/') {
            return Err(RouteTableError::InvalidPath(descriptor.path));
        }
        descriptor.path = normalize_path(&descriptor.path).to_string();
        if self.routes.iter().any(|r| r.path == descriptor.path) {
            return Err(RouteTableError::DuplicatePath(descriptor.path));
        }
        self.routes.push(descriptor);
        Ok(())
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            anchors: StageAnchors::default(),
            routes: StageAnchors::default().descriptors().to_vec(),
        }
    }
}

/// `/dashboard/` and `/dashboard` name the same route; the root stays `/`.
pub fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}
