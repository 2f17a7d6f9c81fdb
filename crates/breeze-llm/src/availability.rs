use serde::{Deserialize, Serialize};

/// Why a capability is not usable yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PendingState {
    /// Model must be downloaded before first use
    Downloadable,
    /// Download in progress
    Downloading,
}

/// Readiness of a host capability.
///
/// Derived from the host on every query; host state changes between checks
/// (a download completes, a flag is toggled), so values are never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "state", rename_all = "lowercase")]
pub enum Availability {
    Ready,
    Pending(PendingState),
    Unavailable,
}

impl Availability {
    /// Map a host status string onto the three-state model.
    ///
    /// Accepts both the current (`available`, `downloadable`) and the older
    /// (`readily`, `after-download`) status vocabularies. Unknown strings are
    /// treated as unavailable.
    pub fn from_host_status(status: &str) -> Self {
        match status.trim() {
            "available" | "readily" => Self::Ready,
            "downloadable" | "after-download" => Self::Pending(PendingState::Downloadable),
            "downloading" => Self::Pending(PendingState::Downloading),
            _ => Self::Unavailable,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}
