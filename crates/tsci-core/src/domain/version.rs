//! Version advisory result type.
//!
//! The advisory check never fails: every outcome, including a failed
//! lookup, is a variant the caller has to render.

/// Outcome of comparing the running version against the latest published one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionCheck {
    /// Running version matches the latest published version.
    UpToDate { current: String },
    /// A newer version has been published.
    Outdated { current: String, latest: String },
    /// The lookup failed; the reason is advisory only.
    Unavailable { reason: String },
}

impl VersionCheck {
    /// Classify a (current, latest) pair.
    ///
    /// Comparison is strict string inequality, not semver ordering: the
    /// registry's `latest` tag is the single source of truth, and anything
    /// that differs from it (including a local pre-release) gets the
    /// upgrade hint.
    pub fn classify(current: impl Into<String>, latest: impl Into<String>) -> Self {
        let current = current.into();
        let latest = latest.into();
        if current == latest {
            Self::UpToDate { current }
        } else {
            Self::Outdated { current, latest }
        }
    }

    /// Build the unavailable arm from a lookup failure.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// `true` only when a newer version is known to exist.
    pub fn is_outdated(&self) -> bool {
        matches!(self, Self::Outdated { .. })
    }
}
