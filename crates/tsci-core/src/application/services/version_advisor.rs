//! Version Advisor - advisory update check.
//!
//! Wraps a `VersionLookup` port and folds every possible failure into
//! `VersionCheck::Unavailable`. Nothing in this service can abort an
//! init run; the worst outcome is a warning.

use tracing::{debug, instrument};

use crate::{application::ports::VersionLookup, domain::VersionCheck};

/// Advisory "is a newer version published?" check.
pub struct VersionAdvisor {
    lookup: Box<dyn VersionLookup>,
}

impl VersionAdvisor {
    /// Create an advisor over the given lookup transport.
    pub fn new(lookup: Box<dyn VersionLookup>) -> Self {
        Self { lookup }
    }

    /// Compare `current` (injected by the caller, typically the CLI's
    /// compiled-in version) against the latest published version.
    #[instrument(skip_all, fields(current = %current))]
    pub fn check(&self, current: &str) -> VersionCheck {
        match self.lookup.latest() {
            Ok(latest) => {
                debug!(%latest, "registry lookup succeeded");
                VersionCheck::classify(current, latest)
            }
            Err(err) => {
                debug!(error = %err, "registry lookup failed, degrading to advisory warning");
                VersionCheck::unavailable(err.to_string())
            }
        }
    }
}
