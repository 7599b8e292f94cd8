use crate::domain::module_id::ModuleId;
use thiserror::Error;

/// Failures a resolution run can surface.
///
/// The resolver performs no local recovery: a `Lookup` error anywhere in the
/// traversal aborts the whole resolution and partial results are discarded.
/// A missing or malformed module is a data problem, not a transient fault.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A referenced module's metadata could not be read or parsed.
    #[error("cannot resolve module `{module}`: {reason}")]
    Lookup { module: ModuleId, reason: String },

    /// Caller-initiated abort via a `CancelToken`.
    #[error("resolution cancelled")]
    Cancelled,
}

impl ResolveError {
    pub fn lookup(module: &ModuleId, reason: impl Into<String>) -> Self {
        Self::Lookup {
            module: module.clone(),
            reason: reason.into(),
        }
    }
}
