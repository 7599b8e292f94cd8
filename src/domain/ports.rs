use crate::domain::error::ResolveError;
use crate::domain::module_id::ModuleId;

/// A module's declared direct dependencies, as read from its metadata.
#[derive(Debug, Clone, Default)]
pub struct DirectDeps {
    /// Safe to add to a build automatically.
    pub safe: Vec<ModuleId>,
    /// Compile-time ("unsafe") dependencies needing manual configuration.
    pub compile: Vec<ModuleId>,
}

/// Module metadata source port (implemented by Infrastructure).
///
/// Pure lookup: no resolution logic, no graph knowledge. A provider may cache
/// filesystem reads process-wide; the resolver stays a pure function of
/// (request, provider snapshot).
pub trait MetadataProvider: Send + Sync {
    fn lookup_direct_dependencies(&self, module: &ModuleId) -> Result<DirectDeps, ResolveError>;
}
