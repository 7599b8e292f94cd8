use crate::domain::module_id::ModuleId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveRequest {
    pub start: ModuleId,
    /// Follow dependencies transitively (default true).
    #[serde(default = "default_recursive")]
    pub recursive: bool,
    /// Include compile-time ("unsafe") dependencies (default false).
    #[serde(default)]
    pub include_unsafe: bool,
}

fn default_recursive() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveResponse {
    pub start: ModuleId,
    /// In-namespace dependencies, first-discovery order.
    pub dependencies: Vec<ModuleId>,
    /// Closure size before the namespace filter.
    pub total_closure_size: usize,
}
