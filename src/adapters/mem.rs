use crate::domain::error::ResolveError;
use crate::domain::module_id::ModuleId;
use crate::domain::ports::{DirectDeps, MetadataProvider};
use std::collections::HashMap;

/// In-memory metadata provider.
///
/// Backs tests and embeddings that already hold the archive's dependency
/// declarations. Looking up an undeclared module is a `Lookup` error, same as
/// a missing module directory on disk: every module reached by a traversal
/// must exist.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    modules: HashMap<ModuleId, DirectDeps>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a module with its safe and compile-time dependency lists.
    pub fn module(mut self, id: &str, safe: &[&str], compile: &[&str]) -> Self {
        self.modules.insert(
            id.into(),
            DirectDeps {
                safe: safe.iter().map(|&s| s.into()).collect(),
                compile: compile.iter().map(|&s| s.into()).collect(),
            },
        );
        self
    }
}

impl MetadataProvider for StaticProvider {
    fn lookup_direct_dependencies(&self, module: &ModuleId) -> Result<DirectDeps, ResolveError> {
        self.modules
            .get(module)
            .cloned()
            .ok_or_else(|| ResolveError::lookup(module, "module not declared"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_module_found() {
        let provider = StaticProvider::new().module("ccan/a", &["ccan/b"], &["ccan/c"]);
        let deps = provider
            .lookup_direct_dependencies(&"ccan/a".into())
            .unwrap();
        assert_eq!(deps.safe, vec![ModuleId::from("ccan/b")]);
        assert_eq!(deps.compile, vec![ModuleId::from("ccan/c")]);
    }

    #[test]
    fn undeclared_module_is_lookup_error() {
        let provider = StaticProvider::new();
        let err = provider
            .lookup_direct_dependencies(&"ccan/nope".into())
            .unwrap_err();
        assert!(matches!(err, ResolveError::Lookup { .. }));
    }
}
