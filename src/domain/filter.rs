use crate::domain::module_id::ModuleId;

/// Restricts a closure listing to the archive's own namespace.
///
/// Modules outside the namespace (third-party or system libraries) still
/// participate in traversal; this filter only trims the externally-visible
/// listing. The prefix must be non-empty; an empty prefix degenerates to the
/// identity filter.
#[derive(Debug, Clone)]
pub struct NamespaceFilter {
    prefix: String,
}

impl NamespaceFilter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn matches(&self, module: &ModuleId) -> bool {
        module.as_str().starts_with(&self.prefix)
    }

    /// Keep only in-namespace modules, preserving the input order.
    pub fn apply<'a, I>(&self, modules: I) -> Vec<ModuleId>
    where
        I: IntoIterator<Item = &'a ModuleId>,
    {
        modules
            .into_iter()
            .filter(|m| self.matches(m))
            .cloned()
            .collect()
    }
}
