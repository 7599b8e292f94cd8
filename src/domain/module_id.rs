use serde::{Deserialize, Serialize};
use std::fmt;

/// Archive-relative module name, e.g. `ccan/str`.
///
/// Identity is exact string equality; the resolver performs no normalization
/// beyond what the metadata provider guarantees.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(String);

impl ModuleId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModuleId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for ModuleId {
    fn from(name: String) -> Self {
        Self(name)
    }
}
