use crate::domain::error::ResolveError;
use crate::domain::module_id::ModuleId;
use crate::domain::ports::{DirectDeps, MetadataProvider};
use serde::Deserialize;
use std::path::PathBuf;

/// Per-module dependency manifest, `deps.json` in the module directory.
#[derive(Debug, Default, Deserialize)]
struct DepsManifest {
    #[serde(default)]
    depends: Vec<ModuleId>,
    #[serde(default)]
    compile_depends: Vec<ModuleId>,
}

/// File system metadata provider.
///
/// A module `ccan/foo` lives at `<archive_root>/ccan/foo/` and declares its
/// direct dependencies in that directory's `deps.json`. Missing directory,
/// missing manifest, and malformed JSON all surface as `Lookup` errors naming
/// the module.
pub struct DirMetadataProvider {
    archive_root: PathBuf,
}

impl DirMetadataProvider {
    pub fn new(archive_root: impl Into<PathBuf>) -> Self {
        Self {
            archive_root: archive_root.into(),
        }
    }

    fn manifest_path(&self, module: &ModuleId) -> PathBuf {
        self.archive_root.join(module.as_str()).join("deps.json")
    }
}

impl MetadataProvider for DirMetadataProvider {
    fn lookup_direct_dependencies(&self, module: &ModuleId) -> Result<DirectDeps, ResolveError> {
        let dir = self.archive_root.join(module.as_str());
        if !dir.is_dir() {
            return Err(ResolveError::lookup(
                module,
                format!("no such module directory: {}", dir.display()),
            ));
        }

        let path = self.manifest_path(module);
        let content = std::fs::read_to_string(&path).map_err(|e| {
            ResolveError::lookup(module, format!("failed to read {}: {e}", path.display()))
        })?;
        let manifest: DepsManifest = serde_json::from_str(&content).map_err(|e| {
            ResolveError::lookup(module, format!("malformed {}: {e}", path.display()))
        })?;

        Ok(DirectDeps {
            safe: manifest.depends,
            compile: manifest.compile_depends,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn write_manifest(root: &Path, module: &str, json: &str) {
        let dir = root.join(module);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("deps.json"), json).unwrap();
    }

    #[test]
    fn reads_both_partitions() {
        let tmp = tempfile::tempdir().unwrap();
        write_manifest(
            tmp.path(),
            "ccan/str",
            r#"{ "depends": ["ccan/build_assert"], "compile_depends": ["ccan/talloc"] }"#,
        );

        let provider = DirMetadataProvider::new(tmp.path());
        let deps = provider
            .lookup_direct_dependencies(&"ccan/str".into())
            .unwrap();
        assert_eq!(deps.safe, vec![ModuleId::from("ccan/build_assert")]);
        assert_eq!(deps.compile, vec![ModuleId::from("ccan/talloc")]);
    }

    #[test]
    fn missing_keys_default_to_empty() {
        let tmp = tempfile::tempdir().unwrap();
        write_manifest(tmp.path(), "ccan/leaf", "{}");

        let provider = DirMetadataProvider::new(tmp.path());
        let deps = provider
            .lookup_direct_dependencies(&"ccan/leaf".into())
            .unwrap();
        assert!(deps.safe.is_empty());
        assert!(deps.compile.is_empty());
    }

    #[test]
    fn missing_directory_is_lookup_error() {
        let tmp = tempfile::tempdir().unwrap();
        let provider = DirMetadataProvider::new(tmp.path());
        let err = provider
            .lookup_direct_dependencies(&"ccan/ghost".into())
            .unwrap_err();
        match err {
            ResolveError::Lookup { module, reason } => {
                assert_eq!(module.as_str(), "ccan/ghost");
                assert!(reason.contains("no such module directory"));
            }
            other => panic!("expected Lookup error, got {other:?}"),
        }
    }

    #[test]
    fn missing_manifest_is_lookup_error() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("ccan/bare")).unwrap();

        let provider = DirMetadataProvider::new(tmp.path());
        let err = provider
            .lookup_direct_dependencies(&"ccan/bare".into())
            .unwrap_err();
        assert!(matches!(err, ResolveError::Lookup { .. }));
    }

    #[test]
    fn malformed_json_is_lookup_error() {
        let tmp = tempfile::tempdir().unwrap();
        write_manifest(tmp.path(), "ccan/broken", "{ not json");

        let provider = DirMetadataProvider::new(tmp.path());
        let err = provider
            .lookup_direct_dependencies(&"ccan/broken".into())
            .unwrap_err();
        match err {
            ResolveError::Lookup { reason, .. } => assert!(reason.contains("malformed")),
            other => panic!("expected Lookup error, got {other:?}"),
        }
    }
}
