use crate::app::dto::ResolveRequest;
use crate::app::engine::DependsEngine;
use crate::domain::module_id::ModuleId;
use anyhow::Result;

/// Resolve and print, one dependency id per line.
///
/// Nothing is printed until the whole closure has resolved: a lookup failure
/// anywhere in the traversal must not leave partial output behind.
pub fn resolve_and_print(
    engine: &DependsEngine,
    start: ModuleId,
    recursive: bool,
    include_unsafe: bool,
) -> Result<()> {
    let response = engine.resolve(ResolveRequest {
        start,
        recursive,
        include_unsafe,
    })?;

    for dep in &response.dependencies {
        println!("{dep}");
    }
    Ok(())
}
