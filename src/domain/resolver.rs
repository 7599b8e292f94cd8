use crate::domain::edge::EdgeKind;
use crate::domain::error::ResolveError;
use crate::domain::graph::DependencyGraph;
use crate::domain::module_id::ModuleId;
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Fully determines a resolution's output given a provider snapshot.
#[derive(Debug, Clone)]
pub struct ResolutionRequest {
    pub start: ModuleId,
    /// Follow dependencies transitively. When false, only the start module's
    /// own declarations are returned and no other module is looked up.
    pub recursive: bool,
    /// Follow compile-time ("unsafe") edges in addition to safe ones.
    pub include_unsafe: bool,
}

/// Caller-initiated abort for an in-flight resolution.
///
/// Clone the token, hand one copy to the resolver, and call `cancel` from any
/// thread; the resolver polls it once per module expansion and surfaces
/// `ResolveError::Cancelled`, discarding partial state.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Closure computation result
#[derive(Debug, Clone, Default)]
pub struct Closure {
    members: HashSet<ModuleId>,
    discovery_order: Vec<ModuleId>,
}

impl Closure {
    fn insert(&mut self, module: ModuleId) {
        if self.members.insert(module.clone()) {
            self.discovery_order.push(module);
        }
    }

    pub fn contains(&self, module: &ModuleId) -> bool {
        self.members.contains(module)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in first-discovery order (deterministic: the graph sorts each
    /// module's out-edges by target id).
    pub fn iter(&self) -> impl Iterator<Item = &ModuleId> {
        self.discovery_order.iter()
    }
}

/// Closure Resolver - computes the dependency closure for a request.
pub struct ClosureResolver;

impl Default for ClosureResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ClosureResolver {
    pub fn new() -> Self {
        Self
    }

    /// Compute the dependency closure for `request` over `graph`.
    ///
    /// Iterative BFS with a per-run visited set: each module is expanded at
    /// most once, so cyclic graphs terminate without duplicate provider
    /// queries. The start module is never part of its own result; edges back
    /// to it are absorbed silently. Any lookup failure aborts the whole
    /// resolution.
    pub fn resolve(
        &self,
        request: &ResolutionRequest,
        graph: &mut DependencyGraph<'_>,
        cancel: Option<&CancelToken>,
    ) -> Result<Closure, ResolveError> {
        let mut closure = Closure::default();
        let mut visited: HashSet<ModuleId> = HashSet::new();
        let mut frontier: VecDeque<ModuleId> = VecDeque::new();
        frontier.push_back(request.start.clone());

        while let Some(current) = frontier.pop_front() {
            if let Some(token) = cancel
                && token.is_cancelled()
            {
                return Err(ResolveError::Cancelled);
            }
            if !visited.insert(current.clone()) {
                continue;
            }

            let edges = graph.edges_of(&current)?;
            debug!(module = %current, edges = edges.len(), "expanding module");

            for (target, kind) in edges {
                if kind == EdgeKind::Unsafe && !request.include_unsafe {
                    continue;
                }
                if target != request.start {
                    closure.insert(target.clone());
                }
                if request.recursive && !visited.contains(&target) {
                    frontier.push_back(target);
                }
            }
        }

        Ok(closure)
    }
}
