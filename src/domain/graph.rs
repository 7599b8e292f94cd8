use crate::domain::edge::EdgeKind;
use crate::domain::error::ResolveError;
use crate::domain::module_id::ModuleId;
use crate::domain::ports::MetadataProvider;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::{HashMap, HashSet};

/// Dependency Graph - the core data structure of one resolution run.
///
/// Nodes are interned lazily as modules are discovered; a module's out-edges
/// are populated from the metadata provider on the first `edges_of` call and
/// served from the graph thereafter, so the provider is queried at most once
/// per module per run.
pub struct DependencyGraph<'a> {
    /// The directed graph of modules and declared-dependency edges
    graph: DiGraph<ModuleId, EdgeKind>,

    /// Mapping from module id to node index
    module_to_node: HashMap<ModuleId, NodeIndex>,

    /// Nodes whose out-edges have already been loaded from the provider
    populated: HashSet<NodeIndex>,

    provider: &'a dyn MetadataProvider,
}

impl<'a> DependencyGraph<'a> {
    pub fn new(provider: &'a dyn MetadataProvider) -> Self {
        Self {
            graph: DiGraph::new(),
            module_to_node: HashMap::new(),
            populated: HashSet::new(),
            provider,
        }
    }

    fn intern(&mut self, module: &ModuleId) -> NodeIndex {
        if let Some(&idx) = self.module_to_node.get(module) {
            return idx;
        }
        let idx = self.graph.add_node(module.clone());
        self.module_to_node.insert(module.clone(), idx);
        idx
    }

    /// Direct edges of `module`, loading them from the provider on first use.
    ///
    /// Duplicate declarations of the same target are merged with the
    /// Unsafe-dominant kind join, and the returned edges are sorted by target
    /// id so traversal order is deterministic. A provider failure is
    /// propagated untouched: an unresolvable dependency invalidates the run.
    pub fn edges_of(
        &mut self,
        module: &ModuleId,
    ) -> Result<Vec<(ModuleId, EdgeKind)>, ResolveError> {
        let idx = self.intern(module);
        if !self.populated.contains(&idx) {
            let deps = self.provider.lookup_direct_dependencies(module)?;

            let mut merged: HashMap<ModuleId, EdgeKind> = HashMap::new();
            for target in deps.safe {
                merged
                    .entry(target)
                    .and_modify(|k| *k = k.join(EdgeKind::Safe))
                    .or_insert(EdgeKind::Safe);
            }
            for target in deps.compile {
                merged
                    .entry(target)
                    .and_modify(|k| *k = k.join(EdgeKind::Unsafe))
                    .or_insert(EdgeKind::Unsafe);
            }

            for (target, kind) in merged {
                let target_idx = self.intern(&target);
                self.graph.add_edge(idx, target_idx, kind);
            }
            self.populated.insert(idx);
        }

        // Edge storage order is arbitrary; sort by target so traversal is
        // deterministic.
        let mut out: Vec<(ModuleId, EdgeKind)> = self
            .graph
            .edges(idx)
            .map(|e| (self.graph[e.target()].clone(), *e.weight()))
            .collect();
        out.sort_by(|(a, _), (b, _)| a.cmp(b));
        Ok(out)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
