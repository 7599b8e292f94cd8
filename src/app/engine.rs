use crate::app::dto::{ResolveRequest, ResolveResponse};
use crate::domain::error::ResolveError;
use crate::domain::filter::NamespaceFilter;
use crate::domain::graph::DependencyGraph;
use crate::domain::ports::MetadataProvider;
use crate::domain::resolver::{CancelToken, ClosureResolver, ResolutionRequest};
use std::sync::Arc;
use tracing::debug;

/// Orchestrates provider, resolver, and namespace filter.
///
/// Holds no per-resolution state: every request gets a fresh graph and
/// visited set, so concurrent resolutions against one engine never interfere.
#[derive(Clone)]
pub struct DependsEngine {
    provider: Arc<dyn MetadataProvider>,
    filter: NamespaceFilter,
}

impl DependsEngine {
    pub fn new(provider: Arc<dyn MetadataProvider>, namespace_prefix: impl Into<String>) -> Self {
        Self {
            provider,
            filter: NamespaceFilter::new(namespace_prefix),
        }
    }

    pub fn resolve(&self, request: ResolveRequest) -> Result<ResolveResponse, ResolveError> {
        self.resolve_with_cancel(request, None)
    }

    pub fn resolve_with_cancel(
        &self,
        request: ResolveRequest,
        cancel: Option<&CancelToken>,
    ) -> Result<ResolveResponse, ResolveError> {
        let mut graph = DependencyGraph::new(self.provider.as_ref());
        let closure = ClosureResolver::new().resolve(
            &ResolutionRequest {
                start: request.start.clone(),
                recursive: request.recursive,
                include_unsafe: request.include_unsafe,
            },
            &mut graph,
            cancel,
        )?;

        debug!(
            start = %request.start,
            closure = closure.len(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "resolution complete"
        );

        Ok(ResolveResponse {
            start: request.start,
            dependencies: self.filter.apply(closure.iter()),
            total_closure_size: closure.len(),
        })
    }
}
