/// Edge kind - classification of a declared dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Addable to a build automatically, no extra configuration needed.
    Safe,
    /// Compile-time dependency: needs manual build configuration or review
    /// before inclusion.
    Unsafe,
}

impl EdgeKind {
    /// Merge two declared kinds for the same (from, to) pair.
    /// `Unsafe` dominates: a target declared under both partitions is
    /// treated as compile-only.
    pub fn join(self, other: EdgeKind) -> EdgeKind {
        if self == EdgeKind::Unsafe || other == EdgeKind::Unsafe {
            EdgeKind::Unsafe
        } else {
            EdgeKind::Safe
        }
    }

    /// Whether an edge of this kind may be followed under the given mode.
    pub fn allowed(self, include_unsafe: bool) -> bool {
        match self {
            EdgeKind::Safe => true,
            EdgeKind::Unsafe => include_unsafe,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_is_unsafe_dominant() {
        assert_eq!(EdgeKind::Safe.join(EdgeKind::Safe), EdgeKind::Safe);
        assert_eq!(EdgeKind::Safe.join(EdgeKind::Unsafe), EdgeKind::Unsafe);
        assert_eq!(EdgeKind::Unsafe.join(EdgeKind::Safe), EdgeKind::Unsafe);
        assert_eq!(EdgeKind::Unsafe.join(EdgeKind::Unsafe), EdgeKind::Unsafe);
    }

    #[test]
    fn safe_edges_always_allowed() {
        assert!(EdgeKind::Safe.allowed(false));
        assert!(EdgeKind::Safe.allowed(true));
        assert!(!EdgeKind::Unsafe.allowed(false));
        assert!(EdgeKind::Unsafe.allowed(true));
    }
}
