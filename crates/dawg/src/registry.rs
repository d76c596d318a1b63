// Canonical vertex registry: deduplication by structural signature.

use crate::vertex::{VertexId, VertexSignature};
use hashbrown::HashMap;

/// Deduplicating store of canonical vertices.
///
/// Keyed by [`VertexSignature`]; a hit means an equivalent vertex is
/// already canonical and the probe vertex can be discarded. Entries are
/// never removed or updated once admitted.
#[derive(Debug, Default)]
pub struct Registry {
    canonical: HashMap<VertexSignature, VertexId>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical vertex equivalent to `signature`, if one exists.
    pub fn find(&self, signature: &VertexSignature) -> Option<VertexId> {
        self.canonical.get(signature).copied()
    }

    /// Admit `id` as the canonical vertex for `signature`.
    pub fn insert(&mut self, signature: VertexSignature, id: VertexId) {
        let previous = self.canonical.insert(signature, id);
        debug_assert!(previous.is_none(), "signature admitted twice");
    }

    /// Number of canonical vertices (the root is not registered).
    pub fn len(&self) -> usize {
        self.canonical.len()
    }
}
