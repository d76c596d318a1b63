// Graph vertices: sorted transition tables, accepting flags, and the
// structural signature used for equivalence lookup.

/// Stable handle to a vertex in the arena.
///
/// Handles are never invalidated: the arena is append-only and vertices are
/// never moved or freed. Slot 0 is always the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) u32);

impl VertexId {
    /// The root vertex, present in every arena.
    pub const ROOT: VertexId = VertexId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single automaton state: an ordered transition table plus an accepting
/// flag.
///
/// Transitions are kept sorted by label so that two structurally equal
/// vertices always produce identical signatures.
#[derive(Debug, Default)]
pub struct Vertex {
    transitions: Vec<(u8, VertexId)>,
    accepting: bool,
}

impl Vertex {
    /// Look up the target of the transition labelled `label`, if any.
    pub fn transition(&self, label: u8) -> Option<VertexId> {
        self.transitions
            .binary_search_by_key(&label, |&(l, _)| l)
            .ok()
            .map(|i| self.transitions[i].1)
    }

    /// Point-assign the transition for `label`, inserting or replacing.
    ///
    /// Insertion happens during suffix extension; replacement happens when
    /// minimization redirects an existing edge to a canonical vertex.
    pub fn set_transition(&mut self, label: u8, target: VertexId) {
        match self.transitions.binary_search_by_key(&label, |&(l, _)| l) {
            Ok(i) => self.transitions[i].1 = target,
            Err(i) => self.transitions.insert(i, (label, target)),
        }
    }

    /// Whether a word ends at this vertex.
    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    pub fn mark_accepting(&mut self) {
        self.accepting = true;
    }

    /// Number of outgoing transitions.
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// Structural signature of this vertex.
    ///
    /// Valid as an equivalence key only once every transition target is
    /// canonical: targets are compared by handle identity, never
    /// recursively. The minimization order (deepest first) guarantees this
    /// at every lookup site.
    pub fn signature(&self) -> VertexSignature {
        VertexSignature {
            accepting: self.accepting,
            transitions: self.transitions.clone().into_boxed_slice(),
        }
    }
}

/// Equivalence key for registry lookup: the accepting flag plus the sorted
/// `(label, target)` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexSignature {
    accepting: bool,
    transitions: Box<[(u8, VertexId)]>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_vertex_has_no_transitions() {
        let v = Vertex::default();
        assert_eq!(v.transition_count(), 0);
        assert_eq!(v.transition(b'a'), None);
        assert!(!v.is_accepting());
    }

    #[test]
    fn set_and_get_transitions() {
        let mut v = Vertex::default();
        v.set_transition(b'b', VertexId(2));
        v.set_transition(b'a', VertexId(1));

        assert_eq!(v.transition(b'a'), Some(VertexId(1)));
        assert_eq!(v.transition(b'b'), Some(VertexId(2)));
        assert_eq!(v.transition(b'c'), None);
        assert_eq!(v.transition_count(), 2);
    }

    #[test]
    fn set_transition_replaces_existing_label() {
        let mut v = Vertex::default();
        v.set_transition(b'a', VertexId(1));
        v.set_transition(b'a', VertexId(7));

        assert_eq!(v.transition(b'a'), Some(VertexId(7)));
        assert_eq!(v.transition_count(), 1);
    }

    #[test]
    fn signature_independent_of_insertion_order() {
        let mut v1 = Vertex::default();
        v1.set_transition(b'a', VertexId(1));
        v1.set_transition(b'b', VertexId(2));

        let mut v2 = Vertex::default();
        v2.set_transition(b'b', VertexId(2));
        v2.set_transition(b'a', VertexId(1));

        assert_eq!(v1.signature(), v2.signature());
    }

    #[test]
    fn signature_distinguishes_accepting_flag() {
        let mut v1 = Vertex::default();
        v1.set_transition(b'a', VertexId(1));

        let mut v2 = Vertex::default();
        v2.set_transition(b'a', VertexId(1));
        v2.mark_accepting();

        assert_ne!(v1.signature(), v2.signature());
    }

    #[test]
    fn signature_distinguishes_targets() {
        let mut v1 = Vertex::default();
        v1.set_transition(b'a', VertexId(1));

        let mut v2 = Vertex::default();
        v2.set_transition(b'a', VertexId(2));

        assert_ne!(v1.signature(), v2.signature());
    }
}
