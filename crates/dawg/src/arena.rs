// Append-only vertex arena.

use crate::vertex::{Vertex, VertexId};

/// Sole owner of every vertex in the automaton.
///
/// Vertices are indexed by [`VertexId`] and never freed or moved. A vertex
/// whose last handle is dropped during minimization simply becomes dead
/// arena space; the structure is append-only and never compacted.
#[derive(Debug)]
pub struct VertexArena {
    vertices: Vec<Vertex>,
}

impl VertexArena {
    /// Create an arena containing only the root vertex.
    pub fn new() -> Self {
        Self {
            vertices: vec![Vertex::default()],
        }
    }

    /// Allocate a fresh, empty, non-accepting vertex.
    pub fn alloc(&mut self) -> VertexId {
        let id = VertexId(self.vertices.len() as u32);
        self.vertices.push(Vertex::default());
        id
    }

    pub fn get(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    pub fn get_mut(&mut self, id: VertexId) -> &mut Vertex {
        &mut self.vertices[id.index()]
    }

    /// Total number of allocated slots, dead ones included.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_arena_holds_only_the_root() {
        let arena = VertexArena::new();
        assert_eq!(arena.len(), 1);
        assert!(!arena.get(VertexId::ROOT).is_accepting());
    }

    #[test]
    fn alloc_returns_sequential_handles() {
        let mut arena = VertexArena::new();
        let a = arena.alloc();
        let b = arena.alloc();

        assert_eq!(a, VertexId(1));
        assert_eq!(b, VertexId(2));
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn mutation_through_handle_is_visible() {
        let mut arena = VertexArena::new();
        let a = arena.alloc();
        arena.get_mut(VertexId::ROOT).set_transition(b'x', a);
        arena.get_mut(a).mark_accepting();

        assert_eq!(arena.get(VertexId::ROOT).transition(b'x'), Some(a));
        assert!(arena.get(a).is_accepting());
    }
}
