// Incremental construction: insertion driver, suffix extension, and the
// minimization engine.

use crate::DawgError;
use crate::arena::VertexArena;
use crate::dawg::Dawg;
use crate::registry::Registry;
use crate::vertex::VertexId;

/// Incremental DAWG builder.
///
/// Words must be pushed in ascending byte-wise order; a word that sorts
/// strictly below its predecessor is rejected with
/// [`DawgError::OutOfOrder`]. Pushing a word equal to its predecessor is
/// an idempotent no-op.
///
/// ```
/// use dawg::DawgBuilder;
///
/// let mut builder = DawgBuilder::new();
/// builder.push("bake")?;
/// builder.push("cake")?;
/// let dawg = builder.finish();
/// assert!(dawg.contains("cake"));
/// # Ok::<(), dawg::DawgError>(())
/// ```
pub struct DawgBuilder {
    arena: VertexArena,
    registry: Registry,
    /// Unminimized tail of the most recent word, used as a stack:
    /// top = deepest vertex. Each entry carries the label of its incoming
    /// edge from the parent.
    path: Vec<(VertexId, u8)>,
    prev_word: Vec<u8>,
    words_pushed: usize,
    word_count: usize,
}

impl DawgBuilder {
    pub fn new() -> Self {
        Self {
            arena: VertexArena::new(),
            registry: Registry::new(),
            path: Vec::new(),
            prev_word: Vec::new(),
            words_pushed: 0,
            word_count: 0,
        }
    }

    /// Insert the next word.
    ///
    /// The part shared with the previous word is already in the graph; the
    /// previous word's non-shared tail is minimized away and the current
    /// word's non-shared tail is appended.
    pub fn push(&mut self, word: impl AsRef<[u8]>) -> Result<(), DawgError> {
        let word = word.as_ref();
        if self.words_pushed > 0 && word < self.prev_word.as_slice() {
            return Err(DawgError::OutOfOrder {
                index: self.words_pushed,
            });
        }

        let common = common_prefix_len(&self.prev_word, word);
        self.minimize_until(common);
        self.add_suffix(&word[common..]);

        self.prev_word.clear();
        self.prev_word.extend_from_slice(word);
        self.words_pushed += 1;
        Ok(())
    }

    /// Flush the remaining unminimized path and seal the automaton.
    pub fn finish(mut self) -> Dawg {
        self.minimize_until(0);
        // Distinct states = canonical vertices plus the root.
        Dawg::from_parts(self.arena, self.registry.len() + 1, self.word_count)
    }

    /// Collapse path entries deeper than `depth`, deepest first.
    ///
    /// Children are always resolved before their parents, so registry
    /// lookup never recurses: every transition target of a popped vertex
    /// is already canonical and compares by handle identity.
    fn minimize_until(&mut self, depth: usize) {
        while self.path.len() > depth {
            let Some((id, label)) = self.path.pop() else {
                break;
            };
            let signature = self.arena.get(id).signature();
            match self.registry.find(&signature) {
                Some(canonical) => {
                    // An equivalent vertex already exists: repoint the
                    // parent edge and let `id` go dead in the arena.
                    let parent = self.parent_id();
                    self.arena.get_mut(parent).set_transition(label, canonical);
                }
                None => self.registry.insert(signature, id),
            }
        }
    }

    /// Extend the graph with the non-shared tail of the current word.
    ///
    /// One new vertex per byte, each wired from the current parent and
    /// pushed onto the unminimized path. The last vertex (or the existing
    /// parent when the tail is empty) is marked accepting.
    fn add_suffix(&mut self, suffix: &[u8]) {
        let mut parent = self.parent_id();
        for &label in suffix {
            let vertex = self.arena.alloc();
            self.arena.get_mut(parent).set_transition(label, vertex);
            self.path.push((vertex, label));
            parent = vertex;
        }

        let last = self.arena.get_mut(parent);
        if !last.is_accepting() {
            last.mark_accepting();
            self.word_count += 1;
        }
    }

    /// Parent for the next edge: top of the unminimized path, or the root.
    fn parent_id(&self) -> VertexId {
        self.path.last().map_or(VertexId::ROOT, |&(id, _)| id)
    }
}

impl Default for DawgBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Length of the longest common prefix of `a` and `b`, byte-wise.
fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
