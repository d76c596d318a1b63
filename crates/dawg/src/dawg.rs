// The sealed automaton: read-only membership queries.

use crate::DawgError;
use crate::arena::VertexArena;
use crate::builder::DawgBuilder;
use crate::vertex::VertexId;

/// A minimal acyclic deterministic finite-state automaton over bytes.
///
/// Built once from a sorted word list, immutable afterwards. Queries are
/// read-only, so a finished automaton can be shared freely across threads
/// (`Dawg` is `Send + Sync`).
pub struct Dawg {
    arena: VertexArena,
    state_count: usize,
    word_count: usize,
}

impl Dawg {
    /// Build an automaton from words in ascending byte-wise order.
    ///
    /// Returns [`DawgError::OutOfOrder`] if any word sorts strictly below
    /// its predecessor. An empty sequence yields an automaton accepting
    /// nothing.
    ///
    /// ```
    /// use dawg::Dawg;
    ///
    /// let dawg = Dawg::from_words(["bake", "cake", "lake"])?;
    /// assert!(dawg.contains("lake"));
    /// assert!(!dawg.contains("ake"));
    /// # Ok::<(), dawg::DawgError>(())
    /// ```
    pub fn from_words<I, W>(words: I) -> Result<Self, DawgError>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<[u8]>,
    {
        let mut builder = DawgBuilder::new();
        for word in words {
            builder.push(word)?;
        }
        Ok(builder.finish())
    }

    pub(crate) fn from_parts(arena: VertexArena, state_count: usize, word_count: usize) -> Self {
        Self {
            arena,
            state_count,
            word_count,
        }
    }

    /// Whether `word` is in the dictionary.
    pub fn contains(&self, word: impl AsRef<[u8]>) -> bool {
        match self.walk(word.as_ref()) {
            Some(id) => self.arena.get(id).is_accepting(),
            None => false,
        }
    }

    /// Whether `prefix` is a prefix of at least one dictionary word.
    ///
    /// Complete words count as prefixes of themselves. Every vertex lies on
    /// the path of some word, so reaching any vertex is proof; only the
    /// empty dictionary needs the extra check.
    pub fn contains_prefix(&self, prefix: impl AsRef<[u8]>) -> bool {
        !self.is_empty() && self.walk(prefix.as_ref()).is_some()
    }

    /// Number of automaton states, the root included.
    ///
    /// Equals the state count of the minimal partial DFA accepting exactly
    /// the dictionary.
    pub fn state_count(&self) -> usize {
        self.state_count
    }

    /// Number of distinct words accepted.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Whether the dictionary accepts no words at all.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Deterministic transition walk from the root; `None` as soon as a
    /// byte has no outgoing transition.
    fn walk(&self, input: &[u8]) -> Option<VertexId> {
        let mut current = VertexId::ROOT;
        for &label in input {
            current = self.arena.get(current).transition(label)?;
        }
        Some(current)
    }
}

impl std::fmt::Debug for Dawg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dawg")
            .field("state_count", &self.state_count)
            .field("word_count", &self.word_count)
            .field("arena_slots", &self.arena.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dictionary_accepts_nothing() {
        let dawg = Dawg::from_words(std::iter::empty::<&str>()).unwrap();
        assert!(dawg.is_empty());
        assert_eq!(dawg.word_count(), 0);
        assert_eq!(dawg.state_count(), 1);
        assert!(!dawg.contains(""));
        assert!(!dawg.contains("a"));
        assert!(!dawg.contains_prefix(""));
    }

    #[test]
    fn single_character_dictionary() {
        let dawg = Dawg::from_words(["a"]).unwrap();
        assert!(dawg.contains("a"));
        assert!(!dawg.contains(""));
        assert!(!dawg.contains("aa"));
        assert_eq!(dawg.state_count(), 2);
    }

    #[test]
    fn query_accepts_any_byte_like_argument() {
        let dawg = Dawg::from_words([b"cake".as_slice()]).unwrap();
        assert!(dawg.contains("cake"));
        assert!(dawg.contains(String::from("cake")));
        assert!(dawg.contains(b"cake"));
    }

    #[test]
    fn contains_prefix_walks_without_accepting_check() {
        let dawg = Dawg::from_words(["cake"]).unwrap();
        assert!(dawg.contains_prefix(""));
        assert!(dawg.contains_prefix("ca"));
        assert!(dawg.contains_prefix("cake"));
        assert!(!dawg.contains_prefix("cakes"));
        assert!(!dawg.contains_prefix("x"));
    }

    #[test]
    fn debug_reports_counts() {
        let dawg = Dawg::from_words(["tap", "top"]).unwrap();
        let rendered = format!("{dawg:?}");
        assert!(rendered.contains("state_count"));
        assert!(rendered.contains("word_count"));
    }
}
