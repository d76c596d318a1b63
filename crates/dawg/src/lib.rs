//! Minimal acyclic DFA (DAWG) construction and membership lookup.
//!
//! A DAWG (directed acyclic word graph) represents a finite set of words as
//! the smallest deterministic automaton accepting exactly that set. Unlike a
//! trie it factorizes common suffixes as well as common prefixes, and it is
//! built here in a single left-to-right pass over a sorted word list using
//! the incremental minimization algorithm of Daciuk et al.,
//! "Incremental Construction of Minimal Acyclic Finite-State Automata"
//! (Computational Linguistics 26(1), 2000).
//!
//! # Architecture
//!
//! - `vertex` -- Arena handles, sorted transition tables, structural signatures
//! - `arena` -- Append-only vertex storage
//! - `registry` -- Deduplicating store of canonical vertices
//! - `builder` -- Incremental construction: insertion, suffix extension, minimization
//! - `dawg` -- The sealed automaton and its read-only queries
//!
//! # Quick start
//!
//! ```
//! use dawg::Dawg;
//!
//! let dawg = Dawg::from_words(["bake", "cake", "fake", "lake", "make"])?;
//! assert!(dawg.contains("cake"));
//! assert!(!dawg.contains("ake"));
//! assert!(dawg.contains_prefix("la"));
//! # Ok::<(), dawg::DawgError>(())
//! ```
//!
//! Words compare byte-wise, so the required input order is plain ascending
//! byte order (for ASCII, ordinary dictionary order). Misordered input is
//! rejected with [`DawgError::OutOfOrder`] rather than silently producing a
//! wrong automaton; equal consecutive words are allowed and idempotent.

mod arena;
mod builder;
mod dawg;
mod registry;
mod vertex;

pub use builder::DawgBuilder;
pub use dawg::Dawg;

/// Error type for DAWG construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DawgError {
    #[error("word at index {index} sorts below its predecessor: input must be in ascending byte order")]
    OutOfOrder { index: usize },
}
