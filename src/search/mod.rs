//! Path search engine
//!
//! Breadth-first search over the lazily-discovered article link graph.
//! The engine fetches one page per dequeue, folds its extracted links into
//! the frontier, and reconstructs the path once the target is discovered.

mod engine;

pub use engine::PathSearcher;
