//! Topic-based Vocabulary Management
//!
//! Topics are named, ordered groups of words, stored in a doubly linked
//! topic list and persisted in a line-oriented flat-file format.

pub mod domain;
pub use domain::{Config, OutOfRange, Topic, TopicList, WordList};

/// Flat-file persistence for vocabulary lists.
pub mod storage;
pub use storage::LoadError;
