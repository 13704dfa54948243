//! Domain models for vocabulary management.
//!
//! This module contains the core containers: the singly linked word list,
//! the topic wrapper, and the doubly linked, position-indexable topic list.

mod config;
pub use config::Config;

/// Named topic wrapper exposing word-level operations.
pub mod topic;
pub use topic::Topic;

/// Doubly linked, position-indexable topic storage.
pub mod topic_list;
pub use topic_list::{OutOfRange, TopicList};

/// Singly linked word storage.
pub mod word_list;
pub use word_list::WordList;
