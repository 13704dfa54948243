//! A named topic and its owned word list.

use super::WordList;

/// A named group owning an ordered sequence of words.
///
/// The topic exclusively owns its [`WordList`]; the word list lives exactly
/// as long as the topic. Topic names are free text and are not required to
/// be unique within a [`TopicList`](super::TopicList).
#[derive(Debug, Clone, Default)]
pub struct Topic {
    name: String,
    words: WordList,
}

impl Topic {
    /// Creates a topic with the given name and no words.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            words: WordList::new(),
        }
    }

    /// Returns the topic name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a word to this topic.
    pub fn add_word(&mut self, word: impl Into<String>) {
        self.words.push_back(word);
    }

    /// Removes the first occurrence of `word` from this topic.
    ///
    /// Returns `false` if the word is not present.
    pub fn remove_word(&mut self, word: &str) -> bool {
        self.words.remove(word)
    }

    /// Replaces the first occurrence of `old` with `new`, in place.
    ///
    /// Returns `false` if `old` is not present.
    pub fn change_word(&mut self, old: &str, new: impl Into<String>) -> bool {
        self.words.replace(old, new)
    }

    /// Returns `true` if this topic contains a word exactly equal to `word`.
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Returns an ordered snapshot of this topic's words.
    ///
    /// The snapshot is disconnected from the topic; later mutations do not
    /// affect it.
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        self.words.to_vec()
    }

    /// Returns the number of words in this topic.
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.words.len()
    }
}

impl PartialEq for Topic {
    /// Two topics are equal iff their names are equal and their word
    /// sequences are equal in order and content.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.words == other.words
    }
}

impl Eq for Topic {}

#[cfg(test)]
mod tests {
    use super::Topic;

    fn animals() -> Topic {
        let mut topic = Topic::new("Animals");
        topic.add_word("cat");
        topic.add_word("dog");
        topic
    }

    #[test]
    fn delegates_word_operations() {
        let mut topic = animals();
        assert_eq!(topic.name(), "Animals");
        assert_eq!(topic.word_count(), 2);
        assert!(topic.contains_word("cat"));
        assert!(topic.remove_word("cat"));
        assert_eq!(topic.word_count(), 1);
        assert!(!topic.contains_word("cat"));
        assert!(topic.change_word("dog", "wolf"));
        assert_eq!(topic.words(), ["wolf"]);
    }

    #[test]
    fn equality_requires_name_and_word_order() {
        let a = animals();
        let b = animals();
        assert_eq!(a, b);

        let mut renamed = Topic::new("Pets");
        renamed.add_word("cat");
        renamed.add_word("dog");
        assert_ne!(a, renamed);

        let mut reordered = Topic::new("Animals");
        reordered.add_word("dog");
        reordered.add_word("cat");
        assert_ne!(a, reordered);
    }

    #[test]
    fn empty_topics_with_same_name_are_equal() {
        assert_eq!(Topic::new("X"), Topic::new("X"));
    }
}
