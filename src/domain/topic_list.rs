//! Doubly linked, position-indexable topic storage.
//!
//! The [`TopicList`] is the top-level container: an ordered sequence of
//! [`Topic`] entries addressed by 0-based position, with O(1) operations at
//! both ends. Nodes live in an arena and link to their neighbours by slot
//! index; head and tail are optional indices into the arena, so relinking
//! never touches more than the two affected neighbours.
//!
//! Structural invariants:
//! - `len` equals the number of nodes reachable from `head`
//! - `head` is `None` iff `len == 0` iff `tail` is `None`
//! - for every non-terminal node, `nodes[next].prev` points back at it
//! - `tail` is reachable from `head` in exactly `len - 1` forward steps

use thiserror::Error;

use super::Topic;

/// A positional argument fell outside the valid range for the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} is out of range for a list of {len} topics")]
pub struct OutOfRange {
    /// The rejected 0-based index.
    pub index: usize,
    /// The list length at the time of the call.
    pub len: usize,
}

#[derive(Debug, Clone)]
struct Node {
    topic: Topic,
    next: Option<usize>,
    prev: Option<usize>,
}

/// An ordered, position-indexable collection of topics.
#[derive(Debug, Default, Clone)]
pub struct TopicList {
    nodes: Vec<Node>,
    /// Slots released by removals, available for reuse.
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl TopicList {
    /// Creates an empty topic list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of topics in the list.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no topics.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Prepends a topic at the head of the list.
    pub fn push_front(&mut self, topic: Topic) {
        let slot = self.alloc(Node {
            topic,
            next: self.head,
            prev: None,
        });
        match self.head {
            Some(head) => self.nodes[head].prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
        self.len += 1;
    }

    /// Appends a topic at the tail of the list.
    pub fn push_back(&mut self, topic: Topic) {
        let slot = self.alloc(Node {
            topic,
            next: None,
            prev: self.tail,
        });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
    }

    /// Removes and returns the first topic, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<Topic> {
        let slot = self.head?;
        let next = self.nodes[slot].next;
        match next {
            Some(next) => self.nodes[next].prev = None,
            None => self.tail = None,
        }
        self.head = next;
        self.len -= 1;
        Some(self.release(slot))
    }

    /// Removes and returns the last topic, or `None` if the list is empty.
    pub fn pop_back(&mut self) -> Option<Topic> {
        let slot = self.tail?;
        let prev = self.nodes[slot].prev;
        match prev {
            Some(prev) => self.nodes[prev].next = None,
            None => self.head = None,
        }
        self.tail = prev;
        self.len -= 1;
        Some(self.release(slot))
    }

    /// Returns the topic at `index`, or `None` when the index is outside
    /// `[0, len)`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Topic> {
        self.slot_at(index).map(|slot| &self.nodes[slot].topic)
    }

    /// Returns the topic at `index` mutably, or `None` when the index is
    /// outside `[0, len)`.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Topic> {
        self.slot_at(index).map(|slot| &mut self.nodes[slot].topic)
    }

    /// Inserts `topic` immediately before the entry currently at `index`.
    ///
    /// `index == 0` behaves as [`TopicList::push_front`] and `index == len`
    /// as [`TopicList::push_back`].
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] when `index > len`, before any traversal. The
    /// list is unchanged in that case.
    pub fn insert_before(&mut self, index: usize, topic: Topic) -> Result<(), OutOfRange> {
        if index > self.len {
            return Err(OutOfRange {
                index,
                len: self.len,
            });
        }
        if index == 0 {
            self.push_front(topic);
        } else if index == self.len {
            self.push_back(topic);
        } else {
            let at = self.slot_at(index).expect("interior index is in range");
            self.splice_before(at, topic);
        }
        Ok(())
    }

    /// Inserts `topic` immediately after the entry currently at `index`.
    ///
    /// `index == len - 1` behaves as [`TopicList::push_back`].
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] when `index >= len`, before any traversal. The
    /// list is unchanged in that case.
    pub fn insert_after(&mut self, index: usize, topic: Topic) -> Result<(), OutOfRange> {
        if index >= self.len {
            return Err(OutOfRange {
                index,
                len: self.len,
            });
        }
        if index == self.len - 1 {
            self.push_back(topic);
        } else {
            let at = self.slot_at(index).expect("interior index is in range");
            let next = self.nodes[at].next.expect("non-tail node has a successor");
            self.splice_before(next, topic);
        }
        Ok(())
    }

    /// Removes and returns the topic at `index`, or `None` when the index is
    /// outside `[0, len)`.
    pub fn remove_at(&mut self, index: usize) -> Option<Topic> {
        if index >= self.len {
            return None;
        }
        if index == 0 {
            return self.pop_front();
        }
        if index == self.len - 1 {
            return self.pop_back();
        }
        let slot = self.slot_at(index)?;
        let prev = self.nodes[slot].prev.expect("interior node has a predecessor");
        let next = self.nodes[slot].next.expect("interior node has a successor");
        self.nodes[prev].next = Some(next);
        self.nodes[next].prev = Some(prev);
        self.len -= 1;
        Some(self.release(slot))
    }

    /// Removes all topics, resetting the list to the empty state.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Visits the topics from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &Topic> {
        let mut current = self.head;
        std::iter::from_fn(move || {
            let slot = current?;
            current = self.nodes[slot].next;
            Some(&self.nodes[slot].topic)
        })
    }

    /// Returns the names of all topics containing `word` (exact match), in
    /// list order.
    #[must_use]
    pub fn topics_containing(&self, word: &str) -> Vec<String> {
        self.iter()
            .filter(|topic| topic.contains_word(word))
            .map(|topic| topic.name().to_owned())
            .collect()
    }

    /// Returns every word, from any topic, starting with `letter`.
    ///
    /// The match is case-insensitive and the result is sorted
    /// lexicographically ascending. Duplicates across topics are preserved.
    /// Topic names are not considered.
    #[must_use]
    pub fn words_starting_with(&self, letter: char) -> Vec<String> {
        let wanted: Vec<char> = letter.to_lowercase().collect();
        let mut found: Vec<String> = self
            .iter()
            .flat_map(Topic::words)
            .filter(|word| {
                word.chars()
                    .flat_map(char::to_lowercase)
                    .take(wanted.len())
                    .eq(wanted.iter().copied())
            })
            .collect();
        found.sort();
        found
    }

    /// Walks from the head to the slot holding the entry at `index`.
    fn slot_at(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        let mut slot = self.head?;
        for _ in 0..index {
            slot = self.nodes[slot].next?;
        }
        Some(slot)
    }

    /// Splices a new node immediately before the node at `at`.
    ///
    /// `at` must be an interior or head slot; boundary cases are handled by
    /// the callers.
    fn splice_before(&mut self, at: usize, topic: Topic) {
        let prev = self.nodes[at].prev.expect("callers handle the head case");
        let slot = self.alloc(Node {
            topic,
            next: Some(at),
            prev: Some(prev),
        });
        self.nodes[prev].next = Some(slot);
        self.nodes[at].prev = Some(slot);
        self.len += 1;
    }

    fn alloc(&mut self, node: Node) -> usize {
        if let Some(slot) = self.free.pop() {
            self.nodes[slot] = node;
            slot
        } else {
            self.nodes.push(node);
            self.nodes.len() - 1
        }
    }

    fn release(&mut self, slot: usize) -> Topic {
        self.free.push(slot);
        let node = &mut self.nodes[slot];
        node.next = None;
        node.prev = None;
        std::mem::take(&mut node.topic)
    }
}

impl FromIterator<Topic> for TopicList {
    fn from_iter<I: IntoIterator<Item = Topic>>(iter: I) -> Self {
        let mut list = Self::new();
        for topic in iter {
            list.push_back(topic);
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::{OutOfRange, Topic, TopicList};

    fn topic(name: &str) -> Topic {
        Topic::new(name)
    }

    fn topic_with_words(name: &str, words: &[&str]) -> Topic {
        let mut topic = Topic::new(name);
        for word in words {
            topic.add_word(*word);
        }
        topic
    }

    fn names(list: &TopicList) -> Vec<&str> {
        list.iter().map(Topic::name).collect()
    }

    fn list_of(topics: &[&str]) -> TopicList {
        topics.iter().copied().map(topic).collect()
    }

    #[test]
    fn push_back_preserves_order_and_size() {
        let list = list_of(&["a", "b", "c"]);
        assert_eq!(list.len(), 3);
        for (i, name) in ["a", "b", "c"].iter().enumerate() {
            assert_eq!(list.get(i).unwrap().name(), *name);
        }
    }

    #[test]
    fn push_front_then_pop_front_round_trips() {
        let mut list = list_of(&["b", "c"]);
        list.push_front(topic("a"));
        assert_eq!(names(&list), ["a", "b", "c"]);

        let removed = list.pop_front().unwrap();
        assert_eq!(removed.name(), "a");
        list.push_front(topic("a2"));
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(0).unwrap().name(), "a2");
    }

    #[test]
    fn pop_on_empty_list_is_absent_not_an_error() {
        let mut list = TopicList::new();
        assert!(list.pop_front().is_none());
        assert!(list.pop_back().is_none());
    }

    #[test]
    fn single_element_pop_clears_both_ends() {
        let mut list = list_of(&["only"]);
        assert_eq!(list.pop_back().unwrap().name(), "only");
        assert!(list.is_empty());
        // both ends are reset; new insertions work from scratch
        list.push_back(topic("again"));
        assert_eq!(names(&list), ["again"]);
    }

    #[test]
    fn get_out_of_bounds_is_none() {
        let list = list_of(&["a", "b"]);
        assert!(list.get(2).is_none());
        assert!(list.get(usize::MAX).is_none());
    }

    #[test]
    fn insert_before_zero_matches_push_front() {
        let mut a = list_of(&["x", "y"]);
        let mut b = list_of(&["x", "y"]);
        a.insert_before(0, topic("n")).unwrap();
        b.push_front(topic("n"));
        assert_eq!(names(&a), names(&b));
    }

    #[test]
    fn insert_before_len_matches_push_back() {
        let mut a = list_of(&["x", "y"]);
        let mut b = list_of(&["x", "y"]);
        a.insert_before(2, topic("n")).unwrap();
        b.push_back(topic("n"));
        assert_eq!(names(&a), names(&b));
    }

    #[test]
    fn insert_before_zero_on_empty_list_creates_the_first_entry() {
        let mut list = TopicList::new();
        list.insert_before(0, topic("first")).unwrap();
        assert_eq!(names(&list), ["first"]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn insert_before_interior_splices_between_neighbours() {
        let mut list = list_of(&["a", "b", "c"]);
        list.insert_before(1, topic("n")).unwrap();
        assert_eq!(names(&list), ["a", "n", "b", "c"]);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn insert_before_past_len_is_rejected() {
        let mut list = list_of(&["a", "b"]);
        let err = list.insert_before(3, topic("n")).unwrap_err();
        assert_eq!(err, OutOfRange { index: 3, len: 2 });
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn insert_after_tail_index_appends() {
        let mut list = list_of(&["a", "b"]);
        list.insert_after(1, topic("n")).unwrap();
        assert_eq!(names(&list), ["a", "b", "n"]);
    }

    #[test]
    fn insert_after_interior_splices_after_the_entry() {
        let mut list = list_of(&["a", "b", "c"]);
        list.insert_after(0, topic("n")).unwrap();
        assert_eq!(names(&list), ["a", "n", "b", "c"]);
    }

    #[test]
    fn insert_after_rejects_any_index_at_or_past_len() {
        let mut list = list_of(&["a", "b"]);
        assert_eq!(
            list.insert_after(2, topic("n")).unwrap_err(),
            OutOfRange { index: 2, len: 2 }
        );
        assert!(TopicList::new().insert_after(0, topic("n")).is_err());
        assert_eq!(names(&list), ["a", "b"]);
    }

    #[test]
    fn remove_at_excises_exactly_one_entry() {
        for index in 0..3 {
            let mut list = list_of(&["a", "b", "c"]);
            let removed = list.remove_at(index).unwrap();
            assert_eq!(removed.name(), ["a", "b", "c"][index]);
            assert_eq!(list.len(), 2);

            let mut expected = vec!["a", "b", "c"];
            expected.remove(index);
            assert_eq!(names(&list), expected);
        }
    }

    #[test]
    fn remove_at_out_of_bounds_leaves_size_unchanged() {
        let mut list = list_of(&["a", "b", "c"]);
        assert!(list.remove_at(5).is_none());
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn interior_remove_keeps_both_directions_linked() {
        let mut list = list_of(&["a", "b", "c", "d"]);
        list.remove_at(2).unwrap();
        // forward order is intact and the tail is still reachable
        assert_eq!(names(&list), ["a", "b", "d"]);
        assert_eq!(list.pop_back().unwrap().name(), "d");
        assert_eq!(list.pop_back().unwrap().name(), "b");
    }

    #[test]
    fn clear_resets_to_the_empty_state() {
        let mut list = list_of(&["a", "b"]);
        list.clear();
        assert!(list.is_empty());
        assert!(list.get(0).is_none());
    }

    #[test]
    fn freed_slots_are_reused_after_removal() {
        let mut list = list_of(&["a", "b", "c"]);
        list.remove_at(1);
        list.push_back(topic("d"));
        assert_eq!(list.nodes.len(), 3);
        assert_eq!(names(&list), ["a", "c", "d"]);
    }

    #[test]
    fn topics_containing_reports_names_in_list_order() {
        let list: TopicList = [
            topic_with_words("Animals", &["cat", "dog"]),
            topic_with_words("Colors", &["red"]),
            topic_with_words("Pets", &["dog"]),
        ]
        .into_iter()
        .collect();

        assert_eq!(list.topics_containing("dog"), ["Animals", "Pets"]);
        assert!(list.topics_containing("blue").is_empty());
    }

    #[test]
    fn starting_letter_query_is_case_insensitive_and_sorted() {
        let list: TopicList = [
            topic_with_words("Animals", &["cat", "dog", "Cow"]),
            topic_with_words("Colors", &["red", "cyan"]),
        ]
        .into_iter()
        .collect();

        assert_eq!(list.words_starting_with('c'), ["Cow", "cat", "cyan"]);
        assert_eq!(list.words_starting_with('C'), ["Cow", "cat", "cyan"]);
    }

    #[test]
    fn starting_letter_query_excludes_topic_names() {
        let mut list = TopicList::new();
        list.push_back(topic_with_words("Animals", &["cat", "dog"]));
        list.push_back(topic_with_words("Colors", &["red"]));

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().name(), "Animals");
        // "Colors" starts with 'C' but is a topic name, not a word
        assert_eq!(list.words_starting_with('c'), ["cat"]);
    }

    #[test]
    fn mutating_through_get_mut_is_visible_to_queries() {
        let mut list = list_of(&["Animals"]);
        list.get_mut(0).unwrap().add_word("cat");
        assert_eq!(list.topics_containing("cat"), ["Animals"]);
    }
}
