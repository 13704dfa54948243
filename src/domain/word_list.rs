//! Singly linked word storage.
//!
//! Nodes live in an arena (`Vec` of slots) and link to each other by slot
//! index rather than by pointer, so unlinking a node is a local index swap.
//! Freed slots are kept on a free list and reused by later insertions. The
//! list preserves insertion order and permits duplicates.

/// A node slot in the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    word: String,
    next: Option<usize>,
}

/// An ordered, duplicate-permitting sequence of words.
///
/// Search, removal and replacement are by exact value and affect the first
/// match in head-to-tail order.
#[derive(Debug, Default, Clone)]
pub struct WordList {
    nodes: Vec<Node>,
    /// Slots released by [`WordList::remove`], available for reuse.
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl WordList {
    /// Creates an empty word list.
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

    /// Returns the number of words in the list.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no words.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends a word at the tail of the list.
    pub fn push_back(&mut self, word: impl Into<String>) {
        let slot = self.alloc(Node {
            word: word.into(),
            next: None,
        });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
    }

    /// Returns `true` if the list contains a word exactly equal to `word`.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.iter().any(|w| w == word)
    }

    /// Removes the first word exactly equal to `word`.
    ///
    /// Returns `false` if no match exists; the list is unchanged in that
    /// case.
    pub fn remove(&mut self, word: &str) -> bool {
        let mut prev: Option<usize> = None;
        let mut current = self.head;

        while let Some(slot) = current {
            if self.nodes[slot].word == word {
                let next = self.nodes[slot].next;
                match prev {
                    Some(prev) => self.nodes[prev].next = next,
                    None => self.head = next,
                }
                if self.tail == Some(slot) {
                    self.tail = prev;
                }
                self.release(slot);
                self.len -= 1;
                return true;
            }
            prev = current;
            current = self.nodes[slot].next;
        }
        false
    }

    /// Overwrites the first word exactly equal to `old` with `new`.
    ///
    /// Node identity and position are unchanged. Returns `false` if no match
    /// exists.
    pub fn replace(&mut self, old: &str, new: impl Into<String>) -> bool {
        let mut current = self.head;
        while let Some(slot) = current {
            if self.nodes[slot].word == old {
                self.nodes[slot].word = new.into();
                return true;
            }
            current = self.nodes[slot].next;
        }
        false
    }

    /// Materializes the list into an ordered snapshot.
    ///
    /// The snapshot is disconnected from the list; later mutations of either
    /// do not affect the other.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(ToOwned::to_owned).collect()
    }

    /// Visits the words in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let mut current = self.head;
        std::iter::from_fn(move || {
            let slot = current?;
            current = self.nodes[slot].next;
            Some(self.nodes[slot].word.as_str())
        })
    }

    /// Removes all words from the list.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
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

    fn release(&mut self, slot: usize) {
        // The slot stays allocated but unreachable until reused.
        self.nodes[slot].word.clear();
        self.nodes[slot].next = None;
        self.free.push(slot);
    }
}

impl PartialEq for WordList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for WordList {}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for word in iter {
            list.push_back(word);
        }
        list
    }
}
