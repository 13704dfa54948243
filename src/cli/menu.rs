//! Interactive menu session.
//!
//! A thin dispatch loop over the core containers: every menu entry maps onto
//! one [`TopicList`] or [`Topic`] operation. The session owns the live list;
//! loading a file parses into a temporary list and swaps it in only on
//! success, so a failed load never loses the current state.

use std::path::PathBuf;

use dialoguer::{Input, Select};
use tracing::debug;
use vocab::{Config, LoadError, Topic, TopicList, storage::vocab_file};

use super::terminal::{self, Colorize};

const MAIN_MENU: &[&str] = &[
    "Browse a topic",
    "Insert a new topic before another",
    "Insert a new topic after another",
    "Remove a topic",
    "Modify a topic",
    "Search topics for a word",
    "Load from a file",
    "Show all words starting with a given letter",
    "Save to file",
    "Exit",
];

/// One interactive vocabulary session and its state.
pub struct Session {
    list: TopicList,
    config: Config,
    file: Option<PathBuf>,
}

impl Session {
    /// Creates a session over an initial topic list.
    pub const fn new(list: TopicList, config: Config, file: Option<PathBuf>) -> Self {
        Self { list, config, file }
    }

    /// Runs the menu loop until the user exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal prompt fails.
    pub fn run(mut self) -> anyhow::Result<()> {
        loop {
            println!();
            let choice = Select::new()
                .with_prompt("Vocabulary Control Center")
                .items(MAIN_MENU)
                .default(0)
                .interact()?;

            match choice {
                0 => self.browse()?,
                1 => self.insert_topic(Placement::Before)?,
                2 => self.insert_topic(Placement::After)?,
                3 => self.remove_topic()?,
                4 => self.modify_topic()?,
                5 => self.search_word()?,
                6 => self.load_file()?,
                7 => self.words_starting_with()?,
                8 => self.save_file()?,
                _ => {
                    println!("Goodbye");
                    return Ok(());
                }
            }
        }
    }

    /// Lets the user pick a topic by its 1-based position.
    ///
    /// Returns the 0-based index, or `None` when the list is empty or the
    /// user backs out.
    fn pick_topic(&self, prompt: &str) -> anyhow::Result<Option<usize>> {
        if self.list.is_empty() {
            println!("{}", "There are no topics yet".dim());
            return Ok(None);
        }

        let mut items: Vec<String> = self
            .list
            .iter()
            .enumerate()
            .map(|(index, topic)| format!("{}: {}", index + 1, topic.name()))
            .collect();
        items.push("Back".to_string());

        let choice = Select::new()
            .with_prompt(prompt)
            .items(&items)
            .default(0)
            .interact()?;

        if choice == self.list.len() {
            return Ok(None);
        }
        Ok(Some(choice))
    }

    fn browse(&self) -> anyhow::Result<()> {
        let Some(index) = self.pick_topic("Pick a topic")? else {
            return Ok(());
        };
        let Some(topic) = self.list.get(index) else {
            println!("{}", format!("There is no topic {}", index + 1).error());
            return Ok(());
        };

        println!("Topic: {} ({} word(s))", topic.name(), topic.word_count());
        let words = topic.words();
        if words.is_empty() {
            println!("{}", "No words found for this topic".dim());
            return Ok(());
        }

        // Columnar layout, 1-based indices; narrow terminals get two columns.
        let per_row = if terminal::is_narrow() {
            2
        } else {
            self.config.words_per_row.max(1)
        };
        for (i, word) in words.iter().enumerate() {
            if i > 0 && i % per_row == 0 {
                println!();
            }
            print!("{}: {:<25}\t", i + 1, word);
        }
        println!();
        Ok(())
    }

    fn insert_topic(&mut self, placement: Placement) -> anyhow::Result<()> {
        // An empty list has no position to pick; the new topic becomes the
        // first entry.
        let index = if self.list.is_empty() {
            println!("{}", "No topics yet; this will be the first".dim());
            None
        } else {
            let prompt = match placement {
                Placement::Before => "Insert before which topic?",
                Placement::After => "Insert after which topic?",
            };
            match self.pick_topic(prompt)? {
                Some(index) => Some(index),
                None => return Ok(()),
            }
        };

        let name: String = Input::new().with_prompt("Topic name").interact_text()?;
        let mut topic = Topic::new(name.trim());
        println!("Enter words for '{}' (empty line to finish):", topic.name());
        loop {
            let word: String = Input::new()
                .with_prompt("Word")
                .allow_empty(true)
                .interact_text()?;
            let word = word.trim();
            if word.is_empty() {
                break;
            }
            topic.add_word(word);
        }

        let result = match (index, placement) {
            (None, _) => {
                self.list.push_back(topic);
                Ok(())
            }
            (Some(index), Placement::Before) => self.list.insert_before(index, topic),
            (Some(index), Placement::After) => self.list.insert_after(index, topic),
        };
        match result {
            Ok(()) => println!("{}", "Topic inserted".success()),
            Err(e) => println!("{}", format!("Invalid position: {e}").error()),
        }
        Ok(())
    }

    fn remove_topic(&mut self) -> anyhow::Result<()> {
        let Some(index) = self.pick_topic("Remove which topic?")? else {
            return Ok(());
        };
        match self.list.remove_at(index) {
            Some(removed) => println!("Removed topic: {}", removed.name()),
            None => println!(
                "{}",
                format!("There is no topic at position {}", index + 1).error()
            ),
        }
        Ok(())
    }

    fn modify_topic(&mut self) -> anyhow::Result<()> {
        let Some(index) = self.pick_topic("Modify which topic?")? else {
            return Ok(());
        };

        let action = Select::new()
            .with_prompt("Modify topic")
            .items(&["Add a word", "Remove a word", "Change a word", "Back"])
            .default(0)
            .interact()?;

        let Some(topic) = self.list.get_mut(index) else {
            println!("{}", format!("There is no topic {}", index + 1).error());
            return Ok(());
        };

        match action {
            0 => {
                let word: String = Input::new().with_prompt("Word to add").interact_text()?;
                topic.add_word(word.trim());
                println!("{}", "Word added".success());
            }
            1 => {
                let word: String = Input::new().with_prompt("Word to remove").interact_text()?;
                let word = word.trim();
                if topic.remove_word(word) {
                    println!("{}", "Word removed".success());
                } else {
                    println!("{}", format!("There is no word '{word}'").error());
                }
            }
            2 => {
                let old: String = Input::new().with_prompt("Word to change").interact_text()?;
                let old = old.trim();
                if !topic.contains_word(old) {
                    println!("{}", format!("There is no word '{old}'").error());
                    return Ok(());
                }
                let new: String = Input::new().with_prompt("New word").interact_text()?;
                topic.change_word(old, new.trim());
                println!("{}", "Word changed".success());
            }
            _ => {}
        }
        Ok(())
    }

    fn search_word(&self) -> anyhow::Result<()> {
        let word: String = Input::new()
            .with_prompt("Word to search for")
            .interact_text()?;
        let word = word.trim();

        let topics = self.list.topics_containing(word);
        if topics.is_empty() {
            println!("The word '{word}' is not present in any topic");
        } else {
            println!("The word '{word}' is in the following topic(s):");
            for name in topics {
                println!("  {name}");
            }
        }
        Ok(())
    }

    fn words_starting_with(&self) -> anyhow::Result<()> {
        let input: String = Input::new().with_prompt("Enter a letter").interact_text()?;
        let Ok(letter) = super::parse_letter(&input) else {
            println!("{}", "Please enter a single letter".error());
            return Ok(());
        };

        let words = self.list.words_starting_with(letter);
        if words.is_empty() {
            println!("No words found starting with '{letter}'");
        } else {
            println!("Words starting with '{letter}':");
            for word in words {
                println!("  {word}");
            }
        }
        Ok(())
    }

    fn load_file(&mut self) -> anyhow::Result<()> {
        let filename: String = Input::new()
            .with_prompt("Filename to load from")
            .interact_text()?;
        let path = PathBuf::from(filename.trim());

        // Parse into a temporary list; the live list is replaced only on
        // success.
        match vocab_file::load(&path) {
            Ok(list) => {
                debug!(topics = list.len(), "replacing session list");
                println!("Loaded {} topic(s). Done loading", list.len());
                self.list = list;
                self.file = Some(path);
            }
            Err(LoadError::NotFound) => {
                println!(
                    "{}",
                    format!("The file '{}' was not found", path.display()).error()
                );
            }
            Err(LoadError::Io(e)) => {
                println!(
                    "{}",
                    format!("Could not read '{}': {e}", path.display()).error()
                );
            }
        }
        Ok(())
    }

    fn save_file(&mut self) -> anyhow::Result<()> {
        let mut prompt = Input::new().with_prompt("Filename to save to");
        if let Some(file) = &self.file {
            prompt = prompt.default(file.display().to_string());
        }
        let filename: String = prompt.interact_text()?;
        let path = PathBuf::from(filename.trim());

        match vocab_file::save(&path, &self.list) {
            Ok(()) => {
                println!(
                    "{}",
                    format!("The vocabularies have been saved to '{}'", path.display()).success()
                );
                self.file = Some(path);
            }
            Err(e) => println!(
                "{}",
                format!("The file '{}' could not be written: {e}", path.display()).error()
            ),
        }
        Ok(())
    }
}

/// Where a new topic lands relative to the picked position.
#[derive(Debug, Clone, Copy)]
enum Placement {
    Before,
    After,
}
