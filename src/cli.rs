//! Command line interface for the vocabulary manager.

use std::path::PathBuf;

mod menu;
mod terminal;

use clap::ArgAction;
use menu::Session;
use terminal::Colorize;
use tracing::instrument;
use vocab::{Config, TopicList, storage::vocab_file};

/// Parse a single alphabetic letter from a CLI argument.
///
/// This is a CLI boundary function; the starting-letter query itself is
/// case-insensitive, so case is accepted here and normalized later.
fn parse_letter(s: &str) -> Result<char, String> {
    let mut chars = s.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => Ok(c),
        _ => Err(format!("'{s}' is not a single letter")),
    }
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The vocabulary file to operate on
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    /// Dispatches the selected subcommand, defaulting to the interactive
    /// menu.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or vocabulary file cannot be
    /// read, or if a subcommand fails.
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = match &self.config {
            Some(path) => Config::load(path).map_err(|e| anyhow::anyhow!(e))?,
            None => Config::default(),
        };
        let file = self.file.or_else(|| config.file.clone());

        self.command
            .unwrap_or_else(|| Command::Menu(Menu {}))
            .run(file, config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Run the interactive vocabulary menu (default)
    Menu(Menu),

    /// List topics in order
    List(List),

    /// Show the topics containing an exact word
    Search(Search),

    /// Show all words starting with a letter, sorted
    StartsWith(StartsWith),
}

impl Command {
    fn run(self, file: Option<PathBuf>, config: Config) -> anyhow::Result<()> {
        match self {
            Self::Menu(command) => command.run(file, config)?,
            Self::List(command) => command.run(file.as_deref())?,
            Self::Search(command) => command.run(file.as_deref())?,
            Self::StartsWith(command) => command.run(file.as_deref())?,
        }
        Ok(())
    }
}

/// Loads the vocabulary file backing the non-interactive subcommands.
fn load_required(file: Option<&std::path::Path>) -> anyhow::Result<TopicList> {
    let Some(path) = file else {
        anyhow::bail!("no vocabulary file given (use --file or set one in the config)");
    };
    match vocab_file::load(path) {
        Ok(list) => Ok(list),
        Err(vocab::LoadError::NotFound) => {
            anyhow::bail!("the file '{}' was not found", path.display())
        }
        Err(e) => Err(anyhow::Error::new(e).context(format!("failed to load {}", path.display()))),
    }
}

#[derive(Debug, clap::Parser)]
pub struct Menu {}

impl Menu {
    #[instrument(skip(config))]
    fn run(self, file: Option<PathBuf>, config: Config) -> anyhow::Result<()> {
        let list = match &file {
            Some(path) => match vocab_file::load(path) {
                Ok(list) => {
                    println!("Loaded {} topic(s) from '{}'", list.len(), path.display());
                    list
                }
                Err(vocab::LoadError::NotFound) => {
                    eprintln!(
                        "{}",
                        format!("The file '{}' was not found", path.display()).error()
                    );
                    TopicList::new()
                }
                Err(e) => return Err(e.into()),
            },
            None => TopicList::new(),
        };

        Session::new(list, config, file).run()
    }
}

#[derive(Debug, clap::Parser)]
pub struct List {
    /// Also print each topic's words
    #[arg(long)]
    words: bool,
}

impl List {
    #[instrument]
    fn run(self, file: Option<&std::path::Path>) -> anyhow::Result<()> {
        let list = load_required(file)?;
        if list.is_empty() {
            println!("{}", "No topics".dim());
            return Ok(());
        }
        for (index, topic) in list.iter().enumerate() {
            println!("{}: {}", index + 1, topic.name());
            if self.words {
                for word in topic.words() {
                    println!("   {word}");
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Search {
    /// The word to search for (exact match)
    word: String,
}

impl Search {
    #[instrument]
    fn run(self, file: Option<&std::path::Path>) -> anyhow::Result<()> {
        let list = load_required(file)?;
        let topics = list.topics_containing(&self.word);
        if topics.is_empty() {
            println!("The word '{}' is not present in any topic", self.word);
        } else {
            println!("The word '{}' is in the following topic(s):", self.word);
            for name in topics {
                println!("  {name}");
            }
        }
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct StartsWith {
    /// The letter to match (case-insensitive)
    #[clap(value_parser = parse_letter)]
    letter: char,
}

impl StartsWith {
    #[instrument]
    fn run(self, file: Option<&std::path::Path>) -> anyhow::Result<()> {
        let list = load_required(file)?;
        let words = list.words_starting_with(self.letter);
        if words.is_empty() {
            println!("No words found starting with '{}'", self.letter);
        } else {
            println!("Words starting with '{}':", self.letter);
            for word in words {
                println!("  {word}");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::parse_letter;

    #[test]
    fn parse_letter_accepts_a_single_alphabetic_character() {
        assert_eq!(parse_letter("c"), Ok('c'));
        assert_eq!(parse_letter(" Z "), Ok('Z'));
    }

    #[test]
    fn parse_letter_rejects_everything_else() {
        assert!(parse_letter("").is_err());
        assert!(parse_letter("ab").is_err());
        assert!(parse_letter("1").is_err());
        assert!(parse_letter("?").is_err());
    }
}
