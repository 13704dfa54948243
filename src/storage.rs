/// Flat-file serialization for vocabulary lists.
pub mod vocab_file;
pub use vocab_file::LoadError;
