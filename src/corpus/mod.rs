// Corpus: sectors, documents, and the text loader.

pub mod loader;
pub mod sector;

pub use loader::{load_documents, load_sector};
pub use sector::Sector;

/// One brand's marketing copy. Created at load time, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub brand: String,
    pub sector: Sector,
    pub text: String,
}
