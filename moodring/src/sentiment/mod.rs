mod analyzer;
pub mod lexicon;
mod model;
mod scorer;

pub use analyzer::LexiconAnalyzer;
pub use lexicon::Lexicon;
pub use model::SentimentModel;
pub use scorer::Scorer;
