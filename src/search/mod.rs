pub mod cache;
pub mod fuzzy;

pub use cache::{ResolutionCache, ResolutionKey};
pub use fuzzy::{FuzzyAutomaton, FuzzyMatch, FuzzyMatcher};
