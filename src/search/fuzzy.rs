use levenshtein_automata::{Distance, LevenshteinAutomatonBuilder, DFA};
use tracing::debug;
use crate::core::config::FuzzyConfig;

/// Largest edit distance we build automata for
const MAX_SUPPORTED_DISTANCE: u8 = 4;

/// Candidate accepted by the matcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyMatch {
    /// Candidate exactly as it was supplied
    pub name: String,
    pub distance: u8,
}

/// Automaton for fuzzy matching with edit distance
pub struct FuzzyAutomaton {
    /// The normalized term to match
    term: String,

    /// Maximum allowed edit distance
    max_edit_distance: u8,

    dfa: DFA,
}

impl FuzzyAutomaton {
    pub fn new(builder: &LevenshteinAutomatonBuilder, term: &str, max_edit_distance: u8) -> Self {
        Self {
            term: term.to_string(),
            max_edit_distance,
            dfa: builder.build_dfa(term),
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Edit distance to `candidate`, or `None` when it is beyond the threshold
    pub fn distance(&self, candidate: &str) -> Option<u8> {
        let mut state = self.dfa.initial_state();

        for &byte in candidate.as_bytes() {
            state = self.dfa.transition(state, byte);
        }

        match self.dfa.distance(state) {
            Distance::Exact(d) if d <= self.max_edit_distance => Some(d),
            _ => None,
        }
    }
}

/// Resolves a free-text term to the closest of a set of known names.
///
/// Holds only configuration and the prebuilt automaton builders, so the same
/// term against the same candidates always yields the same answer.
pub struct FuzzyMatcher {
    config: FuzzyConfig,

    /// `builders[d]` builds automata accepting up to `d` edits
    builders: Vec<LevenshteinAutomatonBuilder>,
}

impl FuzzyMatcher {
    pub fn new(mut config: FuzzyConfig) -> Self {
        config.max_edit_distance = config.max_edit_distance.clamp(1, MAX_SUPPORTED_DISTANCE);
        let builders = (0..=config.max_edit_distance)
            .map(|d| LevenshteinAutomatonBuilder::new(d, config.transpositions))
            .collect();
        Self { config, builders }
    }

    pub fn config(&self) -> &FuzzyConfig {
        &self.config
    }

    /// Number of edits tolerated for `term`: one for short terms, two for
    /// typical names, three past `long_term_len`, never above the configured cap.
    pub fn threshold(&self, term: &str) -> u8 {
        let len = term.chars().count();
        let scaled = if len <= self.config.short_term_len {
            1
        } else if len <= self.config.long_term_len {
            2
        } else {
            3
        };
        scaled.min(self.config.max_edit_distance)
    }

    /// Closest candidate to `term`, compared case-insensitively.
    ///
    /// Ties go to the candidate seen first, so callers wanting a stable answer
    /// must iterate in a stable order.
    pub fn best_match<'a, I>(&self, term: &str, candidates: I) -> Option<FuzzyMatch>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let normalized = normalize(term);
        if normalized.is_empty() {
            return None;
        }

        let max_distance = self.threshold(&normalized);
        let automaton = FuzzyAutomaton::new(
            &self.builders[max_distance as usize],
            &normalized,
            max_distance,
        );

        let mut best: Option<FuzzyMatch> = None;
        for candidate in candidates {
            let Some(distance) = automaton.distance(&normalize(candidate)) else {
                continue;
            };
            if best.as_ref().map_or(true, |b| distance < b.distance) {
                best = Some(FuzzyMatch {
                    name: candidate.to_string(),
                    distance,
                });
                if distance == 0 {
                    break;
                }
            }
        }

        debug!(term, threshold = max_distance, resolved = ?best.as_ref().map(|m| &m.name), "fuzzy resolution");
        best
    }
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new(FuzzyConfig::default())
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
