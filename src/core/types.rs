use std::fmt;
use serde::{Serialize, Deserialize};
use uuid::Uuid;

/// Movie identifier: lowercased title, whitespace turned into `_`, then `_<year>`.
///
/// `"Guardians of the Galaxy"` released 2014 becomes `guardians_of_the_galaxy_2014`.
/// A missing title or year is spelled `none`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MovieId(pub String);

impl MovieId {
    pub fn derive(title: Option<&str>, year: Option<i32>) -> Self {
        let title_part: String = match title {
            Some(title) => title
                .to_lowercase()
                .chars()
                .map(|c| if c.is_whitespace() { '_' } else { c })
                .collect(),
            None => "none".to_string(),
        };
        let year_part = match year {
            Some(year) => year.to_string(),
            None => "none".to_string(),
        };
        MovieId(format!("{}_{}", title_part, year_part))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `movie_2000` with suffix 2 becomes `movie_2000_2`.
    pub fn with_suffix(&self, suffix: u32) -> Self {
        MovieId(format!("{}_{}", self.0, suffix))
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MovieId {
    fn from(id: &str) -> Self {
        MovieId(id.to_string())
    }
}

impl From<String> for MovieId {
    fn from(id: String) -> Self {
        MovieId(id)
    }
}

/// Review identifier, a random token independent of author and timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReviewId(pub Uuid);

impl ReviewId {
    pub fn new() -> Self {
        ReviewId(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw).ok().map(ReviewId)
    }
}

impl Default for ReviewId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Attribute a secondary index is keyed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Actor,
    Director,
    Genre,
}

impl Facet {
    pub const ALL: [Facet; 3] = [Facet::Actor, Facet::Director, Facet::Genre];

    pub fn as_str(&self) -> &'static str {
        match self {
            Facet::Actor => "actor",
            Facet::Director => "director",
            Facet::Genre => "genre",
        }
    }
}
