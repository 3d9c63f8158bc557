use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::MovieId;
use crate::model::person::{clean_name, Actor, Director, Genre};
use crate::model::review::ReviewLedger;

/// Years before this are treated as unknown.
pub const MIN_YEAR: i32 = 1900;

pub(crate) fn clamp_year(year: i32) -> Option<i32> {
    if year >= MIN_YEAR { Some(year) } else { None }
}

/// Catalog position of a movie: lowercased title, then year.
/// Two movies with the same key are the same movie.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey {
    title: String,
    year: Option<i32>,
}

impl SortKey {
    pub fn new(title: &str, year: Option<i32>) -> Self {
        SortKey {
            title: title.trim().to_lowercase(),
            year,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Movie {
    id: MovieId,
    /// Derived from title and year; `id` differs only by a disambiguating suffix
    base_id: MovieId,
    id_suffix: Option<u32>,
    title: Option<String>,
    year: Option<i32>,
    description: Option<String>,
    director: Option<Director>,
    actors: Vec<Actor>,
    genres: Vec<Genre>,
    runtime_minutes: Option<u32>,
    reviews: ReviewLedger,
}

impl Movie {
    /// Blank titles and years before 1900 are stored as absent, never rejected.
    pub fn new(title: &str, year: i32) -> Self {
        let title = clean_name(title);
        let year = clamp_year(year);
        let id = MovieId::derive(title.as_deref(), year);
        Movie {
            base_id: id.clone(),
            id_suffix: None,
            id,
            title,
            year,
            description: None,
            director: None,
            actors: Vec::new(),
            genres: Vec::new(),
            runtime_minutes: None,
            reviews: ReviewLedger::new(),
        }
    }

    pub fn id(&self) -> &MovieId {
        &self.id
    }

    /// Identifier as derived from title and year, before any suffix.
    pub fn base_id(&self) -> &MovieId {
        &self.base_id
    }

    pub fn id_suffix(&self) -> Option<u32> {
        self.id_suffix
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn director(&self) -> Option<&Director> {
        self.director.as_ref()
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub fn runtime_minutes(&self) -> Option<u32> {
        self.runtime_minutes
    }

    pub fn reviews(&self) -> &ReviewLedger {
        &self.reviews
    }

    pub fn reviews_mut(&mut self) -> &mut ReviewLedger {
        &mut self.reviews
    }

    pub fn sort_key(&self) -> SortKey {
        SortKey::new(self.title.as_deref().unwrap_or(""), self.year)
    }

    /// Blank titles are ignored. The identifier is left untouched, see
    /// [`Movie::identity_is_stale`].
    pub fn set_title(&mut self, title: &str) {
        if let Some(title) = clean_name(title) {
            self.title = Some(title);
        }
    }

    /// Years before 1900 are ignored. The identifier is left untouched.
    pub fn set_year(&mut self, year: i32) {
        if let Some(year) = clamp_year(year) {
            self.year = Some(year);
        }
    }

    pub fn set_description(&mut self, description: &str) {
        if let Some(description) = clean_name(description) {
            self.description = Some(description);
        }
    }

    pub fn set_director(&mut self, director: Director) {
        if director.name().is_some() {
            self.director = Some(director);
        }
    }

    pub fn set_runtime_minutes(&mut self, runtime_minutes: i64) -> Result<()> {
        if runtime_minutes <= 0 || runtime_minutes > i64::from(u32::MAX) {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                format!("runtime_minutes should be positive, got {}", runtime_minutes),
            ));
        }
        self.runtime_minutes = Some(runtime_minutes as u32);
        Ok(())
    }

    /// Appends an actor to the cast. Unnamed and repeated actors are skipped.
    pub fn add_actor(&mut self, actor: Actor) -> bool {
        if actor.name().is_none() || self.actors.contains(&actor) {
            return false;
        }
        self.actors.push(actor);
        true
    }

    pub fn remove_actor(&mut self, actor: &Actor) -> bool {
        let before = self.actors.len();
        self.actors.retain(|a| a != actor);
        self.actors.len() != before
    }

    pub fn add_genre(&mut self, genre: Genre) -> bool {
        if genre.name().is_none() || self.genres.contains(&genre) {
            return false;
        }
        self.genres.push(genre);
        true
    }

    pub fn remove_genre(&mut self, genre: &Genre) -> bool {
        let before = self.genres.len();
        self.genres.retain(|g| g != genre);
        self.genres.len() != before
    }

    /// True once `set_title`/`set_year` moved the movie away from the identity
    /// its id was derived from.
    pub fn identity_is_stale(&self) -> bool {
        self.base_id != MovieId::derive(self.title.as_deref(), self.year)
    }

    /// Re-derives the identifier from the current title and year, dropping
    /// any suffix.
    pub(crate) fn refresh_id(&mut self) {
        self.base_id = MovieId::derive(self.title.as_deref(), self.year);
        self.set_id_suffix(None);
    }

    /// Tells apart movies that are not equal but derive the same identifier.
    pub(crate) fn set_id_suffix(&mut self, suffix: Option<u32>) {
        self.id_suffix = suffix;
        self.id = match suffix {
            Some(n) => self.base_id.with_suffix(n),
            None => self.base_id.clone(),
        };
    }
}

impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl Eq for Movie {}

impl Hash for Movie {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sort_key().hash(state);
    }
}

impl PartialOrd for Movie {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Movie {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year {
            Some(year) => write!(f, "<Movie {}, {}>", self.title.as_deref().unwrap_or(""), year),
            None => write!(f, "<Movie {}>", self.title.as_deref().unwrap_or("")),
        }
    }
}
