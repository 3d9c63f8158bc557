use std::collections::HashMap;
use tracing::{debug, warn};
use crate::core::config::{IdentityMode, ResultOrder};
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{Facet, MovieId};
use crate::index::secondary::SecondaryIndex;
use crate::model::movie::{clamp_year, Movie, SortKey};
use crate::model::person::{Actor, Director, Genre};
use crate::model::review::ReviewLedger;

/// Names a movie contributes to the secondary index of `facet`
fn facet_values(movie: &Movie, facet: Facet) -> Vec<&str> {
    match facet {
        Facet::Actor => movie.actors().iter().filter_map(Actor::name).collect(),
        Facet::Director => movie.director().and_then(Director::name).into_iter().collect(),
        Facet::Genre => movie.genres().iter().filter_map(Genre::name).collect(),
    }
}

/// The authoritative movie collection.
///
/// Movies live in exactly one place, the id map. The catalog order and the
/// per-facet posting lists only hold ids, and every mutation updates all of
/// them inside the same `&mut self` call, so a movie can never be reachable
/// through one view after it left another.
#[derive(Debug, Default)]
pub struct CatalogIndex {
    movies: HashMap<MovieId, Movie>,

    /// Sorted by (lowercased title, year); binary searched on insert and lookup
    order: Vec<(SortKey, MovieId)>,

    actors: SecondaryIndex,
    directors: SecondaryIndex,
    genres: SecondaryIndex,

    /// Bumped whenever a movie is added, removed or re-keyed
    generation: u64,
}

impl CatalogIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `movie` at its sorted position. Returns `false` without touching
    /// the catalog when an equal movie (same title ignoring case, same year) is
    /// already present.
    ///
    /// A movie that is not equal to any catalogued one is always added. When its
    /// derived identifier is already held (`"A B"` and `"A_B"` both derive
    /// `a_b_2000`, a leniently retitled movie keeps its old one) it gets the
    /// first free numeric suffix instead.
    pub fn add(&mut self, mut movie: Movie) -> bool {
        let key = movie.sort_key();
        let pos = match self.position(&key) {
            Ok(_) => {
                debug!(movie_id = %movie.id(), "duplicate movie not added");
                return false;
            }
            Err(pos) => pos,
        };

        if self.movies.contains_key(movie.id()) {
            let Some(suffix) = self.free_suffix(movie.base_id()) else {
                warn!(movie_id = %movie.id(), "no free identifier left, not added");
                return false;
            };
            debug!(taken = %movie.id(), ?suffix, "identifier held by another movie");
            movie.set_id_suffix(suffix);
        }

        self.index_movie(&movie);
        self.order.insert(pos, (key, movie.id().clone()));
        debug!(movie_id = %movie.id(), position = pos, "movie added");
        self.movies.insert(movie.id().clone(), movie);
        self.generation += 1;
        true
    }

    /// Removes the movie equal to `movie` and hands it back, reviews included.
    pub fn delete(&mut self, movie: &Movie) -> Option<Movie> {
        let pos = self.position(&movie.sort_key()).ok()?;
        self.detach(pos)
    }

    pub fn delete_by_id(&mut self, id: &MovieId) -> Option<Movie> {
        let key = self.movies.get(id)?.sort_key();
        let pos = self.position(&key).ok()?;
        self.detach(pos)
    }

    /// Case-insensitive title lookup. Years before 1900 look up the "unknown
    /// year" entry, exactly as they would have been stored.
    pub fn get_by_title_year(&self, title: &str, year: i32) -> Option<&Movie> {
        let key = SortKey::new(title, clamp_year(year));
        let pos = self.position(&key).ok()?;
        self.movies.get(&self.order[pos].1)
    }

    pub fn get_by_id(&self, id: &MovieId) -> Option<&Movie> {
        self.movies.get(id)
    }

    /// At most `count` movies in catalog order starting at element `offset`.
    pub fn get_page(&self, count: usize, offset: usize) -> Vec<&Movie> {
        self.order
            .iter()
            .skip(offset)
            .take(count)
            .filter_map(|(_, id)| self.movies.get(id))
            .collect()
    }

    pub fn first(&self) -> Option<&Movie> {
        self.order.first().and_then(|(_, id)| self.movies.get(id))
    }

    pub fn last(&self) -> Option<&Movie> {
        self.order.last().and_then(|(_, id)| self.movies.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn total_count(&self) -> usize {
        self.len()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// All movies in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Movie> {
        self.order.iter().filter_map(|(_, id)| self.movies.get(id))
    }

    /// Movies whose `facet` exactly matches `name`.
    pub fn movies_by(&self, facet: Facet, name: &str, order: ResultOrder) -> Vec<&Movie> {
        let mut movies: Vec<&Movie> = self
            .facet_index(facet)
            .get(name)
            .iter()
            .filter_map(|id| self.movies.get(id))
            .collect();
        if order == ResultOrder::Catalog {
            movies.sort();
        }
        movies
    }

    pub fn count_by(&self, facet: Facet, name: &str) -> usize {
        self.facet_index(facet).get(name).len()
    }

    /// Distinct names known for `facet`, alphabetically
    pub fn facet_names(&self, facet: Facet) -> Vec<&str> {
        self.facet_index(facet).names().collect()
    }

    pub fn facet_len(&self, facet: Facet) -> usize {
        self.facet_index(facet).len()
    }

    /// The actor called `name`, with everyone who shares a catalogued movie
    /// with them as colleagues. Derived on every call, so it follows deletes.
    pub fn actor(&self, name: &str) -> Option<Actor> {
        let ids = self.actors.get(name);
        if ids.is_empty() {
            return None;
        }

        let mut actor = Actor::new(name);
        for movie in ids.iter().filter_map(|id| self.movies.get(id)) {
            for colleague in movie.actors() {
                actor.add_colleague(colleague);
            }
        }
        Some(actor)
    }

    pub fn reviews(&self, id: &MovieId) -> Option<&ReviewLedger> {
        self.movies.get(id).map(Movie::reviews)
    }

    pub fn reviews_mut(&mut self, id: &MovieId) -> Option<&mut ReviewLedger> {
        self.movies.get_mut(id).map(Movie::reviews_mut)
    }

    pub fn total_reviews(&self) -> usize {
        self.movies.values().map(|m| m.reviews().len()).sum()
    }

    /// Changes the title and year of a catalogued movie and moves it to its new
    /// sorted position.
    ///
    /// `Lenient` keeps the identifier derived at construction (it goes stale).
    /// `Strict` derives a fresh identifier, suffixed if another movie holds it,
    /// and re-keys the id map, the facet postings and the movie's reviews.
    /// Either way a change that would make the movie equal to another
    /// catalogued one fails with `Duplicate`.
    pub fn retitle(&mut self, id: &MovieId, title: &str, year: i32, mode: IdentityMode) -> Result<MovieId> {
        let current = self.movies.get(id).ok_or_else(|| {
            Error::new(ErrorKind::NotFound, format!("Movie {} not found", id))
        })?;
        let old_key = current.sort_key();
        let mut updated = current.clone();
        updated.set_title(title);
        updated.set_year(year);
        let new_key = updated.sort_key();

        if new_key != old_key && self.position(&new_key).is_ok() {
            return Err(Error::new(
                ErrorKind::Duplicate,
                format!("Another movie is already titled {:?} ({})", title, year),
            ));
        }

        if mode == IdentityMode::Strict {
            updated.refresh_id();
            if updated.id() != id && self.movies.contains_key(updated.id()) {
                let suffix = self.free_suffix(updated.base_id()).ok_or_else(|| {
                    Error::new(ErrorKind::Duplicate, format!("No free identifier for {}", updated.base_id()))
                })?;
                updated.set_id_suffix(suffix);
            }
        }

        let new_id = updated.id().clone();
        if let Ok(pos) = self.position(&old_key) {
            self.order.remove(pos);
        }
        let pos = self.position(&new_key).unwrap_or_else(|pos| pos);
        self.order.insert(pos, (new_key, new_id.clone()));

        if &new_id != id {
            updated.reviews_mut().rebind(&new_id);
            for facet in Facet::ALL {
                for name in facet_values(&updated, facet) {
                    self.facet_index_mut(facet).rename(name, id, &new_id);
                }
            }
            self.movies.remove(id);
        }

        debug!(old_id = %id, new_id = %new_id, ?mode, "movie retitled");
        self.movies.insert(new_id.clone(), updated);
        self.generation += 1;
        Ok(new_id)
    }

    /// `Some(None)` when `base` itself is free, otherwise the smallest suffix
    /// starting at 2 that nobody holds.
    fn free_suffix(&self, base: &MovieId) -> Option<Option<u32>> {
        if !self.movies.contains_key(base) {
            return Some(None);
        }
        (2..=u32::MAX)
            .find(|n| !self.movies.contains_key(&base.with_suffix(*n)))
            .map(Some)
    }

    fn position(&self, key: &SortKey) -> std::result::Result<usize, usize> {
        self.order.binary_search_by(|(probe, _)| probe.cmp(key))
    }

    fn detach(&mut self, pos: usize) -> Option<Movie> {
        let (_, id) = self.order.remove(pos);
        let movie = self.movies.remove(&id)?;
        self.unindex_movie(&movie);
        self.generation += 1;
        debug!(movie_id = %id, "movie removed");
        Some(movie)
    }

    fn index_movie(&mut self, movie: &Movie) {
        for facet in Facet::ALL {
            for name in facet_values(movie, facet) {
                self.facet_index_mut(facet).insert(name, movie.id());
            }
        }
    }

    fn unindex_movie(&mut self, movie: &Movie) {
        for facet in Facet::ALL {
            for name in facet_values(movie, facet) {
                self.facet_index_mut(facet).remove(name, movie.id());
            }
        }
    }

    fn facet_index(&self, facet: Facet) -> &SecondaryIndex {
        match facet {
            Facet::Actor => &self.actors,
            Facet::Director => &self.directors,
            Facet::Genre => &self.genres,
        }
    }

    fn facet_index_mut(&mut self, facet: Facet) -> &mut SecondaryIndex {
        match facet {
            Facet::Actor => &mut self.actors,
            Facet::Director => &mut self.directors,
            Facet::Genre => &mut self.genres,
        }
    }
}
