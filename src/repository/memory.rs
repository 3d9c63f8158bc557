use std::collections::HashMap;
use tracing::debug;
use crate::core::config::{IdentityMode, ResultOrder};
use crate::core::error::Result;
use crate::core::types::{Facet, MovieId};
use crate::index::catalog::CatalogIndex;
use crate::model::movie::Movie;
use crate::model::person::Actor;
use crate::model::review::ReviewLedger;
use crate::model::user::{normalize_username, User};
use crate::repository::Repository;

/// In-memory repository: the catalog index plus the registered users.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    catalog: CatalogIndex,
    users: HashMap<String, User>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &CatalogIndex {
        &self.catalog
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }
}

impl Repository for MemoryRepository {
    fn add_movie(&mut self, movie: Movie) -> bool {
        self.catalog.add(movie)
    }

    fn delete_movie(&mut self, movie: &Movie) -> bool {
        let Some(removed) = self.catalog.delete(movie) else {
            return false;
        };

        // Authors must not keep ids of reviews that went away with the movie
        for review in removed.reviews().iter() {
            if let Some(user) = self.users.get_mut(review.username()) {
                user.remove_review(&review.id());
            }
        }
        debug!(movie_id = %removed.id(), reviews = removed.reviews().len(), "movie deleted with its reviews");
        true
    }

    fn movie(&self, title: &str, year: i32) -> Option<&Movie> {
        self.catalog.get_by_title_year(title, year)
    }

    fn movie_by_id(&self, id: &MovieId) -> Option<&Movie> {
        self.catalog.get_by_id(id)
    }

    fn movies(&self, count: usize, offset: usize) -> Vec<&Movie> {
        self.catalog.get_page(count, offset)
    }

    fn total_movies(&self) -> usize {
        self.catalog.len()
    }

    fn first_movie(&self) -> Option<&Movie> {
        self.catalog.first()
    }

    fn last_movie(&self) -> Option<&Movie> {
        self.catalog.last()
    }

    fn movies_by(&self, facet: Facet, name: &str, order: ResultOrder) -> Vec<&Movie> {
        self.catalog.movies_by(facet, name, order)
    }

    fn facet_names(&self, facet: Facet) -> Vec<&str> {
        self.catalog.facet_names(facet)
    }

    fn actor(&self, name: &str) -> Option<Actor> {
        self.catalog.actor(name)
    }

    fn retitle_movie(&mut self, id: &MovieId, title: &str, year: i32, mode: IdentityMode) -> Result<MovieId> {
        let new_id = self.catalog.retitle(id, title, year, mode)?;
        if &new_id != id {
            for user in self.users.values_mut() {
                user.rekey_watched(id, &new_id);
            }
        }
        Ok(new_id)
    }

    fn reviews_mut(&mut self, movie_id: &MovieId) -> Option<&mut ReviewLedger> {
        self.catalog.reviews_mut(movie_id)
    }

    fn add_user(&mut self, user: User) -> bool {
        if self.users.contains_key(user.username()) {
            debug!(username = user.username(), "duplicate user not added");
            return false;
        }
        self.users.insert(user.username().to_string(), user);
        true
    }

    fn user(&self, username: &str) -> Option<&User> {
        self.users.get(&normalize_username(username))
    }

    fn user_mut(&mut self, username: &str) -> Option<&mut User> {
        self.users.get_mut(&normalize_username(username))
    }

    fn total_users(&self) -> usize {
        self.users.len()
    }

    fn generation(&self) -> u64 {
        self.catalog.generation()
    }
}
