use std::sync::Arc;
use parking_lot::RwLock;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::stats::CatalogStats;
use crate::core::types::{Facet, MovieId, ReviewId};
use crate::loader::{self, LoadReport, MovieRecord, ReviewRecord, UserRecord};
use crate::model::movie::Movie;
use crate::model::person::Actor;
use crate::repository::{MemoryRepository, Repository};
use crate::service::auth::{self, CredentialVerifier};
use crate::service::query::QueryService;
use crate::service::results::{MovieInfo, MoviePage, MovieSummary, ReviewInfo, UserInfo};
use crate::service::review;

/// Shared handle to one catalog, passed explicitly to every request handler.
///
/// Mutations hold the write lock for their whole duration, queries the read
/// lock, so a reader never sees the sorted order and the id map disagree.
/// Cloning is cheap and clones share the same catalog.
#[derive(Clone)]
pub struct Library {
    config: Arc<Config>,
    repo: Arc<RwLock<MemoryRepository>>,  // catalog + users
    queries: Arc<QueryService>,           // matcher + resolution cache
    verifier: Arc<dyn CredentialVerifier>,
}

impl Library {
    pub fn new(config: Config, verifier: Arc<dyn CredentialVerifier>) -> Self {
        let queries = Arc::new(QueryService::new(&config));
        Library {
            config: Arc::new(config),
            repo: Arc::new(RwLock::new(MemoryRepository::new())),
            queries,
            verifier,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn load_movies<I: IntoIterator<Item = MovieRecord>>(&self, records: I) -> LoadReport {
        loader::load_movies(&mut *self.repo.write(), records)
    }

    pub fn load_users<I: IntoIterator<Item = UserRecord>>(&self, records: I) -> LoadReport {
        loader::load_users(&mut *self.repo.write(), records)
    }

    pub fn load_reviews<I: IntoIterator<Item = ReviewRecord>>(&self, records: I) -> Result<LoadReport> {
        loader::load_reviews(&mut *self.repo.write(), records)
    }

    pub fn add_movie(&self, movie: Movie) -> bool {
        self.repo.write().add_movie(movie)
    }

    pub fn delete_movie(&self, movie: &Movie) -> bool {
        self.repo.write().delete_movie(movie)
    }

    /// Retitles a movie following the configured identity mode.
    pub fn retitle_movie(&self, id: &MovieId, title: &str, year: i32) -> Result<MovieId> {
        self.repo
            .write()
            .retitle_movie(id, title, year, self.config.identity_mode)
    }

    pub fn total_movies(&self) -> usize {
        self.repo.read().total_movies()
    }

    pub fn get_n_movies(&self, count: usize, offset: usize) -> MoviePage {
        self.queries.get_n_movies(&*self.repo.read(), count, offset)
    }

    /// One listing page of the configured page size
    pub fn listing(&self, offset: usize) -> MoviePage {
        self.get_n_movies(self.config.page_size, offset)
    }

    pub fn movie(&self, title: &str, year: i32) -> Option<MovieSummary> {
        self.repo.read().movie(title, year).map(MovieSummary::from)
    }

    pub fn first_movie(&self) -> Option<MovieSummary> {
        self.repo.read().first_movie().map(MovieSummary::from)
    }

    pub fn last_movie(&self) -> Option<MovieSummary> {
        self.repo.read().last_movie().map(MovieSummary::from)
    }

    pub fn movies_by(&self, facet: Facet, offset: usize, count: usize, name: &str) -> MoviePage {
        self.queries.get_n_movies_by(&*self.repo.read(), facet, offset, count, name)
    }

    pub fn movies_by_fuzzy(&self, facet: Facet, offset: usize, count: usize, term: &str) -> MoviePage {
        self.queries.get_n_movies_by_fuzzy(&*self.repo.read(), facet, offset, count, term)
    }

    /// Exact lookup first, fuzzy resolution only when nothing matched exactly.
    pub fn search(&self, facet: Facet, offset: usize, count: usize, term: &str) -> MoviePage {
        let repo = self.repo.read();
        let page = self.queries.get_n_movies_by(&*repo, facet, offset, count, term);
        if page.total > 0 {
            return page;
        }
        self.queries.get_n_movies_by_fuzzy(&*repo, facet, offset, count, term)
    }

    pub fn facet_names(&self, facet: Facet) -> Vec<String> {
        self.repo
            .read()
            .facet_names(facet)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn actor(&self, name: &str) -> Option<Actor> {
        self.repo.read().actor(name)
    }

    pub fn movie_info(&self, id: &MovieId) -> Option<MovieInfo> {
        self.queries.fetch_movie_info_by_id(&*self.repo.read(), id)
    }

    pub fn add_review(&self, movie_id: &MovieId, username: &str, comment: &str, rating: i64) -> Option<ReviewId> {
        review::add_review(&mut *self.repo.write(), movie_id, username, comment, rating)
    }

    pub fn remove_review(&self, review_id: &ReviewId, movie_id: &MovieId) -> bool {
        review::remove_review(&mut *self.repo.write(), review_id, movie_id)
    }

    pub fn reviews(&self, movie_id: &MovieId) -> Option<Vec<ReviewInfo>> {
        review::reviews_for_movie(&*self.repo.read(), movie_id)
    }

    pub fn register_user(&self, username: &str, password: &str) -> Result<()> {
        auth::register_user(&mut *self.repo.write(), self.verifier.as_ref(), username, password)
    }

    pub fn authenticate(&self, username: &str, password: &str) -> Result<UserInfo> {
        auth::authenticate_user(&*self.repo.read(), self.verifier.as_ref(), username, password)
    }

    pub fn user(&self, username: &str) -> Option<UserInfo> {
        auth::get_user(&*self.repo.read(), username)
    }

    pub fn watch_movie(&self, username: &str, movie_id: &MovieId) -> Option<bool> {
        auth::watch_movie(&mut *self.repo.write(), username, movie_id)
    }

    pub fn stats(&self) -> CatalogStats {
        let repo = self.repo.read();
        let catalog = repo.catalog();
        CatalogStats {
            total_movies: catalog.len(),
            total_users: repo.total_users(),
            total_reviews: catalog.total_reviews(),
            actor_count: catalog.facet_len(Facet::Actor),
            director_count: catalog.facet_len(Facet::Director),
            genre_count: catalog.facet_len(Facet::Genre),
            generation: catalog.generation(),
            resolution_cache: self.queries.cache_stats(),
        }
    }
}
