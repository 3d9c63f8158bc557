use tracing::debug;
use crate::core::config::{Config, ResultOrder};
use crate::core::stats::CacheStats;
use crate::core::types::{Facet, MovieId};
use crate::model::movie::Movie;
use crate::repository::Repository;
use crate::search::cache::{ResolutionCache, ResolutionKey};
use crate::search::fuzzy::FuzzyMatcher;
use crate::service::results::{MovieInfo, MoviePage, MovieSummary};

/// Read side used by request handlers: listings, facet lookups (exact or
/// fuzzy) and the movie detail view.
pub struct QueryService {
    matcher: FuzzyMatcher,
    cache: ResolutionCache,
    order: ResultOrder,
}

impl QueryService {
    pub fn new(config: &Config) -> Self {
        QueryService {
            matcher: FuzzyMatcher::new(config.fuzzy.clone()),
            cache: ResolutionCache::new(config.resolution_cache_size),
            order: config.result_order,
        }
    }

    pub fn get_n_movies<R: Repository + ?Sized>(&self, repo: &R, count: usize, offset: usize) -> MoviePage {
        MoviePage {
            movies: repo.movies(count, offset).into_iter().map(MovieSummary::from).collect(),
            total: repo.total_movies(),
            offset,
            count,
            resolved: None,
        }
    }

    pub fn get_movie_count<R: Repository + ?Sized>(&self, repo: &R) -> usize {
        repo.total_movies()
    }

    pub fn get_n_movies_by_actor<R: Repository + ?Sized>(&self, repo: &R, offset: usize, count: usize, actor: &str) -> MoviePage {
        self.get_n_movies_by(repo, Facet::Actor, offset, count, actor)
    }

    pub fn get_n_movies_by_director<R: Repository + ?Sized>(&self, repo: &R, offset: usize, count: usize, director: &str) -> MoviePage {
        self.get_n_movies_by(repo, Facet::Director, offset, count, director)
    }

    pub fn get_n_movies_by_genre<R: Repository + ?Sized>(&self, repo: &R, offset: usize, count: usize, genre: &str) -> MoviePage {
        self.get_n_movies_by(repo, Facet::Genre, offset, count, genre)
    }

    pub fn get_n_movies_by_actor_fuzzy<R: Repository + ?Sized>(&self, repo: &R, offset: usize, count: usize, actor: &str) -> MoviePage {
        self.get_n_movies_by_fuzzy(repo, Facet::Actor, offset, count, actor)
    }

    pub fn get_n_movies_by_director_fuzzy<R: Repository + ?Sized>(&self, repo: &R, offset: usize, count: usize, director: &str) -> MoviePage {
        self.get_n_movies_by_fuzzy(repo, Facet::Director, offset, count, director)
    }

    pub fn get_n_movies_by_genre_fuzzy<R: Repository + ?Sized>(&self, repo: &R, offset: usize, count: usize, genre: &str) -> MoviePage {
        self.get_n_movies_by_fuzzy(repo, Facet::Genre, offset, count, genre)
    }

    /// Exact lookup: `name` must match an indexed name character for character.
    pub fn get_n_movies_by<R: Repository + ?Sized>(
        &self,
        repo: &R,
        facet: Facet,
        offset: usize,
        count: usize,
        name: &str,
    ) -> MoviePage {
        let matches = repo.movies_by(facet, name, self.order);
        MoviePage {
            total: matches.len(),
            movies: paginate(matches, offset, count),
            offset,
            count,
            resolved: None,
        }
    }

    /// Resolves `term` to the closest known name first, then behaves like
    /// [`QueryService::get_n_movies_by`]. No acceptable candidate gives an
    /// empty page with a zero total.
    pub fn get_n_movies_by_fuzzy<R: Repository + ?Sized>(
        &self,
        repo: &R,
        facet: Facet,
        offset: usize,
        count: usize,
        term: &str,
    ) -> MoviePage {
        match self.resolve(repo, facet, term) {
            Some(name) => {
                let mut page = self.get_n_movies_by(repo, facet, offset, count, &name);
                page.resolved = Some(name);
                page
            }
            None => MoviePage::empty(offset, count),
        }
    }

    /// Closest known `facet` name to `term`, if any is within the edit threshold.
    pub fn resolve<R: Repository + ?Sized>(&self, repo: &R, facet: Facet, term: &str) -> Option<String> {
        let generation = repo.generation();
        let key = ResolutionKey::new(facet, term);
        if let Some(cached) = self.cache.get(&key, generation) {
            return cached;
        }

        let resolved = self
            .matcher
            .best_match(term, repo.facet_names(facet))
            .map(|m| m.name);
        debug!(facet = facet.as_str(), term, ?resolved, "resolved fuzzy term");
        self.cache.put(key, generation, resolved.clone());
        resolved
    }

    /// Movie plus its reviews, or `None` for an unknown id.
    pub fn fetch_movie_info_by_id<R: Repository + ?Sized>(&self, repo: &R, id: &MovieId) -> Option<MovieInfo> {
        repo.movie_by_id(id).map(MovieInfo::from)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

fn paginate(movies: Vec<&Movie>, offset: usize, count: usize) -> Vec<MovieSummary> {
    movies
        .into_iter()
        .skip(offset)
        .take(count)
        .map(MovieSummary::from)
        .collect()
}
