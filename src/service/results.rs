use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::types::{MovieId, ReviewId};
use crate::model::movie::Movie;
use crate::model::person::{Actor, Genre};
use crate::model::review::Review;
use crate::model::user::User;

/// Display-ready view of one movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: MovieId,
    pub title: Option<String>,
    pub year: Option<i32>,
    pub description: Option<String>,
    pub director: Option<String>,
    pub actors: Vec<String>,
    pub genres: Vec<String>,
    pub runtime_minutes: Option<u32>,
    pub review_count: usize,
}

impl From<&Movie> for MovieSummary {
    fn from(movie: &Movie) -> Self {
        MovieSummary {
            id: movie.id().clone(),
            title: movie.title().map(str::to_string),
            year: movie.year(),
            description: movie.description().map(str::to_string),
            director: movie.director().and_then(|d| d.name()).map(str::to_string),
            actors: movie.actors().iter().filter_map(Actor::name).map(str::to_string).collect(),
            genres: movie.genres().iter().filter_map(Genre::name).map(str::to_string).collect(),
            runtime_minutes: movie.runtime_minutes(),
            review_count: movie.reviews().len(),
        }
    }
}

/// One page of a movie listing.
///
/// `offset` and `count` are element counts as requested; `total` is the size of
/// the whole result set the page was cut from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviePage {
    pub movies: Vec<MovieSummary>,
    pub total: usize,
    pub offset: usize,
    pub count: usize,
    /// Name a fuzzy query was resolved to
    pub resolved: Option<String>,
}

impl MoviePage {
    pub fn empty(offset: usize, count: usize) -> Self {
        MoviePage {
            movies: Vec::new(),
            total: 0,
            offset,
            count,
            resolved: None,
        }
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.offset > 0 && self.total > 0
    }

    pub fn has_next(&self) -> bool {
        self.offset + self.movies.len() < self.total
    }

    pub fn previous_offset(&self) -> Option<usize> {
        self.has_previous().then(|| self.offset.saturating_sub(self.count))
    }

    pub fn next_offset(&self) -> Option<usize> {
        self.has_next().then(|| self.offset + self.count)
    }

    /// Offset of the final full-or-partial page
    pub fn last_offset(&self) -> Option<usize> {
        if self.total == 0 || self.count == 0 {
            return None;
        }
        Some((self.total - 1) / self.count * self.count)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewInfo {
    pub id: ReviewId,
    pub movie_id: MovieId,
    pub username: String,
    pub comment: String,
    pub rating: Option<u8>,
    pub timestamp: DateTime<Utc>,
}

impl From<&Review> for ReviewInfo {
    fn from(review: &Review) -> Self {
        ReviewInfo {
            id: review.id(),
            movie_id: review.movie_id().clone(),
            username: review.username().to_string(),
            comment: review.comment().to_string(),
            rating: review.rating(),
            timestamp: review.timestamp(),
        }
    }
}

/// A movie together with its reviews, in the order they were posted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieInfo {
    #[serde(flatten)]
    pub movie: MovieSummary,
    pub reviews: Vec<ReviewInfo>,
}

impl From<&Movie> for MovieInfo {
    fn from(movie: &Movie) -> Self {
        MovieInfo {
            movie: MovieSummary::from(movie),
            reviews: movie.reviews().iter().map(ReviewInfo::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub username: String,
    pub password_hash: String,
    pub watched_movies: Vec<MovieId>,
    pub minutes_watched: u64,
    pub review_count: usize,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        UserInfo {
            username: user.username().to_string(),
            password_hash: user.password_hash().to_string(),
            watched_movies: user.watched_movies().to_vec(),
            minutes_watched: user.minutes_watched(),
            review_count: user.reviews().len(),
        }
    }
}
