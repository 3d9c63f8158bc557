use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use crate::core::types::{MovieId, ReviewId};
use crate::model::movie::Movie;

/// Usernames are compared case-insensitively; store them trimmed and lowercased.
pub fn normalize_username(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Registered user. The password is an opaque hash produced by the credential
/// verifier and is never inspected here.
#[derive(Debug, Clone)]
pub struct User {
    username: String,
    password_hash: String,
    watched_movies: Vec<MovieId>,
    reviews: Vec<ReviewId>,
    minutes_watched: u64,
}

impl User {
    pub fn new(username: &str, password_hash: &str) -> Self {
        User {
            username: normalize_username(username),
            password_hash: password_hash.to_string(),
            watched_movies: Vec::new(),
            reviews: Vec::new(),
            minutes_watched: 0,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn watched_movies(&self) -> &[MovieId] {
        &self.watched_movies
    }

    pub fn reviews(&self) -> &[ReviewId] {
        &self.reviews
    }

    pub fn minutes_watched(&self) -> u64 {
        self.minutes_watched
    }

    /// Marks `movie` as watched. Watching the same movie again changes nothing.
    pub fn watch_movie(&mut self, movie: &Movie) -> bool {
        self.watch(movie.id(), movie.runtime_minutes())
    }

    pub(crate) fn watch(&mut self, movie_id: &MovieId, runtime_minutes: Option<u32>) -> bool {
        if self.watched_movies.contains(movie_id) {
            return false;
        }
        self.watched_movies.push(movie_id.clone());
        self.minutes_watched += u64::from(runtime_minutes.unwrap_or(0));
        true
    }

    pub fn add_review(&mut self, review_id: ReviewId) -> bool {
        if self.reviews.contains(&review_id) {
            return false;
        }
        self.reviews.push(review_id);
        true
    }

    pub fn remove_review(&mut self, review_id: &ReviewId) -> bool {
        let before = self.reviews.len();
        self.reviews.retain(|id| id != review_id);
        self.reviews.len() != before
    }

    pub(crate) fn rekey_watched(&mut self, old: &MovieId, new: &MovieId) {
        for id in &mut self.watched_movies {
            if id == old {
                *id = new.clone();
            }
        }
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.username == other.username
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.username.hash(state);
    }
}

impl PartialOrd for User {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for User {
    fn cmp(&self, other: &Self) -> Ordering {
        self.username.cmp(&other.username)
    }
}
