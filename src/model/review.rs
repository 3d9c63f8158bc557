use chrono::{DateTime, Utc};
use crate::core::types::{MovieId, ReviewId};
use crate::model::user::normalize_username;

/// A user's review of one movie.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    id: ReviewId,
    movie_id: MovieId,
    username: String,
    comment: String,
    rating: Option<u8>,
    timestamp: DateTime<Utc>,
}

impl Review {
    /// New review stamped with the current time.
    pub fn new(movie_id: MovieId, username: &str, comment: &str, rating: i64) -> Self {
        Self::with_timestamp(movie_id, username, comment, rating, Utc::now())
    }

    /// Ratings outside `1..=10` are stored as `None` rather than rejected.
    pub fn with_timestamp(
        movie_id: MovieId,
        username: &str,
        comment: &str,
        rating: i64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Review {
            id: ReviewId::new(),
            movie_id,
            username: normalize_username(username),
            comment: comment.to_string(),
            rating: clamp_rating(rating),
            timestamp,
        }
    }

    pub fn id(&self) -> ReviewId {
        self.id
    }

    pub fn movie_id(&self) -> &MovieId {
        &self.movie_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn rating(&self) -> Option<u8> {
        self.rating
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

fn clamp_rating(rating: i64) -> Option<u8> {
    if (1..=10).contains(&rating) {
        Some(rating as u8)
    } else {
        None
    }
}

/// Reviews attached to one movie, kept in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct ReviewLedger {
    reviews: Vec<Review>,
}

impl ReviewLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `review`; a review whose id is already present is not added twice.
    pub fn add(&mut self, review: Review) -> bool {
        if self.contains(&review.id) {
            return false;
        }
        self.reviews.push(review);
        true
    }

    /// Removes the review with `id`. Missing ids are a no-op.
    pub fn remove(&mut self, id: &ReviewId) -> Option<Review> {
        let pos = self.reviews.iter().position(|r| &r.id == id)?;
        Some(self.reviews.remove(pos))
    }

    pub fn get(&self, id: &ReviewId) -> Option<&Review> {
        self.reviews.iter().find(|r| &r.id == id)
    }

    pub fn contains(&self, id: &ReviewId) -> bool {
        self.reviews.iter().any(|r| &r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Review> {
        self.reviews.iter()
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Points every review at `movie_id` after the owning movie was re-keyed.
    pub(crate) fn rebind(&mut self, movie_id: &MovieId) {
        for review in &mut self.reviews {
            review.movie_id = movie_id.clone();
        }
    }
}
