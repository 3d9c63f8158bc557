use tracing::debug;
use crate::core::types::{MovieId, ReviewId};
use crate::model::review::Review;
use crate::repository::Repository;
use crate::service::results::ReviewInfo;

/// Posts a review on `movie_id`. Returns the new review's id, or `None` when
/// the movie is unknown.
pub fn add_review<R: Repository + ?Sized>(
    repo: &mut R,
    movie_id: &MovieId,
    username: &str,
    comment: &str,
    rating: i64,
) -> Option<ReviewId> {
    attach_review(repo, Review::new(movie_id.clone(), username, comment, rating))
}

/// Appends an already built review to its movie and, when the author is a
/// registered user, to that user's review list. `None` when the movie is
/// unknown or already holds a review with the same id.
pub fn attach_review<R: Repository + ?Sized>(repo: &mut R, review: Review) -> Option<ReviewId> {
    let review_id = review.id();
    let username = review.username().to_string();

    let ledger = repo.reviews_mut(review.movie_id())?;
    if !ledger.add(review) {
        debug!(%review_id, "review already attached");
        return None;
    }

    if let Some(user) = repo.user_mut(&username) {
        user.add_review(review_id);
    }
    debug!(%review_id, username = %username, "review attached");
    Some(review_id)
}

/// Removes review `review_id` from `movie_id`. Unknown movies and reviews that
/// are already gone are a no-op; the result says whether anything was removed.
pub fn remove_review<R: Repository + ?Sized>(repo: &mut R, review_id: &ReviewId, movie_id: &MovieId) -> bool {
    let Some(removed) = repo.reviews_mut(movie_id).and_then(|ledger| ledger.remove(review_id)) else {
        return false;
    };

    if let Some(user) = repo.user_mut(removed.username()) {
        user.remove_review(review_id);
    }
    debug!(%review_id, movie_id = %movie_id, "review removed");
    true
}

/// Reviews of `movie_id` in posting order, `None` for an unknown movie.
pub fn reviews_for_movie<R: Repository + ?Sized>(repo: &R, movie_id: &MovieId) -> Option<Vec<ReviewInfo>> {
    repo.movie_by_id(movie_id)
        .map(|movie| movie.reviews().iter().map(ReviewInfo::from).collect())
}
