mod common;

use cinedex::model::{Review, ReviewLedger};
use cinedex::repository::Repository;
use cinedex::service::review::{add_review, attach_review, remove_review, reviews_for_movie};
use cinedex::{MovieId, ReviewId};
use common::{library, memory_repo};

#[test]
fn review_lifecycle() {
    let mut repo = memory_repo();
    let movie_id = MovieId::from("movie1_2000");

    let review_id = add_review(&mut repo, &movie_id, "ExistUser", "Loved it", 9).unwrap();

    let reviews = reviews_for_movie(&repo, &movie_id).unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].id, review_id);
    assert_eq!(reviews[0].comment, "Loved it");
    assert_eq!(reviews[0].rating, Some(9));
    assert_eq!(reviews[0].username, "existuser");
    assert_eq!(reviews[0].movie_id, movie_id);
    assert_eq!(repo.user("ExistUser").unwrap().reviews(), &[review_id]);

    assert!(remove_review(&mut repo, &review_id, &movie_id));
    assert!(reviews_for_movie(&repo, &movie_id).unwrap().is_empty());
    assert!(repo.user("ExistUser").unwrap().reviews().is_empty());

    // Removing it a second time changes nothing
    assert!(!remove_review(&mut repo, &review_id, &movie_id));
    assert!(reviews_for_movie(&repo, &movie_id).unwrap().is_empty());
}

#[test]
fn reviews_keep_posting_order() {
    let mut repo = memory_repo();
    let movie_id = MovieId::from("movie4_2003");

    let first = add_review(&mut repo, &movie_id, "ExistUser", "first", 3).unwrap();
    let second = add_review(&mut repo, &movie_id, "guest", "second", 5).unwrap();
    let third = add_review(&mut repo, &movie_id, "ExistUser", "third", 8).unwrap();

    let ids: Vec<ReviewId> = reviews_for_movie(&repo, &movie_id)
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![first, second, third]);

    assert!(remove_review(&mut repo, &second, &movie_id));
    let comments: Vec<String> = reviews_for_movie(&repo, &movie_id)
        .unwrap()
        .into_iter()
        .map(|r| r.comment)
        .collect();
    assert_eq!(comments, vec!["first", "third"]);
}

#[test]
fn unknown_movie_takes_no_review() {
    let mut repo = memory_repo();
    let missing = MovieId::from("movie9_2009");

    assert!(add_review(&mut repo, &missing, "ExistUser", "?", 5).is_none());
    assert!(reviews_for_movie(&repo, &missing).is_none());
    assert!(!remove_review(&mut repo, &ReviewId::new(), &missing));
    assert!(repo.user("ExistUser").unwrap().reviews().is_empty());
}

#[test]
fn out_of_range_ratings_are_dropped() {
    let mut repo = memory_repo();
    let movie_id = MovieId::from("movie2_2001");

    add_review(&mut repo, &movie_id, "ExistUser", "too low", 0).unwrap();
    add_review(&mut repo, &movie_id, "ExistUser", "too high", 11).unwrap();
    add_review(&mut repo, &movie_id, "ExistUser", "top", 10).unwrap();

    let ratings: Vec<Option<u8>> = reviews_for_movie(&repo, &movie_id)
        .unwrap()
        .into_iter()
        .map(|r| r.rating)
        .collect();
    assert_eq!(ratings, vec![None, None, Some(10)]);
}

#[test]
fn review_ids_do_not_collide_for_the_same_author() {
    let mut repo = memory_repo();
    let movie_id = MovieId::from("movie3_2002");

    let a = add_review(&mut repo, &movie_id, "ExistUser", "same", 6).unwrap();
    let b = add_review(&mut repo, &movie_id, "ExistUser", "same", 6).unwrap();
    assert_ne!(a, b);
    assert_eq!(reviews_for_movie(&repo, &movie_id).unwrap().len(), 2);
}

#[test]
fn ledger_ignores_repeated_ids() {
    let review = Review::new(MovieId::from("movie1_2000"), "ExistUser", "once", 4);
    let mut ledger = ReviewLedger::new();

    assert!(ledger.add(review.clone()));
    assert!(!ledger.add(review.clone()));
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.get(&review.id()), Some(&review));

    assert_eq!(ledger.remove(&review.id()), Some(review.clone()));
    assert!(ledger.remove(&review.id()).is_none());
    assert!(ledger.is_empty());
}

#[test]
fn library_review_round_trip() {
    let library = library();
    let movie_id = MovieId::from("movie5_2004");

    let review_id = library.add_review(&movie_id, "existuser", "Finale", 8).unwrap();
    assert_eq!(library.user("ExistUser").unwrap().review_count, 1);
    assert_eq!(library.stats().total_reviews, 1);

    assert!(library.remove_review(&review_id, &movie_id));
    assert!(library.reviews(&movie_id).unwrap().is_empty());
    assert_eq!(library.user("ExistUser").unwrap().review_count, 0);
}

#[test]
fn deleting_a_movie_drops_its_reviews() {
    let library = library();
    let movie_id = MovieId::from("movie1_2000");
    library.add_review(&movie_id, "ExistUser", "gone soon", 2).unwrap();

    let movie = cinedex::model::Movie::new("Movie1", 2000);
    assert!(library.delete_movie(&movie));
    assert!(library.reviews(&movie_id).is_none());
    assert_eq!(library.stats().total_reviews, 0);
    assert_eq!(library.user("ExistUser").unwrap().review_count, 0);
}

#[test]
fn attaching_the_same_review_twice_is_refused() {
    let mut repo = memory_repo();
    let review = Review::new(MovieId::from("movie2_2001"), "ExistUser", "twice", 5);

    assert_eq!(attach_review(&mut repo, review.clone()), Some(review.id()));
    assert_eq!(attach_review(&mut repo, review.clone()), None);

    assert_eq!(reviews_for_movie(&repo, &MovieId::from("movie2_2001")).unwrap().len(), 1);
    assert_eq!(repo.user("ExistUser").unwrap().reviews().len(), 1);
}
