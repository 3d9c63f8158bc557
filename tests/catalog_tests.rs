mod common;

use cinedex::index::CatalogIndex;
use cinedex::model::{Actor, Movie};
use cinedex::{ErrorKind, Facet, IdentityMode, MovieId, ResultOrder};
use common::{catalog, fixture_movies, movie_titles};
use rand::seq::SliceRandom;
use rand::Rng;

#[test]
fn keeps_catalog_order_whatever_the_insert_order() {
    let mut catalog = CatalogIndex::new();
    let mut movies = fixture_movies();
    movies.reverse();
    movies.swap(0, 2);
    for movie in movies {
        assert!(catalog.add(movie));
    }

    assert_eq!(
        movie_titles(catalog.iter()),
        vec!["Movie1", "Movie2", "Movie3", "Movie4", "Movie5"]
    );
    assert_eq!(catalog.first().and_then(Movie::title), Some("Movie1"));
    assert_eq!(catalog.last().and_then(Movie::title), Some("Movie5"));
}

#[test]
fn title_then_year_ordering_is_case_insensitive() {
    let mut catalog = CatalogIndex::new();
    catalog.add(Movie::new("beta", 2001));
    catalog.add(Movie::new("Alpha", 2005));
    catalog.add(Movie::new("alpha", 1999));
    catalog.add(Movie::new("Beta", 1990));

    let order: Vec<(String, Option<i32>)> = catalog
        .iter()
        .map(|m| (m.title().unwrap_or_default().to_string(), m.year()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("alpha".to_string(), Some(1999)),
            ("Alpha".to_string(), Some(2005)),
            ("Beta".to_string(), Some(1990)),
            ("beta".to_string(), Some(2001)),
        ]
    );
}

#[test]
fn stays_sorted_after_every_insert() {
    let mut rng = rand::thread_rng();
    let mut movies: Vec<Movie> = (0..200)
        .map(|i| Movie::new(&format!("Title {}", rng.gen_range(0..60)), 1990 + (i % 30)))
        .collect();
    movies.shuffle(&mut rng);

    let mut catalog = CatalogIndex::new();
    for movie in movies {
        catalog.add(movie);
        let all: Vec<&Movie> = catalog.iter().collect();
        assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(all.len(), catalog.total_count());
    }
}

#[test]
fn rejects_duplicate_title_and_year() {
    let mut catalog = catalog();
    let generation = catalog.generation();

    assert!(!catalog.add(Movie::new("MOVIE1", 2000)));
    assert_eq!(catalog.total_count(), 5);
    assert_eq!(catalog.generation(), generation);

    // Same title, different year is a different movie
    assert!(catalog.add(Movie::new("Movie1", 2010)));
    assert_eq!(catalog.len(), 6);
}

#[test]
fn distinct_movies_sharing_a_derived_id_are_both_kept() {
    let mut catalog = CatalogIndex::new();

    assert!(catalog.add(Movie::new("A B", 2000)));
    assert!(catalog.add(Movie::new("A_B", 2000)));
    assert!(catalog.add(Movie::new("a\tb", 2000)));
    assert_eq!(catalog.total_count(), 3);

    let spaced = catalog.get_by_title_year("A B", 2000).unwrap();
    assert_eq!(spaced.id().as_str(), "a_b_2000");
    let underscored = catalog.get_by_title_year("A_B", 2000).unwrap();
    assert_eq!(underscored.id().as_str(), "a_b_2000_2");
    assert_eq!(underscored.id_suffix(), Some(2));
    let tabbed = catalog.get_by_title_year("a\tb", 2000).unwrap();
    assert_eq!(tabbed.id().as_str(), "a_b_2000_3");

    for id in ["a_b_2000", "a_b_2000_2", "a_b_2000_3"] {
        assert!(catalog.get_by_id(&MovieId::from(id)).is_some());
    }

    // Freed suffixes are reused
    catalog.delete(&Movie::new("A_B", 2000)).unwrap();
    assert!(catalog.add(Movie::new("a_B", 2000)));
    assert_eq!(catalog.get_by_title_year("a_B", 2000).map(Movie::id), Some(&MovieId::from("a_b_2000_2")));
}

#[test]
fn pages_are_element_offsets() {
    let catalog = catalog();

    assert_eq!(movie_titles(catalog.get_page(2, 0)), vec!["Movie1", "Movie2"]);
    assert_eq!(movie_titles(catalog.get_page(2, 2)), vec!["Movie3", "Movie4"]);
    assert_eq!(movie_titles(catalog.get_page(2, 4)), vec!["Movie5"]);
    assert!(catalog.get_page(2, 5).is_empty());
    assert!(catalog.get_page(0, 0).is_empty());
}

#[test]
fn lookup_by_title_and_year() {
    let catalog = catalog();

    let movie = catalog.get_by_title_year("movie3", 2002).unwrap();
    assert_eq!(movie.id().as_str(), "movie3_2002");
    assert!(catalog.get_by_title_year("Movie3", 2003).is_none());
    assert!(catalog.get_by_title_year("Movie9", 2002).is_none());

    let by_id = catalog.get_by_id(&MovieId::from("movie3_2002")).unwrap();
    assert_eq!(by_id, movie);
}

#[test]
fn years_before_1900_are_stored_as_unknown() {
    let mut catalog = CatalogIndex::new();
    assert!(catalog.add(Movie::new("Nosferatu", 1850)));

    let movie = catalog.get_by_title_year("Nosferatu", 1700).unwrap();
    assert_eq!(movie.year(), None);
    assert_eq!(movie.id().as_str(), "nosferatu_none");
}

#[test]
fn delete_purges_every_view() {
    let mut catalog = catalog();
    let id = MovieId::from("movie3_2002");

    let removed = catalog.delete(&Movie::new("Movie3", 2002)).unwrap();
    assert_eq!(removed.id(), &id);
    assert_eq!(catalog.len(), 4);
    assert!(catalog.get_by_id(&id).is_none());
    assert!(catalog.get_by_title_year("Movie3", 2002).is_none());
    assert_eq!(
        movie_titles(catalog.iter()),
        vec!["Movie1", "Movie2", "Movie4", "Movie5"]
    );

    for facet in Facet::ALL {
        for name in catalog.facet_names(facet) {
            assert!(catalog
                .movies_by(facet, name, ResultOrder::Discovery)
                .iter()
                .all(|m| m.id() != &id));
        }
    }
    assert_eq!(
        movie_titles(catalog.movies_by(Facet::Actor, "Actor3", ResultOrder::Discovery)),
        vec!["Movie4", "Movie5"]
    );

    // Deleting again is a no-op
    assert!(catalog.delete(&Movie::new("Movie3", 2002)).is_none());
    assert_eq!(catalog.len(), 4);
}

#[test]
fn delete_then_re_add_restores_the_catalog() {
    let mut catalog = catalog();
    let movie = catalog.delete_by_id(&MovieId::from("movie1_2000")).unwrap();

    assert!(catalog.actor("Actor1").is_none());
    assert!(!catalog.facet_names(Facet::Actor).contains(&"Actor1"));

    assert!(catalog.add(movie));
    assert_eq!(catalog.first().and_then(Movie::title), Some("Movie1"));
    assert_eq!(catalog.count_by(Facet::Actor, "Actor1"), 1);
}

#[test]
fn secondary_lookups_are_exact() {
    let catalog = catalog();

    assert_eq!(
        movie_titles(catalog.movies_by(Facet::Director, "Director1", ResultOrder::Discovery)),
        vec!["Movie1", "Movie2", "Movie3"]
    );
    assert_eq!(
        movie_titles(catalog.movies_by(Facet::Genre, "Genre1", ResultOrder::Discovery)),
        vec!["Movie1", "Movie3", "Movie5"]
    );
    assert_eq!(catalog.count_by(Facet::Actor, "Actor5"), 5);

    assert!(catalog.movies_by(Facet::Director, "director1", ResultOrder::Discovery).is_empty());
    assert!(catalog.movies_by(Facet::Director, "Director", ResultOrder::Discovery).is_empty());
    assert_eq!(catalog.facet_names(Facet::Genre), vec!["Genre1", "Genre2"]);
}

#[test]
fn result_order_discovery_versus_catalog() {
    let mut catalog = CatalogIndex::new();
    for mut movie in fixture_movies().into_iter().rev() {
        movie.add_actor(Actor::new("Everyone"));
        catalog.add(movie);
    }

    assert_eq!(
        movie_titles(catalog.movies_by(Facet::Actor, "Everyone", ResultOrder::Discovery)),
        vec!["Movie5", "Movie4", "Movie3", "Movie2", "Movie1"]
    );
    assert_eq!(
        movie_titles(catalog.movies_by(Facet::Actor, "Everyone", ResultOrder::Catalog)),
        vec!["Movie1", "Movie2", "Movie3", "Movie4", "Movie5"]
    );
}

#[test]
fn colleagues_are_derived_from_shared_movies() {
    let mut catalog = catalog();

    let actor1 = catalog.actor("Actor1").unwrap();
    assert_eq!(actor1.colleagues().collect::<Vec<_>>(), vec!["Actor2", "Actor4", "Actor5"]);
    assert!(actor1.has_worked_with(&Actor::new("Actor2")));
    assert!(!actor1.has_worked_with(&Actor::new("Actor3")));

    let actor3 = catalog.actor("Actor3").unwrap();
    assert_eq!(actor3.colleagues().collect::<Vec<_>>(), vec!["Actor4", "Actor5"]);

    catalog.delete(&Movie::new("Movie1", 2000));
    let actor2 = catalog.actor("Actor2").unwrap();
    assert!(!actor2.has_worked_with(&Actor::new("Actor1")));
    assert!(catalog.actor("Nobody").is_none());
}

#[test]
fn generation_moves_on_every_mutation() {
    let mut catalog = CatalogIndex::new();
    assert_eq!(catalog.generation(), 0);

    catalog.add(Movie::new("Moana", 2016));
    assert_eq!(catalog.generation(), 1);
    catalog.delete(&Movie::new("Moana", 2016));
    assert_eq!(catalog.generation(), 2);
    catalog.delete(&Movie::new("Moana", 2016));
    assert_eq!(catalog.generation(), 2);
}

#[test]
fn lenient_retitle_keeps_the_identifier() {
    let mut catalog = catalog();
    let id = MovieId::from("movie1_2000");

    let kept = catalog.retitle(&id, "Zulu", 2000, IdentityMode::Lenient).unwrap();
    assert_eq!(kept, id);

    let movie = catalog.get_by_id(&id).unwrap();
    assert_eq!(movie.title(), Some("Zulu"));
    assert!(movie.identity_is_stale());
    assert_eq!(catalog.last().map(Movie::id), Some(&id));
    assert!(catalog.get_by_title_year("Zulu", 2000).is_some());
    assert!(catalog.get_by_title_year("Movie1", 2000).is_none());

    // A fresh Movie1 is catalogued under the next free identifier
    assert!(catalog.add(Movie::new("Movie1", 2000)));
    let fresh = catalog.get_by_title_year("Movie1", 2000).unwrap();
    assert_eq!(fresh.id().as_str(), "movie1_2000_2");
    assert_eq!(fresh.base_id(), &id);
    assert!(!fresh.identity_is_stale());
    assert_eq!(catalog.get_by_id(&id).and_then(Movie::title), Some("Zulu"));
    assert_eq!(catalog.total_count(), 6);
}

#[test]
fn strict_retitle_rekeys_every_index() {
    let mut catalog = catalog();
    let old = MovieId::from("movie1_2000");

    let new = catalog.retitle(&old, "Zulu", 2000, IdentityMode::Strict).unwrap();
    assert_eq!(new.as_str(), "zulu_2000");
    assert!(catalog.get_by_id(&old).is_none());

    let movie = catalog.get_by_id(&new).unwrap();
    assert!(!movie.identity_is_stale());
    assert_eq!(
        movie_titles(catalog.movies_by(Facet::Director, "Director1", ResultOrder::Discovery)),
        vec!["Zulu", "Movie2", "Movie3"]
    );
    assert_eq!(catalog.last().map(Movie::id), Some(&new));

    assert!(catalog.add(Movie::new("Movie1", 2000)));
}

#[test]
fn strict_retitle_onto_a_held_identifier_takes_a_suffix() {
    let mut catalog = catalog();
    assert!(catalog.add(Movie::new("A B", 2000)));
    let old = MovieId::from("movie2_2001");

    let new = catalog.retitle(&old, "A_B", 2000, IdentityMode::Strict).unwrap();
    assert_eq!(new.as_str(), "a_b_2000_2");
    assert!(catalog.get_by_id(&old).is_none());
    assert_eq!(catalog.get_by_id(&new).and_then(Movie::title), Some("A_B"));
    assert_eq!(catalog.get_by_id(&MovieId::from("a_b_2000")).and_then(Movie::title), Some("A B"));
    assert!(!catalog.get_by_id(&new).unwrap().identity_is_stale());
    assert_eq!(catalog.total_count(), 6);
}

#[test]
fn retitle_onto_another_movie_is_rejected() {
    let mut catalog = catalog();
    let id = MovieId::from("movie1_2000");

    for mode in [IdentityMode::Lenient, IdentityMode::Strict] {
        let err = catalog.retitle(&id, "movie2", 2001, mode).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Duplicate);
    }
    assert_eq!(catalog.get_by_id(&id).and_then(Movie::title), Some("Movie1"));

    let err = catalog
        .retitle(&MovieId::from("missing_1999"), "X", 2000, IdentityMode::Strict)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
