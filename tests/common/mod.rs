#![allow(dead_code)]

use std::sync::Arc;
use cinedex::index::CatalogIndex;
use cinedex::model::{Actor, Director, Genre, Movie, User};
use cinedex::repository::{MemoryRepository, Repository};
use cinedex::service::{CredentialVerifier, MoviePage};
use cinedex::{Config, Library};

pub const EXISTING_USER: &str = "ExistUser";
pub const EXISTING_PASSWORD: &str = "Password123";

/// Reversible stand-in for a real password hasher
pub struct PlainVerifier;

impl CredentialVerifier for PlainVerifier {
    fn hash_password(&self, password: &str) -> String {
        format!("plain:{}", password)
    }

    fn verify_password(&self, password: &str, password_hash: &str) -> bool {
        password_hash == self.hash_password(password)
    }
}

/// Movie1..Movie5 (2000..2004).
///
/// | movie  | actors                         | director  | genre  |
/// |--------|--------------------------------|-----------|--------|
/// | Movie1 | Actor1, Actor2, Actor4, Actor5 | Director1 | Genre1 |
/// | Movie2 | Actor2, Actor4, Actor5         | Director1 | Genre2 |
/// | Movie3 | Actor3, Actor5                 | Director1 | Genre1 |
/// | Movie4 | Actor3, Actor4, Actor5         | Director2 | Genre2 |
/// | Movie5 | Actor3, Actor4, Actor5         | Director2 | Genre1 |
pub fn fixture_movies() -> Vec<Movie> {
    let casts: [(&str, i32, &[&str], &str, &str); 5] = [
        ("Movie1", 2000, &["Actor1", "Actor2", "Actor4", "Actor5"], "Director1", "Genre1"),
        ("Movie2", 2001, &["Actor2", "Actor4", "Actor5"], "Director1", "Genre2"),
        ("Movie3", 2002, &["Actor3", "Actor5"], "Director1", "Genre1"),
        ("Movie4", 2003, &["Actor3", "Actor4", "Actor5"], "Director2", "Genre2"),
        ("Movie5", 2004, &["Actor3", "Actor4", "Actor5"], "Director2", "Genre1"),
    ];

    casts
        .iter()
        .map(|(title, year, actors, director, genre)| {
            let mut movie = Movie::new(title, *year);
            for actor in *actors {
                movie.add_actor(Actor::new(actor));
            }
            movie.set_director(Director::new(director));
            movie.add_genre(Genre::new(genre));
            movie
        })
        .collect()
}

pub fn catalog() -> CatalogIndex {
    let mut catalog = CatalogIndex::new();
    for movie in fixture_movies() {
        assert!(catalog.add(movie));
    }
    catalog
}

pub fn memory_repo() -> MemoryRepository {
    let mut repo = MemoryRepository::new();
    for movie in fixture_movies() {
        assert!(repo.add_movie(movie));
    }
    let hash = PlainVerifier.hash_password(EXISTING_PASSWORD);
    assert!(repo.add_user(User::new(EXISTING_USER, &hash)));
    repo
}

pub fn library_with(config: Config) -> Library {
    let library = Library::new(config, Arc::new(PlainVerifier));
    for movie in fixture_movies() {
        assert!(library.add_movie(movie));
    }
    library
        .register_user(EXISTING_USER, EXISTING_PASSWORD)
        .expect("fixture user registers");
    library
}

pub fn library() -> Library {
    library_with(Config::default())
}

pub fn titles(page: &MoviePage) -> Vec<String> {
    page.movies
        .iter()
        .map(|m| m.title.clone().unwrap_or_default())
        .collect()
}

pub fn movie_titles<'a>(movies: impl IntoIterator<Item = &'a Movie>) -> Vec<String> {
    movies
        .into_iter()
        .map(|m| m.title().unwrap_or_default().to_string())
        .collect()
}
