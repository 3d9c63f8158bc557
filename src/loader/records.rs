use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::error::Result;
use crate::core::types::MovieId;
use crate::model::movie::Movie;
use crate::model::person::{Actor, Director, Genre};

/// One row of movie metadata as handed over by the data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    pub year: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub runtime_minutes: Option<i64>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub actors: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl MovieRecord {
    pub fn new(title: &str, year: i32) -> Self {
        MovieRecord {
            title: title.to_string(),
            year,
            description: None,
            runtime_minutes: None,
            director: None,
            actors: Vec::new(),
            genres: Vec::new(),
        }
    }

    /// Builds the movie. Blank text fields are dropped; a non-positive runtime
    /// is the only thing that fails.
    pub fn into_movie(self) -> Result<Movie> {
        let mut movie = Movie::new(&self.title, self.year);
        if let Some(description) = &self.description {
            movie.set_description(description);
        }
        if let Some(runtime) = self.runtime_minutes {
            movie.set_runtime_minutes(runtime)?;
        }
        if let Some(director) = &self.director {
            movie.set_director(Director::new(director));
        }
        for actor in &self.actors {
            movie.add_actor(Actor::new(actor));
        }
        for genre in &self.genres {
            movie.add_genre(Genre::new(genre));
        }
        Ok(movie)
    }
}

/// Registered user with an already hashed password
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub movie_id: MovieId,
    pub username: String,
    pub rating: i64,
    pub comment: String,
    /// Defaults to the load time
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}
