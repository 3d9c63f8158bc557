pub mod memory;

pub use memory::MemoryRepository;

use crate::core::config::{IdentityMode, ResultOrder};
use crate::core::error::Result;
use crate::core::types::{Facet, MovieId};
use crate::model::movie::Movie;
use crate::model::person::Actor;
use crate::model::review::ReviewLedger;
use crate::model::user::User;

/// Storage capability the services are written against.
///
/// Misses are `None`, duplicates are `false`; only operations with a real
/// failure mode return `Result`.
pub trait Repository {
    fn add_movie(&mut self, movie: Movie) -> bool;

    fn delete_movie(&mut self, movie: &Movie) -> bool;

    fn movie(&self, title: &str, year: i32) -> Option<&Movie>;

    fn movie_by_id(&self, id: &MovieId) -> Option<&Movie>;

    /// At most `count` movies in catalog order, starting at element `offset`
    fn movies(&self, count: usize, offset: usize) -> Vec<&Movie>;

    fn total_movies(&self) -> usize;

    fn first_movie(&self) -> Option<&Movie>;

    fn last_movie(&self) -> Option<&Movie>;

    fn movies_by(&self, facet: Facet, name: &str, order: ResultOrder) -> Vec<&Movie>;

    /// Every name known for `facet`, in a stable order
    fn facet_names(&self, facet: Facet) -> Vec<&str>;

    fn actor(&self, name: &str) -> Option<Actor>;

    fn retitle_movie(&mut self, id: &MovieId, title: &str, year: i32, mode: IdentityMode) -> Result<MovieId>;

    fn reviews_mut(&mut self, movie_id: &MovieId) -> Option<&mut ReviewLedger>;

    fn add_user(&mut self, user: User) -> bool;

    fn user(&self, username: &str) -> Option<&User>;

    fn user_mut(&mut self, username: &str) -> Option<&mut User>;

    fn total_users(&self) -> usize;

    /// Changes whenever movies are added, removed or re-keyed
    fn generation(&self) -> u64;
}
