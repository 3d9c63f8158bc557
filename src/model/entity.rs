use std::cmp::Ordering;
use crate::core::error::{Error, ErrorKind, Result};
use crate::model::movie::Movie;
use crate::model::person::{Actor, Director, Genre};
use crate::model::review::Review;
use crate::model::user::User;

/// Borrowed view over any catalog entity, for code that holds mixed kinds and
/// still wants to order them.
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    Movie(&'a Movie),
    Actor(&'a Actor),
    Director(&'a Director),
    Genre(&'a Genre),
    Review(&'a Review),
    User(&'a User),
}

impl<'a> EntityRef<'a> {
    pub fn kind(&self) -> &'static str {
        match self {
            EntityRef::Movie(_) => "Movie",
            EntityRef::Actor(_) => "Actor",
            EntityRef::Director(_) => "Director",
            EntityRef::Genre(_) => "Genre",
            EntityRef::Review(_) => "Review",
            EntityRef::User(_) => "User",
        }
    }

    /// Orders two entities of the same kind. Mixing kinds is a caller bug and
    /// fails with `TypeMismatch`; reviews have no ordering at all.
    pub fn try_cmp(&self, other: &EntityRef<'_>) -> Result<Ordering> {
        match (self, other) {
            (EntityRef::Movie(a), EntityRef::Movie(b)) => Ok(a.cmp(b)),
            (EntityRef::Actor(a), EntityRef::Actor(b)) => Ok(a.cmp(b)),
            (EntityRef::Director(a), EntityRef::Director(b)) => Ok(a.cmp(b)),
            (EntityRef::Genre(a), EntityRef::Genre(b)) => Ok(a.cmp(b)),
            (EntityRef::User(a), EntityRef::User(b)) => Ok(a.cmp(b)),
            (EntityRef::Review(_), EntityRef::Review(_)) => Err(Error::new(
                ErrorKind::TypeMismatch,
                "Review instances have no ordering",
            )),
            _ => Err(Error::new(
                ErrorKind::TypeMismatch,
                format!("Cannot compare {} instance with {}", self.kind(), other.kind()),
            )),
        }
    }

    pub fn try_lt(&self, other: &EntityRef<'_>) -> Result<bool> {
        Ok(self.try_cmp(other)? == Ordering::Less)
    }

    /// Equality never fails: different kinds are simply unequal.
    pub fn same_as(&self, other: &EntityRef<'_>) -> bool {
        match (self, other) {
            (EntityRef::Movie(a), EntityRef::Movie(b)) => a == b,
            (EntityRef::Actor(a), EntityRef::Actor(b)) => a == b,
            (EntityRef::Director(a), EntityRef::Director(b)) => a == b,
            (EntityRef::Genre(a), EntityRef::Genre(b)) => a == b,
            (EntityRef::Review(a), EntityRef::Review(b)) => a == b,
            (EntityRef::User(a), EntityRef::User(b)) => a == b,
            _ => false,
        }
    }
}

impl<'a> From<&'a Movie> for EntityRef<'a> {
    fn from(movie: &'a Movie) -> Self {
        EntityRef::Movie(movie)
    }
}

impl<'a> From<&'a Actor> for EntityRef<'a> {
    fn from(actor: &'a Actor) -> Self {
        EntityRef::Actor(actor)
    }
}

impl<'a> From<&'a Director> for EntityRef<'a> {
    fn from(director: &'a Director) -> Self {
        EntityRef::Director(director)
    }
}

impl<'a> From<&'a Genre> for EntityRef<'a> {
    fn from(genre: &'a Genre) -> Self {
        EntityRef::Genre(genre)
    }
}

impl<'a> From<&'a Review> for EntityRef<'a> {
    fn from(review: &'a Review) -> Self {
        EntityRef::Review(review)
    }
}

impl<'a> From<&'a User> for EntityRef<'a> {
    fn from(user: &'a User) -> Self {
        EntityRef::User(user)
    }
}
