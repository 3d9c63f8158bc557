use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Trimmed display name, or `None` when nothing is left after trimming.
pub(crate) fn clean_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Name-only entities: equality, hashing and ordering all go through the name.
macro_rules! named_entity {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            name: Option<String>,
        }

        impl $name {
            pub fn new(name: &str) -> Self {
                $name { name: clean_name(name) }
            }

            pub fn name(&self) -> Option<&str> {
                self.name.as_deref()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name.as_deref().unwrap_or(""))
            }
        }
    };
}

named_entity!(
    /// Film director
    Director
);

named_entity!(
    /// Genre tag ("Action", "Sci-Fi", ...)
    Genre
);

/// Cast member. Carries the names of the actors they have shared a movie with.
#[derive(Debug, Clone, Default)]
pub struct Actor {
    full_name: Option<String>,
    colleagues: BTreeSet<String>,
}

impl Actor {
    pub fn new(full_name: &str) -> Self {
        Actor {
            full_name: clean_name(full_name),
            colleagues: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    /// Records `colleague` as someone this actor worked with. Unnamed actors and
    /// the actor itself are ignored.
    pub fn add_colleague(&mut self, colleague: &Actor) {
        if let Some(name) = colleague.name() {
            if colleague != self {
                self.colleagues.insert(name.to_string());
            }
        }
    }

    pub fn has_worked_with(&self, colleague: &Actor) -> bool {
        colleague
            .name()
            .map(|name| self.colleagues.contains(name))
            .unwrap_or(false)
    }

    /// Colleague names in alphabetical order
    pub fn colleagues(&self) -> impl Iterator<Item = &str> {
        self.colleagues.iter().map(String::as_str)
    }
}

/// Links both actors to each other.
pub fn link_colleagues(a: &mut Actor, b: &mut Actor) {
    a.add_colleague(b);
    b.add_colleague(a);
}

impl PartialEq for Actor {
    fn eq(&self, other: &Self) -> bool {
        self.full_name == other.full_name
    }
}

impl Eq for Actor {}

impl Hash for Actor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.full_name.hash(state);
    }
}

impl PartialOrd for Actor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Actor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.full_name.cmp(&other.full_name)
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name.as_deref().unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_become_none() {
        assert_eq!(Actor::new("   ").name(), None);
        assert_eq!(Director::new("").name(), None);
        assert_eq!(Genre::new(" Drama ").name(), Some("Drama"));
    }

    #[test]
    fn colleagues_ignore_self_and_unnamed() {
        let mut actor = Actor::new("Chris Pratt");
        actor.add_colleague(&Actor::new("Chris Pratt"));
        actor.add_colleague(&Actor::new(""));
        assert_eq!(actor.colleagues().count(), 0);
    }
}
