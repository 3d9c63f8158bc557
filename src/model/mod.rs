pub mod entity;
pub mod movie;
pub mod person;
pub mod review;
pub mod user;

pub use entity::EntityRef;
pub use movie::{Movie, SortKey, MIN_YEAR};
pub use person::{link_colleagues, Actor, Director, Genre};
pub use review::{Review, ReviewLedger};
pub use user::{normalize_username, User};
