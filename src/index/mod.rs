pub mod catalog;
pub mod secondary;

pub use catalog::CatalogIndex;
pub use secondary::SecondaryIndex;
