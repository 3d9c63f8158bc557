pub mod auth;
pub mod query;
pub mod results;
pub mod review;

pub use auth::CredentialVerifier;
pub use query::QueryService;
pub use results::{MovieInfo, MoviePage, MovieSummary, ReviewInfo, UserInfo};
