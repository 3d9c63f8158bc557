use tracing::{debug, warn};
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::MovieId;
use crate::model::user::{normalize_username, User};
use crate::repository::Repository;
use crate::service::results::UserInfo;

/// Password hashing and verification, supplied by the embedding application.
/// Hashes are opaque strings to the rest of the crate.
pub trait CredentialVerifier: Send + Sync {
    fn hash_password(&self, password: &str) -> String;

    fn verify_password(&self, password: &str, password_hash: &str) -> bool;
}

/// Registers a new user with a hashed password. Usernames are compared after
/// trimming and lowercasing, so "Alice" and "alice " are the same account.
pub fn register_user<R: Repository + ?Sized>(
    repo: &mut R,
    verifier: &dyn CredentialVerifier,
    username: &str,
    password: &str,
) -> Result<()> {
    let normalized = normalize_username(username);
    if normalized.is_empty() {
        return Err(Error::new(ErrorKind::InvalidArgument, "username must not be blank"));
    }
    if repo.user(&normalized).is_some() {
        return Err(Error::new(
            ErrorKind::Duplicate,
            format!("username {} is already taken", normalized),
        ));
    }

    let user = User::new(&normalized, &verifier.hash_password(password));
    repo.add_user(user);
    debug!(username = %normalized, "user registered");
    Ok(())
}

/// Unknown users and wrong passwords fail the same way.
pub fn authenticate_user<R: Repository + ?Sized>(
    repo: &R,
    verifier: &dyn CredentialVerifier,
    username: &str,
    password: &str,
) -> Result<UserInfo> {
    match repo.user(username) {
        Some(user) if verifier.verify_password(password, user.password_hash()) => Ok(UserInfo::from(user)),
        _ => {
            warn!(username, "authentication failed");
            Err(Error::new(ErrorKind::AuthenticationFailed, "invalid username or password"))
        }
    }
}

pub fn get_user<R: Repository + ?Sized>(repo: &R, username: &str) -> Option<UserInfo> {
    repo.user(username).map(UserInfo::from)
}

/// Adds `movie_id` to the user's watch history. `None` when either side is
/// unknown, otherwise whether the movie was newly watched.
pub fn watch_movie<R: Repository + ?Sized>(repo: &mut R, username: &str, movie_id: &MovieId) -> Option<bool> {
    let runtime = repo.movie_by_id(movie_id)?.runtime_minutes();
    let user = repo.user_mut(username)?;
    Some(user.watch(movie_id, runtime))
}
