pub mod records;

pub use records::{MovieRecord, ReviewRecord, UserRecord};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, info, warn};
use crate::core::error::{Error, ErrorKind, Result};
use crate::model::review::Review;
use crate::model::user::{normalize_username, User};
use crate::repository::Repository;
use crate::service::review::attach_review;

/// Outcome of a bulk load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub added: usize,
    pub duplicates: usize,
    /// Records that could not be turned into entities (non-positive runtime)
    pub rejected: usize,
}

/// Adds every movie record to `repo`. Repeated (title, year) pairs keep the
/// first occurrence; records with an invalid runtime are skipped and counted.
pub fn load_movies<R, I>(repo: &mut R, records: I) -> LoadReport
where
    R: Repository + ?Sized,
    I: IntoIterator<Item = MovieRecord>,
{
    let mut report = LoadReport::default();
    for record in records {
        let title = record.title.clone();
        match record.into_movie() {
            Ok(movie) => {
                if repo.add_movie(movie) {
                    report.added += 1;
                } else {
                    report.duplicates += 1;
                }
            }
            Err(e) => {
                warn!(title = %title, error = %e, "skipping movie record");
                report.rejected += 1;
            }
        }
    }
    info!(added = report.added, duplicates = report.duplicates, rejected = report.rejected, "movies loaded");
    report
}

/// Adds every user record. Later records reusing a username are reported as
/// duplicates and dropped; blank usernames are rejected.
pub fn load_users<R, I>(repo: &mut R, records: I) -> LoadReport
where
    R: Repository + ?Sized,
    I: IntoIterator<Item = UserRecord>,
{
    let mut report = LoadReport::default();
    for record in records {
        if normalize_username(&record.username).is_empty() {
            warn!("skipping user record with a blank username");
            report.rejected += 1;
            continue;
        }
        if repo.add_user(User::new(&record.username, &record.password_hash)) {
            report.added += 1;
        } else {
            warn!(username = %record.username, "duplicate username in user records");
            report.duplicates += 1;
        }
    }
    info!(added = report.added, duplicates = report.duplicates, rejected = report.rejected, "users loaded");
    report
}

/// Attaches every review record to its movie.
///
/// All records are checked before any is attached: a reference to an unknown
/// movie or user fails the whole load with `DataIntegrity` and leaves the
/// repository untouched.
pub fn load_reviews<R, I>(repo: &mut R, records: I) -> Result<LoadReport>
where
    R: Repository + ?Sized,
    I: IntoIterator<Item = ReviewRecord>,
{
    let records: Vec<ReviewRecord> = records.into_iter().collect();

    for (index, record) in records.iter().enumerate() {
        if repo.movie_by_id(&record.movie_id).is_none() {
            error!(record = index, movie_id = %record.movie_id, "review references unknown movie");
            return Err(Error::new(
                ErrorKind::DataIntegrity,
                format!("review record {} references unknown movie {}", index, record.movie_id),
            ));
        }
        if repo.user(&record.username).is_none() {
            error!(record = index, username = %record.username, "review references unknown user");
            return Err(Error::new(
                ErrorKind::DataIntegrity,
                format!("review record {} references unknown user {}", index, record.username),
            ));
        }
    }

    let mut report = LoadReport::default();
    for record in records {
        let review = Review::with_timestamp(
            record.movie_id,
            &record.username,
            &record.comment,
            record.rating,
            record.timestamp.unwrap_or_else(Utc::now),
        );
        if attach_review(repo, review).is_some() {
            report.added += 1;
        }
    }
    info!(added = report.added, "reviews loaded");
    Ok(report)
}

/// Parses one JSON document per line. Blank lines are skipped; a malformed
/// line fails with `Parse` naming its line number.
pub fn read_json_lines<T, B>(reader: B) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    B: BufRead,
{
    let mut items = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let item = serde_json::from_str(&line).map_err(|e| {
            Error::new(ErrorKind::Parse, format!("line {}: {}", index + 1, e))
        })?;
        items.push(item);
    }
    Ok(items)
}

pub fn read_json_lines_from_path<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let file = File::open(path)?;
    read_json_lines(BufReader::new(file))
}
